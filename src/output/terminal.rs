// Colored terminal output for the dashboard views.
//
// Each view (dashboard, query canvas, comparison, panel card, trending
// keywords) has one display function here. main.rs fetches, these render.

use colored::Colorize;
use serde_json::Value;

use crate::api::models::{DashboardSummary, Kpi, PanelSearchResponse, SqlSearchResponse};
use crate::charts::Donut;
use crate::keywords::KeywordCount;

use super::{bar, truncate_chars};

/// Fields shown first on a panel card, in this order.
const CARD_HEADLINE_FIELDS: &[&str] = &["mb_sn", "gender", "age_group", "region"];

/// Display the dashboard landing view: KPIs then recent queries.
pub fn display_dashboard(summary: &DashboardSummary) {
    println!("\n{}", "=== Dashboard ===".bold());
    println!();

    if summary.kpis.is_empty() {
        println!("  {}", "No KPIs reported.".dimmed());
    }
    for kpi in &summary.kpis {
        println!(
            "  {:<20} {:>12}  {}",
            kpi.label.bold(),
            format_kpi_value(kpi),
            colorize_trend(kpi.trend)
        );
    }

    if !summary.recent_queries.is_empty() {
        println!("\n  {}", "Recent queries".bold());
        for (i, query) in summary.recent_queries.iter().enumerate() {
            let count = query
                .result_count
                .map(|c| format!("{c} matches"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:>2}. {:<50} {:>14}  {}",
                i + 1,
                truncate_chars(&query.prompt, 48),
                count,
                query.created_at.as_deref().unwrap_or("").dimmed()
            );
        }
    }
    println!();
}

/// Display the answer of a natural-language SQL search.
pub fn display_sql_answer(prompt: &str, response: &SqlSearchResponse) {
    println!("\n{}", format!("=== {} ===", truncate_chars(prompt, 60)).bold());
    println!();
    println!("{}", response.answer);
    println!();

    let shown = response.rows().len();
    match response.count {
        Some(total) => println!("  Matches: {} ({} rows returned)", total.to_string().bold(), shown),
        None if shown > 0 => println!("  Rows returned: {}", shown.to_string().bold()),
        None => {}
    }
    if response.tool_called == Some(false) {
        println!("  {}", "Answered without running a query.".dimmed());
    }
}

/// Display the query canvas: chips, filters, and the estimated match count.
pub fn display_search(query: &str, response: &PanelSearchResponse) {
    println!("\n{}", format!("=== Search: {} ===", truncate_chars(query, 60)).bold());
    println!();

    if response.chips.is_empty() {
        println!("  {}", "No conditions recognized.".dimmed());
    } else {
        let chips: Vec<String> = response
            .chips
            .iter()
            .map(|chip| match &chip.kind {
                Some(kind) => format!("[{}: {}]", kind.dimmed(), chip.label.cyan()),
                None => format!("[{}]", chip.label.cyan()),
            })
            .collect();
        println!("  Conditions: {}", chips.join(" "));
    }

    for (key, value) in &response.filters {
        println!("    {:<16} {}", key.dimmed(), scalar_text(value));
    }

    if let Some(estimate) = response.estimated_count {
        println!("  Estimated matches: {}", estimate.to_string().bold());
    }
    if !response.panels.is_empty() {
        println!("  Sample panels returned: {}", response.panels.len());
    }
    println!();
}

/// Display trending keywords as a bar chart scaled to the top count.
pub fn display_keywords(keywords: &[KeywordCount]) {
    if keywords.is_empty() {
        println!("No trending keywords found.");
        return;
    }

    println!("\n{}", "=== Trending Keywords ===".bold());
    println!();

    let max = keywords.iter().map(|k| k.value).max().unwrap_or(1).max(1);
    for (i, keyword) in keywords.iter().enumerate() {
        let fraction = keyword.value as f64 / max as f64;
        let colored_bar = if fraction >= 0.66 {
            bar(fraction, 20).bright_green()
        } else if fraction >= 0.33 {
            bar(fraction, 20).bright_yellow()
        } else {
            bar(fraction, 20).bright_blue()
        };
        println!(
            "  {:>2}. {:<20} {} {}",
            i + 1,
            keyword.text.bold(),
            colored_bar,
            keyword.value
        );
    }
    println!();
}

/// Display one donut per compared field as percentage bars.
pub fn display_donuts(donuts: &[Donut]) {
    for donut in donuts {
        println!(
            "\n{}",
            format!("=== {} ({} panels) ===", donut.field, donut.total).bold()
        );
        if donut.slices.is_empty() {
            println!("  {}", "No values for this field.".dimmed());
            continue;
        }
        for slice in &donut.slices {
            println!(
                "  {:<16} {} {:>5.1}%  ({})",
                slice.label,
                bar(slice.share, 20).bright_cyan(),
                slice.share * 100.0,
                slice.count
            );
        }
    }
    println!();
}

/// Display a single panel's detail card.
pub fn display_panel_card(panel: &Value) {
    let Some(fields) = panel.as_object() else {
        println!("{}", "Panel record is not an object.".yellow());
        return;
    };

    let id = fields
        .get("mb_sn")
        .map(scalar_text)
        .unwrap_or_else(|| "?".to_string());
    println!("\n{}", format!("=== Panel {id} ===").bold());

    for key in CARD_HEADLINE_FIELDS.iter().skip(1) {
        if let Some(value) = fields.get(*key) {
            println!("  {:<18} {}", key.bold(), scalar_text(value));
        }
    }

    for (key, value) in fields {
        if CARD_HEADLINE_FIELDS.contains(&key.as_str()) {
            continue;
        }
        let text = match value {
            Value::Object(map) => format!("{{{} fields}}", map.len()).dimmed().to_string(),
            Value::Array(items) => format!("[{} items]", items.len()).dimmed().to_string(),
            other => truncate_chars(&scalar_text(other), 100),
        };
        println!("  {:<18} {}", key, text);
    }
    println!();
}

fn format_kpi_value(kpi: &Kpi) -> String {
    let number = if kpi.value.fract() == 0.0 {
        format!("{:.0}", kpi.value)
    } else {
        format!("{:.1}", kpi.value)
    };
    match &kpi.unit {
        Some(unit) => format!("{number}{unit}"),
        None => number,
    }
}

/// Colorize a KPI trend: green up, red down.
fn colorize_trend(trend: Option<f64>) -> colored::ColoredString {
    match trend {
        Some(t) if t > 0.0 => format!("▲ {t:.1}%").green(),
        Some(t) if t < 0.0 => format!("▼ {:.1}%", t.abs()).red(),
        Some(_) => "– 0.0%".dimmed(),
        None => "".normal(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
