// Panelscope: analytics front for a survey panel database.
//
// This is the library root. The backend owns query translation and matching;
// these modules cover the dashboard shell, the client-side views, and the
// keyword extraction that runs over result sets.

pub mod api;
pub mod charts;
pub mod config;
pub mod export;
pub mod keywords;
pub mod mock;
pub mod output;
pub mod view;

#[cfg(feature = "web")]
pub mod web;
