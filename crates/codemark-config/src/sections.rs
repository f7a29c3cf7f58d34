//! Settings groups read by the surrounding application.
//!
//! The highlighter never looks at these; they are carried so a single config
//! object can serve the whole page.

use serde::Deserialize;

use crate::lenient;

/// Which filter dropdowns the search bar shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBarConfig {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub stage: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub source: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub category: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub sub_cat: bool,
}

/// Which fields are displayed with each code sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsConfig {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub id: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub complete: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub source: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub category: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub sub_cat: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub links: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub output: bool,
}
