//! Output formatting shared by every listing command.
//!
//! A listing implements [`Printer`] and hands itself to [`render`], which
//! picks the serialized or tabular form based on [`OutputFormat`].

mod paging;
mod table;

pub use paging::{Paging, PAGING_SEPARATOR};
pub use table::{build_table, render};

use clap::ValueEnum;

use crate::config;
use crate::error::Result;

/// Cell used when a listing has no records.
pub const EMPTY_PLACEHOLDER: &str = "---";

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// A record set that can be printed as JSON, YAML or a table.
pub trait Printer {
    fn to_json(&self) -> Result<String>;
    fn to_yaml(&self) -> Result<String>;
    fn column_headers(&self) -> Vec<String>;
    /// Table body. Never empty: a listing without records yields one
    /// placeholder row.
    fn rows(&self) -> Vec<Vec<String>>;
    fn paging(&self) -> Paging;

    fn paging_rows(&self) -> Vec<Vec<String>> {
        self.paging().compose()
    }
}

/// Knobs for turning typed fields into table cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub decimal_precision: usize,
    pub list_separator: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decimal_precision: config::DEFAULT_DECIMAL_PRECISION,
            list_separator: config::DEFAULT_LIST_SEPARATOR.to_string(),
        }
    }
}

impl TableOptions {
    /// Options taken from the environment.
    pub fn from_env() -> Self {
        Self {
            decimal_precision: config::get_decimal_precision(),
            ..Self::default()
        }
    }

    pub fn format_price(&self, value: f64) -> String {
        format!("{:.*}", self.decimal_precision, value)
    }

    pub fn format_list(&self, items: &[String]) -> String {
        join_list(items, &self.list_separator)
    }
}

pub fn join_list(items: &[String], separator: &str) -> String {
    items.join(separator)
}

/// A row of `width` placeholder cells.
pub fn placeholder_row(width: usize) -> Vec<String> {
    vec![EMPTY_PLACEHOLDER.to_string(); width]
}
