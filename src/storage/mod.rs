pub mod menu_csv;

pub use menu_csv::{CsvMenuStore, parse_catalog};
