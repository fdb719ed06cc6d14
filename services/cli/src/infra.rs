use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chrono::NaiveDate;

/// clap value parser for `--today`-style date arguments.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|err| format!("invalid date '{value}' (expected YYYY-MM-DD): {err}"))
}

/// Reads the résumé text from a file, or from stdin when no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
