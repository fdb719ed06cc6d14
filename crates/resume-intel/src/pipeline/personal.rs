//! Regex-based contact-detail detection. First match wins; absence maps
//! to `None` rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub(crate) static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}").expect("compiles"));
pub(crate) static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9][0-9 ()\-]{7,20}").expect("compiles"));
pub(crate) static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[a-zA-Z0-9-]+").expect("compiles"));

/// Identity fields lifted from raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub fn detect_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        name: extract_name(text),
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE.find(text).map(|m| m.as_str().to_string()),
    }
}

/// The first non-blank line is taken as the name. Deliberately naive:
/// résumés overwhelmingly lead with the candidate's name, and a wrong
/// guess is still extractive, never invented.
fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Canonical `https://www.`-prefixed LinkedIn profile URL, if any handle
/// appears in the text.
pub fn extract_linkedin_url(text: &str) -> Option<String> {
    LINKEDIN
        .find(text)
        .map(|m| format!("https://www.{}", m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Smith
Senior Backend Engineer
jane.smith@example.com
+1 415 555 0142
https://www.linkedin.com/in/janesmith
";

    #[test]
    fn detects_all_contact_fields() {
        let info = detect_personal_info(SAMPLE);
        assert_eq!(info.name.as_deref(), Some("Jane Smith"));
        assert_eq!(info.email.as_deref(), Some("jane.smith@example.com"));
        assert_eq!(info.phone.as_deref(), Some("+1 415 555 0142"));
    }

    #[test]
    fn linkedin_url_is_canonicalized() {
        assert_eq!(
            extract_linkedin_url("see linkedin.com/in/janesmith for details"),
            Some("https://www.linkedin.com/in/janesmith".to_string())
        );
    }

    #[test]
    fn missing_fields_are_none() {
        let info = detect_personal_info("Just some text without contacts");
        assert_eq!(info.email, None);
        assert_eq!(info.phone, None);
        assert_eq!(extract_linkedin_url("nothing here"), None);
    }

    #[test]
    fn empty_text_has_no_name() {
        assert_eq!(detect_personal_info("").name, None);
        assert_eq!(detect_personal_info("\n\n  \n").name, None);
    }
}
