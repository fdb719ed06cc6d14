use serde::{Deserialize, Serialize};

/// Knobs controlling hybrid anonymization. Every flag is independent;
/// the named constructors are the supported presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Emit a `professional_summary` section distilled from the original
    /// summary, keeping only sentences with professional signals.
    pub include_cleaned_summary: bool,
    pub remove_leaked_emails: bool,
    pub remove_leaked_phones: bool,
    pub remove_leaked_social_media: bool,
    /// Keep sections whose key is neither professional nor personal.
    pub keep_unknown_sections: bool,
}

impl AnonymizationConfig {
    /// No summary, no unknown sections, all scrubbing on.
    pub fn standard() -> Self {
        Self {
            include_cleaned_summary: false,
            remove_leaked_emails: true,
            remove_leaked_phones: true,
            remove_leaked_social_media: true,
            keep_unknown_sections: false,
        }
    }

    /// Keeps more context: a cleaned summary and unknown sections.
    pub fn conservative() -> Self {
        Self {
            include_cleaned_summary: true,
            keep_unknown_sections: true,
            ..Self::standard()
        }
    }

    /// Explicitly rejects the summary and unknown sections.
    pub fn aggressive() -> Self {
        Self {
            include_cleaned_summary: false,
            keep_unknown_sections: false,
            ..Self::standard()
        }
    }
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self::standard()
    }
}
