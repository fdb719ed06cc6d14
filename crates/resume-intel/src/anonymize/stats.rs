use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Audit trail of one anonymization pass: which sections survived, what
/// was scrubbed, and how much text was dropped outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnonymizationStats {
    pub original_sections: BTreeSet<String>,
    pub kept_sections: BTreeSet<String>,
    pub removed_sections: BTreeSet<String>,
    /// One entry per scrubbed literal, tagged by kind ("EMAIL: …").
    pub anonymized_items: Vec<String>,
    /// Summary sentences dropped while building the cleaned summary.
    pub removed_summary_elements: Vec<String>,
    pub removed_character_count: usize,
}

impl AnonymizationStats {
    /// Share of original sections that were removed whole.
    pub fn anonymization_ratio(&self) -> f64 {
        if self.original_sections.is_empty() {
            return 0.0;
        }
        self.removed_sections.len() as f64 / self.original_sections.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_zero_without_sections() {
        assert_eq!(AnonymizationStats::default().anonymization_ratio(), 0.0);
    }

    #[test]
    fn ratio_reflects_removed_share() {
        let mut stats = AnonymizationStats::default();
        for key in ["summary", "experience", "education", "skills"] {
            stats.original_sections.insert(key.to_string());
        }
        stats.removed_sections.insert("summary".to_string());

        assert!((stats.anonymization_ratio() - 0.25).abs() < f64::EPSILON);
    }
}
