//! Skill extraction by dictionary containment. Matches are word-bounded
//! (where the skill edge is a word character, so `C++` and `C#` still
//! match), deduplicated, and joined in first-seen dictionary order.

use once_cell::sync::Lazy;
use regex::Regex;

const SKILL_DICTIONARY: &[&str] = &[
    "Java",
    "Python",
    "JavaScript",
    "C++",
    "C#",
    "Ruby",
    "Go",
    "TypeScript",
    "PHP",
    "Swift",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Spring Boot",
    "Django",
    "Flask",
    "Ruby on Rails",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Oracle",
    "AWS",
    "Azure",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "HTML",
    "CSS",
    "Sass",
    "Less",
    "Agile",
    "Scrum",
    "JIRA",
    "Git",
    "Jenkins",
];

static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SKILL_DICTIONARY
        .iter()
        .map(|skill| (*skill, boundary_pattern(skill)))
        .collect()
});

fn boundary_pattern(skill: &str) -> Regex {
    let leading = skill
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    let trailing = skill
        .chars()
        .last()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');

    let pattern = format!(
        "(?i){}{}{}",
        if leading { r"\b" } else { "" },
        regex::escape(skill),
        if trailing { r"\b" } else { "" },
    );
    Regex::new(&pattern).expect("static skill pattern compiles")
}

/// Returns the comma-joined skill list found in `text`. Deterministic and
/// idempotent: the same text always yields the same ordered list.
pub fn parse_skills(text: &str) -> String {
    let mut found: Vec<&str> = Vec::new();
    for (skill, pattern) in SKILL_PATTERNS.iter() {
        if pattern.is_match(text) && !found.contains(skill) {
            found.push(skill);
        }
    }
    found.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_skills_case_insensitively() {
        let skills = parse_skills("Built services in JAVA and python with docker.");
        assert_eq!(skills, "Java, Python, Docker");
    }

    #[test]
    fn symbol_suffixed_skills_match() {
        let skills = parse_skills("Fluent in C++ and C#; also JavaScript.");
        assert_eq!(skills, "JavaScript, C++, C#");
    }

    #[test]
    fn word_boundaries_prevent_partial_hits() {
        // "Gone" must not match "Go", "class" must not match "Sass".
        let skills = parse_skills("Gone fishing with classmates.");
        assert_eq!(skills, "");
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Java, Python, Java again, AWS and more Java";
        assert_eq!(parse_skills(text), parse_skills(text));
        assert_eq!(parse_skills(text), "Java, Python, AWS");
    }

    #[test]
    fn multi_word_skills_match() {
        let skills = parse_skills("Experience with Spring Boot and Google Cloud deployments.");
        assert_eq!(skills, "Spring Boot, Google Cloud");
    }

    #[test]
    fn empty_text_yields_empty_list() {
        assert_eq!(parse_skills(""), "");
    }
}
