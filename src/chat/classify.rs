use serde::{Deserialize, Serialize};

/// What the user is asking about, decided by keyword heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryCategory {
    Verification,
    Treatment,
    Lifestyle,
    Recommendation,
    Impact,
    Explanation,
    Symptoms,
    Values,
    Causes,
    Complications,
    General,
}

/// Keyword groups in priority order. The first group with a hit wins.
const CATEGORY_PATTERNS: &[(QueryCategory, &[&str])] = &[
    (
        QueryCategory::Verification,
        &["verify", "authentic", "real", "fake", "trust"],
    ),
    (
        QueryCategory::Treatment,
        &["treatment", "therapy", "medication", "medicine", "drug"],
    ),
    (
        QueryCategory::Lifestyle,
        &["lifestyle", "diet", "exercise", "nutrition", "habits"],
    ),
    (
        QueryCategory::Recommendation,
        &["recommendation", "advice", "suggest", "help", "tips"],
    ),
    (
        QueryCategory::Impact,
        &["affect me", "impact", "change my life", "daily life", "living with"],
    ),
    (
        QueryCategory::Explanation,
        &["explain", "tell me about", "what is", "understand"],
    ),
    (
        QueryCategory::Symptoms,
        &["symptom", "feel", "sign", "prognosis", "future"],
    ),
    (
        QueryCategory::Values,
        &["value", "level", "test", "result", "number"],
    ),
    (
        QueryCategory::Causes,
        &["cause", "why", "reason", "how did", "develop"],
    ),
    (
        QueryCategory::Complications,
        &["complications", "risks", "dangerous", "serious", "worry"],
    ),
];

/// Classify a user message into a response category.
pub fn classify_query(text: &str) -> QueryCategory {
    let lower = text.to_lowercase();

    CATEGORY_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| lower.contains(p)))
        .map(|(category, _)| *category)
        .unwrap_or(QueryCategory::General)
}

/// Whether a message asks about health status in general terms.
pub fn mentions_condition(text: &str) -> bool {
    let lower = text.to_lowercase();
    ["risk", "disease", "condition"]
        .iter()
        .any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_verification_queries() {
        assert_eq!(
            classify_query("Can you verify this report?"),
            QueryCategory::Verification
        );
        assert_eq!(
            classify_query("Is this result FAKE?"),
            QueryCategory::Verification
        );
    }

    #[test]
    fn classify_treatment_and_lifestyle() {
        assert_eq!(
            classify_query("Which medication should I take?"),
            QueryCategory::Treatment
        );
        assert_eq!(
            classify_query("What diet works best?"),
            QueryCategory::Lifestyle
        );
    }

    #[test]
    fn earlier_groups_take_priority() {
        // "treatment" outranks "explain"
        assert_eq!(
            classify_query("Explain the treatment options"),
            QueryCategory::Treatment
        );
        // "help" (recommendation) outranks "understand" (explanation)
        assert_eq!(
            classify_query("Help me understand"),
            QueryCategory::Recommendation
        );
    }

    #[test]
    fn classify_remaining_groups() {
        assert_eq!(
            classify_query("How will this affect me?"),
            QueryCategory::Impact
        );
        assert_eq!(
            classify_query("What is anemia?"),
            QueryCategory::Explanation
        );
        assert_eq!(
            classify_query("What symptoms should I expect?"),
            QueryCategory::Symptoms
        );
        assert_eq!(
            classify_query("Show me my numbers"),
            QueryCategory::Values
        );
        assert_eq!(classify_query("Why did this happen?"), QueryCategory::Causes);
        assert_eq!(
            classify_query("Should I worry?"),
            QueryCategory::Complications
        );
    }

    #[test]
    fn classify_general_queries() {
        assert_eq!(classify_query("Hello"), QueryCategory::General);
        assert_eq!(classify_query(""), QueryCategory::General);
    }

    #[test]
    fn mentions_condition_keywords() {
        assert!(mentions_condition("What is my RISK?"));
        assert!(!mentions_condition("hello there"));
    }
}
