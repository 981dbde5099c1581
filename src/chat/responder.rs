//! Template responder for the scripted assistant.
//!
//! Picks a category from the user's message, selects the highest-risk
//! prediction, and fills a fixed template from the knowledge base.

use crate::intelligence::{highest_risk, DiseaseInfo, KnowledgeBase};
use crate::models::{Disease, Marker, Prediction, VerificationStatus};

use super::classify::{classify_query, mentions_condition, QueryCategory};

pub const GREETING: &str = "Hello! I'm Dr. AI, your virtual health assistant. I can help you understand your blood test results and provide personalized health recommendations. How may I help you today?";

const CONSULT_NOTE: &str = "It's essential to consult with a healthcare professional before starting any treatment, as your specific situation may require a personalized approach.";

pub struct Responder<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> Responder<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Build the assistant's reply to `input`.
    pub fn respond(
        &self,
        input: &str,
        predictions: &[Prediction],
        verification: VerificationStatus,
    ) -> String {
        let category = classify_query(input);

        if category == QueryCategory::Verification {
            return verification_reply(verification, predictions.is_empty());
        }

        let Some(primary) = highest_risk(predictions) else {
            return if mentions_condition(input) {
                "I need to see your blood test results before I can assess your health status. Could you please upload your lab report or enter your blood values? Once I have that information, I can provide a thorough analysis.".to_string()
            } else {
                "I'm here to help you understand your health status, but I don't have your blood test data yet. Please upload your results or fill in the form first so I can provide personalized insights.".to_string()
            };
        };
        let info = self.kb.disease_info(primary.disease);

        tracing::debug!(
            category = ?category,
            disease = primary.disease.as_str(),
            "Composing assistant reply"
        );

        match category {
            QueryCategory::Verification => verification_reply(verification, false),
            QueryCategory::Treatment => treatment_reply(info),
            QueryCategory::Lifestyle => lifestyle_reply(info),
            QueryCategory::Recommendation => recommendation_reply(info),
            QueryCategory::Impact => impact_reply(info),
            QueryCategory::Explanation => self.explanation_reply(input, predictions, primary),
            QueryCategory::Symptoms => symptoms_reply(info),
            QueryCategory::Values => values_reply(predictions, primary),
            QueryCategory::Causes => causes_reply(info, primary),
            QueryCategory::Complications => complications_reply(info, primary),
            QueryCategory::General => general_reply(primary),
        }
    }

    fn explanation_reply(
        &self,
        input: &str,
        predictions: &[Prediction],
        primary: &Prediction,
    ) -> String {
        let lower = input.to_lowercase();
        let compact = lower.replace(' ', "");
        let mentioned = predictions.iter().find(|p| {
            let name = p.disease.as_str().to_lowercase();
            lower.contains(&name) || compact.contains(&name.replace(' ', ""))
        });

        match mentioned {
            Some(p) => {
                let info = self.kb.disease_info(p.disease);
                format!(
                    "{}\n\nYour test results show a {}% likelihood with a {} risk level. {}\n\nCommon symptoms include: {}.\n\nCommon causes include: {}.\n\nWould you like to know about treatment options, lifestyle recommendations, or possible complications?",
                    info.description,
                    p.confidence,
                    p.risk_level,
                    p.description,
                    join_first(&info.symptoms, 4),
                    join_first(&info.causes, 3),
                )
            }
            None => format!(
                "I'd be happy to explain more about your health conditions. From your blood test results, I've detected indicators for {}. Would you like me to explain what this means, what might be causing it, or what treatment options are available?",
                primary.disease
            ),
        }
    }
}

/// Reply to a verification question given the current report status.
pub fn verification_reply(status: VerificationStatus, no_report: bool) -> String {
    if status == VerificationStatus::Verified {
        "I've verified that your blood test report is authentic. The signature matches the issuing laboratory and the report hasn't been tampered with. You can trust these results for making health decisions.".to_string()
    } else if no_report {
        "I don't have any report to verify. Please upload your blood test results first so I can check their authenticity.".to_string()
    } else {
        "Unfortunately, I couldn't verify the authenticity of this report. The signature check failed, which could mean the report lacks proper security features or may have been modified. I recommend obtaining a digitally signed report from an accredited laboratory.".to_string()
    }
}

fn treatment_reply(info: &DiseaseInfo) -> String {
    format!(
        "For {}, the following treatment options are typically considered:\n\n{}\n\nMedications commonly prescribed include:\n{}\n\n{CONSULT_NOTE}",
        info.name,
        bullets(&info.treatments),
        bullets(&info.medications),
    )
}

fn lifestyle_reply(info: &DiseaseInfo) -> String {
    format!(
        "For managing {}, these lifestyle adjustments are recommended:\n\n{}\n\nThese changes can significantly impact your condition and overall health. Would you like more specific information about any of these recommendations?",
        info.name,
        bullets(&info.lifestyle),
    )
}

fn recommendation_reply(info: &DiseaseInfo) -> String {
    let follow_up = first_or(&info.treatments, "Regular check-ups with your healthcare provider");
    let change = first_or(&info.lifestyle, "Follow a balanced diet");
    let monitoring = find_or(
        &info.treatments,
        "monitor",
        "Regular check-ups with your healthcare provider",
    );
    let diet = find_or(&info.lifestyle, "diet", "Follow a balanced diet");

    format!(
        "Based on your {name} indicators, here are my recommendations:\n\n1. Medical follow-up: {follow_up}\n2. Lifestyle change: {change}\n3. Monitoring: {monitoring}\n4. Diet: {diet}\n5. Support: Consider joining a support group for people with {name}\n\nWould you like more specific recommendations about any of these areas?",
        name = info.name,
    )
}

fn impact_reply(info: &DiseaseInfo) -> String {
    format!(
        "Living with {name} can impact your daily life in several ways:\n\n1. Physical symptoms: You may experience {symptoms}\n\n2. Daily management: {daily}\n\n3. Medical care: {care}\n\n4. Potential complications if not managed: {complications}\n\n5. Outlook: {prognosis}\n\nWith proper management and support, many people with {name} lead fulfilling, active lives. The key is early intervention and consistent care.",
        name = info.name,
        symptoms = join_first(&info.symptoms, 3),
        daily = first_or(&info.lifestyle, "Follow your care plan"),
        care = find_or(&info.treatments, "regular", "Regular medical follow-ups"),
        complications = join_first(&info.complications, 2),
        prognosis = info.prognosis,
    )
}

fn symptoms_reply(info: &DiseaseInfo) -> String {
    format!(
        "With {}, you might experience the following symptoms: {}.\n\nRegarding prognosis: {}\n\nIt's important to note that individual experiences vary, and early detection and proper management can significantly improve outcomes. Would you like to discuss treatment options?",
        info.name,
        join_first(&info.symptoms, usize::MAX),
        info.prognosis,
    )
}

fn values_reply(predictions: &[Prediction], primary: &Prediction) -> String {
    let first = predictions.first().and_then(|p| p.markers.as_ref());
    let reading = |marker: Marker| {
        first
            .and_then(|m| m.get(marker))
            .map(|v| format!("{v} {}", marker.unit()))
            .unwrap_or_else(|| "not measured".to_string())
    };

    let summary = match concern_label(primary.disease) {
        Some(label) => format!(
            "The most concerning value is your {label}, which suggests {}.",
            primary.disease
        ),
        None => "None of the measured values stands out as concerning.".to_string(),
    };

    format!(
        "Let me break down your key blood test values:\n\n- Glucose: {} (Target: 70-100 mg/dL)\n- Hemoglobin: {} (Target: 12.0-15.5 g/dL)\n- Creatinine: {} (Target: 0.6-1.2 mg/dL)\n- Urea/BUN: {} (Target: 7-20 mg/dL)\n\n{summary} Would you like me to explain what these values mean for your health?",
        reading(Marker::Glucose),
        reading(Marker::Hemoglobin),
        reading(Marker::Creatinine),
        reading(Marker::Urea),
    )
}

fn causes_reply(info: &DiseaseInfo, primary: &Prediction) -> String {
    format!(
        "{} is typically caused by: {}.\n\nIn your case, your blood test shows {} This doesn't necessarily tell us the exact cause in your specific situation, but it helps identify the condition. Further diagnostic testing may be needed to determine the underlying cause. Would you like to discuss next steps for diagnosis or treatment?",
        info.name,
        join_first(&info.causes, usize::MAX),
        primary.description.to_lowercase(),
    )
}

fn complications_reply(info: &DiseaseInfo, primary: &Prediction) -> String {
    format!(
        "If left untreated or poorly managed, {} can lead to these potential complications: {}.\n\nHowever, it's important to note that with proper management and regular medical care, many of these complications can be prevented or minimized. Your current risk level is {}, and early intervention offers the best opportunity to prevent these issues.",
        info.name,
        join_first(&info.complications, usize::MAX),
        primary.risk_level,
    )
}

fn general_reply(primary: &Prediction) -> String {
    match concern_label(primary.disease) {
        Some(label) => format!(
            "Based on my analysis of your blood test results, my primary concern is the indicators for {} with a {}% confidence level. Your {label} levels are outside the optimal range, suggesting {} risk.\n\nThe good news is that with proper management and lifestyle adjustments, this condition can often be effectively controlled. Would you like to discuss treatment options, lifestyle recommendations, or learn more about how this condition might affect you?",
            primary.disease, primary.confidence, primary.risk_level,
        ),
        None => format!(
            "Based on my analysis of your blood test results, the overall assessment is {} ({}% confidence). {}\n\nWould you like recommendations for staying healthy, or information about which additional tests could help?",
            primary.disease, primary.confidence, primary.description,
        ),
    }
}

/// Marker wording for the condition's driving values. `None` for fallbacks.
fn concern_label(disease: Disease) -> Option<&'static str> {
    if disease.is_fallback() {
        return None;
    }
    match disease {
        Disease::Anemia => Some("hemoglobin"),
        Disease::Type2Diabetes => Some("glucose"),
        Disease::ChronicKidneyDisease => Some("creatinine and urea"),
        Disease::Thrombocytopenia => Some("platelet"),
        Disease::Thalassemia => Some("MCV and MCH"),
        _ => None,
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("• {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_first(items: &[String], n: usize) -> String {
    if items.is_empty() {
        return "none reported".to_string();
    }
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}

fn first_or<'a>(items: &'a [String], default: &'a str) -> &'a str {
    items.first().map(String::as_str).unwrap_or(default)
}

fn find_or<'a>(items: &'a [String], needle: &str, default: &'a str) -> &'a str {
    items
        .iter()
        .find(|i| i.contains(needle))
        .map(String::as_str)
        .unwrap_or(default)
}
