use crate::messages::{has_disease_info, text, MessageId};
use crate::types::{DiagnosisResult, Language, Severity};

/// Everything the view needs to draw a diagnosis. Derived values are fixed
/// at render time, in the language that was active then.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisCard {
    pub result: DiagnosisResult,
    pub severity: Severity,
    pub emergency: bool,
    pub explanation: Option<String>,
    pub offer_explain: bool,
}

impl DiagnosisCard {
    pub fn render(result: DiagnosisResult, language: Language) -> Self {
        let severity = result.severity();
        let emergency = result.is_emergency(language);
        let explanation = Some(result.response.clone()).filter(|r| !r.is_empty());
        let offer_explain = !has_disease_info(&result.response);

        Self {
            result,
            severity,
            emergency,
            explanation,
            offer_explain,
        }
    }

    /// Rounded confidence shown next to the bar.
    pub fn confidence_label(&self, language: Language) -> String {
        format!(
            "{}: {}%",
            text(MessageId::Confidence, language),
            self.result.confidence_percent().round() as u32
        )
    }
}

pub fn severity_label(severity: Severity, language: Language) -> &'static str {
    let id = match severity {
        Severity::Low => MessageId::SeverityLow,
        Severity::Medium => MessageId::SeverityMedium,
        Severity::High => MessageId::SeverityHigh,
    };
    text(id, language)
}
