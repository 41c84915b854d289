//! Language-keyed message table.
//!
//! Every user-visible string of the client is looked up here by a closed set
//! of identifiers. Parameterized notices are formatted by [`crate::error`].

use crate::types::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    AppTitle,
    AppSubtitle,
    InputPlaceholder,
    SendButton,
    AttachButton,
    VoiceButton,
    LanguageButton,
    RestartButton,
    SpeechOnButton,
    SpeechOffButton,
    CloseButton,
    StartingChat,
    StartChatFailed,
    ServerUnreachable,
    EmptyInput,
    InvalidOptionPrefix,
    StartingNewSession,
    TurnInProgress,
    SessionExpired,
    TransportErrorPrefix,
    TryAgainSuffix,
    RestartFailed,
    AttachmentComingSoon,
    FollowUpPrompt,
    ExplainCondition,
    PossibleCondition,
    Confidence,
    SeverityLow,
    SeverityMedium,
    SeverityHigh,
    EmergencyWarning,
    EmergencyCallToAction,
    ExplanationTitle,
    QuestionProgress,
    SpeakNow,
    NoSpeechDetected,
    RecordingTimedOut,
    RecognitionErrorPrefix,
    AudioGenerationFailed,
    TextToSpeechErrorPrefix,
}

/// Returns the text of `id` in `language`.
pub fn text(id: MessageId, language: Language) -> &'static str {
    use Language::{Ar, En};
    use MessageId::*;

    match (id, language) {
        (AppTitle, En) => "Smart Medical Assistant",
        (AppTitle, Ar) => "المساعد الطبي الذكي",
        (AppSubtitle, En) => {
            "Enter your symptoms or ask a medical question, and I'll provide accurate information."
        }
        (AppSubtitle, Ar) => "أدخل أعراضك أو اطرح استفسارًا طبيًا وسأساعدك بمعلومات دقيقة",
        (InputPlaceholder, En) => "Type your symptoms or question here...",
        (InputPlaceholder, Ar) => "اكتب أعراضك أو استفسارك هنا...",
        (SendButton, En) => "Send",
        (SendButton, Ar) => "إرسال",
        (AttachButton, En) => "Attach",
        (AttachButton, Ar) => "إرفاق",
        (VoiceButton, En) => "Voice",
        (VoiceButton, Ar) => "صوت",
        (LanguageButton, En) => "العربية",
        (LanguageButton, Ar) => "English",
        (RestartButton, En) => "Restart",
        (RestartButton, Ar) => "إعادة البدء",
        (SpeechOnButton, En) => "Speech: on",
        (SpeechOnButton, Ar) => "الصوت: مفعل",
        (SpeechOffButton, En) => "Speech: off",
        (SpeechOffButton, Ar) => "الصوت: متوقف",
        (CloseButton, En) => "Close",
        (CloseButton, Ar) => "إغلاق",
        (StartingChat, En) => "Starting chat...",
        (StartingChat, Ar) => "جاري بدء المحادثة...",
        (StartChatFailed, En) => "An error occurred while starting the chat",
        (StartChatFailed, Ar) => "حدث خطأ أثناء بدء المحادثة",
        (ServerUnreachable, En) => "Could not reach the server, please try again later",
        (ServerUnreachable, Ar) => "خطأ في الاتصال بالخادم، يرجى المحاولة لاحقًا",
        (EmptyInput, En) => "Please enter a description of your symptoms or a question.",
        (EmptyInput, Ar) => "يرجى إدخال وصف للأعراض أو سؤال.",
        (InvalidOptionPrefix, En) => "Please select one of the provided options: ",
        (InvalidOptionPrefix, Ar) => "يرجى اختيار إجابة من الخيارات المتاحة: ",
        (StartingNewSession, En) => "Starting a new chat session...",
        (StartingNewSession, Ar) => "جاري بدء محادثة جديدة...",
        (TurnInProgress, En) => "Please wait for the current reply before sending another message.",
        (TurnInProgress, Ar) => "يرجى انتظار الرد الحالي قبل إرسال رسالة أخرى.",
        (SessionExpired, En) => "Session expired. Starting a new chat...",
        (SessionExpired, Ar) => "انتهت الجلسة. جاري بدء محادثة جديدة...",
        (TransportErrorPrefix, En) => "Sorry, an error occurred: ",
        (TransportErrorPrefix, Ar) => "عذرًا، حدث خطأ: ",
        (TryAgainSuffix, En) => ". Please try again.",
        (TryAgainSuffix, Ar) => ". يرجى المحاولة مرة أخرى.",
        (RestartFailed, En) => "Error restarting chat",
        (RestartFailed, Ar) => "خطأ أثناء إعادة بدء المحادثة",
        (AttachmentComingSoon, En) => "File attachment feature coming soon!",
        (AttachmentComingSoon, Ar) => "ميزة إرفاق الملف قريبًا!",
        (FollowUpPrompt, En) => "Do you have other symptoms or questions?",
        (FollowUpPrompt, Ar) => "هل لديك أعراض أو أسئلة أخرى؟",
        (ExplainCondition, En) => "Explain this condition",
        (ExplainCondition, Ar) => "اشرح هذا المرض",
        (PossibleCondition, En) => "Possible Condition",
        (PossibleCondition, Ar) => "الحالة المحتملة",
        (Confidence, En) => "Confidence",
        (Confidence, Ar) => "مستوى الثقة",
        (SeverityLow, En) => "Low",
        (SeverityLow, Ar) => "منخفضة",
        (SeverityMedium, En) => "Medium",
        (SeverityMedium, Ar) => "متوسطة",
        (SeverityHigh, En) => "High",
        (SeverityHigh, Ar) => "عالية",
        (EmergencyWarning, En) => {
            "Your symptoms may indicate a serious condition. Please seek immediate medical attention."
        }
        (EmergencyWarning, Ar) => "قد تشير أعراضك إلى حالة خطيرة. يرجى التماس العناية الطبية الفورية.",
        (EmergencyCallToAction, En) => "Call emergency services now:",
        (EmergencyCallToAction, Ar) => "اتصل بخدمات الطوارئ الآن:",
        (ExplanationTitle, En) => "Explanation and Recommendations",
        (ExplanationTitle, Ar) => "التفسير والتوصيات",
        (QuestionProgress, En) => "Progress",
        (QuestionProgress, Ar) => "التقدم",
        (SpeakNow, En) => "Speak now...",
        (SpeakNow, Ar) => "تحدث الآن...",
        (NoSpeechDetected, En) => "No speech detected. Please try again.",
        (NoSpeechDetected, Ar) => "لم يتم الكشف عن صوت. يرجى المحاولة مرة أخرى.",
        (RecordingTimedOut, En) => "No speech detected. Recording stopped.",
        (RecordingTimedOut, Ar) => "لم يتم الكشف عن صوت. تم إيقاف التسجيل.",
        (RecognitionErrorPrefix, En) => "Speech recognition error: ",
        (RecognitionErrorPrefix, Ar) => "خطأ في التعرف على الصوت: ",
        (AudioGenerationFailed, En) => "Failed to generate audio. Please try again.",
        (AudioGenerationFailed, Ar) => "فشل في إنشاء الصوت. يرجى المحاولة مرة أخرى.",
        (TextToSpeechErrorPrefix, En) => "Text-to-speech error: ",
        (TextToSpeechErrorPrefix, Ar) => "خطأ في تحويل النص إلى صوت: ",
    }
}

/// Phrases that mark an outgoing message as a request to explain the last
/// diagnosis. The Arabic explain button text does not contain the Arabic
/// phrase, so it goes out with the flag unset.
pub const EXPLAIN_PHRASES: [&str; 2] = ["اشرح المرض", "Explain this condition"];

/// Markers meaning the reply already carries disease information.
pub const DISEASE_INFO_MARKERS: [&str; 2] = ["معلومات عن المرض", "Information about the disease"];

pub fn is_explain_request(text: &str) -> bool {
    EXPLAIN_PHRASES.iter().any(|phrase| text.contains(phrase))
}

pub fn has_disease_info(response: &str) -> bool {
    DISEASE_INFO_MARKERS.iter().any(|marker| response.contains(marker))
}

/// Symptom shortcuts offered under the input, as (Arabic, English) pairs.
pub const QUICK_SUGGESTIONS: [(&str, &str); 6] = [
    ("ألم في الصدر", "Chest pain"),
    ("ضيق تنفس", "Shortness of breath"),
    ("دوخة", "Dizziness"),
    ("خفقان القلب", "Heart palpitations"),
    ("صداع", "Headache"),
    ("غثيان", "Nausea"),
];

pub fn quick_suggestions(language: Language) -> impl Iterator<Item = &'static str> {
    QUICK_SUGGESTIONS.iter().map(move |(ar, en)| match language {
        Language::Ar => *ar,
        Language::En => *en,
    })
}
