//! Keyword-rule chat intent classification.
//!
//! A deterministic rule table standing in for NLU: canned but plausible
//! conversational responses. The table is ordered and first-match-wins;
//! keywords overlap ("is it safe to share my location" is a safety
//! question, not a sharing one), so rule order is observable behavior.

/// Recognized intents, one per rule, plus the capability-overview
/// fallback when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIntent {
    SafetyCheck,
    SaferRoute,
    LocationShare,
    Sos,
    General,
}

impl ChatIntent {
    pub fn canned_reply(self) -> &'static str {
        match self {
            Self::SafetyCheck => {
                "I see mixed risk around this area. Click the map to get an exact safety score and suggested safer route."
            }
            Self::SaferRoute => {
                "Use Safer Route mode to prioritise well-lit and populated paths."
            }
            Self::LocationShare => {
                "I can share your live location with pre-selected contacts. Start Location Share to demo."
            }
            Self::Sos => {
                "Press SOS now. I will notify your emergency contacts and start location share (demo)."
            }
            Self::General => {
                "I can show safety heatmaps, suggest safer routes, and trigger SOS. Try: \"Is this area safe?\""
            }
        }
    }
}

struct IntentRule {
    keywords: &'static [&'static str],
    intent: ChatIntent,
}

/// Ordered: earlier rules win on overlapping keywords.
const RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["safe", "danger"],
        intent: ChatIntent::SafetyCheck,
    },
    IntentRule {
        keywords: &["route", "navigate"],
        intent: ChatIntent::SaferRoute,
    },
    IntentRule {
        keywords: &["share", "contacts"],
        intent: ChatIntent::LocationShare,
    },
    IntentRule {
        keywords: &["help", "panic"],
        intent: ChatIntent::Sos,
    },
];

pub struct IntentClassifier;

impl IntentClassifier {
    /// Case-insensitive substring match against the rule table.
    ///
    /// Callers must reject empty input at the HTTP boundary; this never
    /// sees it and would classify it as `General` anyway.
    pub fn classify(text: &str) -> ChatIntent {
        let query = text.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| query.contains(k)))
            .map(|rule| rule.intent)
            .unwrap_or(ChatIntent::General)
    }
}
