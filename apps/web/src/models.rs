use serde::{Deserialize, Deserializer};

/// Classification attached to every message by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label {
    Suspicious,
    #[default]
    Safe,
}

impl Label {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Suspicious => "suspicious",
            Self::Safe => "safe",
        }
    }

    /// Only the exact string "suspicious" is suspicious; anything else is safe.
    pub fn parse(value: &str) -> Self {
        if value == Self::Suspicious.as_str() {
            Self::Suspicious
        } else {
            Self::Safe
        }
    }

    pub const fn border_class(self) -> &'static str {
        match self {
            Self::Suspicious => "border-l-4 border-red-500",
            Self::Safe => "border-l-4 border-green-500",
        }
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Safe, Self::parse))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Stats {
    pub total: u64,
    pub suspicious: u64,
    pub safe: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub label: Label,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Message {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or("Unknown")
    }
}

/// Payload returned by `GET /get_messages`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessagesResponse {
    pub stats: Stats,
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_parse_matches_exactly() {
        assert_eq!(Label::parse("suspicious"), Label::Suspicious);
        assert_eq!(Label::parse(" suspicious "), Label::Safe);
        assert_eq!(Label::parse("SUSPICIOUS"), Label::Safe);
        assert_eq!(Label::parse("Suspicious"), Label::Safe);
        assert_eq!(Label::parse("safe"), Label::Safe);
        assert_eq!(Label::parse("spam"), Label::Safe);
        assert_eq!(Label::parse(""), Label::Safe);
    }

    #[test]
    fn decodes_backend_payload() -> Result<(), serde_json::Error> {
        let json = r#"{
            "stats": {"total": 3, "suspicious": 1, "safe": 2},
            "messages": [
                {"id": 9, "sender": "alice", "text": "buy guns", "label": "suspicious", "timestamp": "2025-01-02 10:00:00"},
                {"id": 8, "sender": null, "text": "hello", "label": "safe"},
                {"id": 7, "sender": "bob", "text": "hi"}
            ]
        }"#;

        let response: MessagesResponse = serde_json::from_str(json)?;
        assert_eq!(
            response.stats,
            Stats {
                total: 3,
                suspicious: 1,
                safe: 2
            }
        );
        assert_eq!(response.messages.len(), 3);
        assert_eq!(response.messages[0].label, Label::Suspicious);
        assert_eq!(response.messages[1].sender(), "Unknown");
        assert_eq!(response.messages[2].label, Label::Safe);
        assert_eq!(response.messages[2].timestamp, None);
        Ok(())
    }

    #[test]
    fn near_miss_labels_decode_as_safe() -> Result<(), serde_json::Error> {
        let shouting: Message =
            serde_json::from_str(r#"{"text": "x", "sender": "y", "label": "SUSPICIOUS"}"#)?;
        let padded: Message =
            serde_json::from_str(r#"{"text": "x", "sender": "y", "label": " suspicious "}"#)?;
        assert_eq!(shouting.label, Label::Safe);
        assert_eq!(padded.label, Label::Safe);
        Ok(())
    }

    #[test]
    fn null_label_defaults_to_safe() -> Result<(), serde_json::Error> {
        let message: Message = serde_json::from_str(r#"{"text": "x", "sender": "y", "label": null}"#)?;
        assert_eq!(message.label, Label::Safe);
        Ok(())
    }

    #[test]
    fn missing_stats_is_an_error() {
        let result = serde_json::from_str::<MessagesResponse>(r#"{"messages": []}"#);
        assert!(result.is_err());
    }
}
