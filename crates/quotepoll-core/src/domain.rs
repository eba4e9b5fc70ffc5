use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One record from the quotes API payload.
///
/// The upstream returns a JSON array of these objects; only the first element
/// of a response is ever consulted, and only `quote` and `character` reach
/// standard output. `image` and `characterDirection` tolerate absence since
/// nothing downstream reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub quote: String,
    pub character: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "characterDirection", default)]
    pub character_direction: String,
}

impl Display for QuoteRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.quote, self.character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_full_upstream_shape() {
        let payload = r#"{
            "quote": "D'oh!",
            "character": "Homer Simpson",
            "image": "https://cdn.example.test/homer.png",
            "characterDirection": "Left"
        }"#;

        let record: QuoteRecord = serde_json::from_str(payload).expect("valid record");
        assert_eq!(record.quote, "D'oh!");
        assert_eq!(record.character, "Homer Simpson");
        assert_eq!(record.character_direction, "Left");
    }

    #[test]
    fn image_and_direction_default_when_absent() {
        let payload = r#"{"quote": "Ha-ha!", "character": "Nelson Muntz"}"#;

        let record: QuoteRecord = serde_json::from_str(payload).expect("valid record");
        assert!(record.image.is_empty());
        assert!(record.character_direction.is_empty());
    }

    #[test]
    fn missing_quote_field_is_a_decode_error() {
        let payload = r#"{"character": "Lisa Simpson"}"#;

        let result: Result<QuoteRecord, _> = serde_json::from_str(payload);
        assert!(result.is_err());
    }

    #[test]
    fn display_formats_quote_then_character() {
        let record = QuoteRecord {
            quote: String::from("Eat my shorts"),
            character: String::from("Bart Simpson"),
            image: String::new(),
            character_direction: String::new(),
        };

        assert_eq!(record.to_string(), "\"Eat my shorts\" - Bart Simpson");
    }
}
