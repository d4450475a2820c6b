//! Navigation boundary between the two screens.
//!
//! The list screen hands the full selected record to the detail screen as a
//! JSON text payload: a value copy through a text-oriented parameter
//! channel, never a shared reference, and there is no fetch-by-id to fall
//! back on. The detail screen must tolerate an absent or malformed payload.

use crate::catalog::Coffee;

/// Active screen. `Detail` owns its payload; nothing flows back to the
/// list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Route {
    #[default]
    List,
    Detail { payload: Option<String> },
}

/// Serialize a record for the list→detail hand-off.
pub fn encode_payload(coffee: &Coffee) -> Option<String> {
    serde_json::to_string(coffee).ok()
}

/// Decode a detail payload. Absent and malformed input both come back as
/// `None`; the caller renders the "nothing selected" guard for either.
pub fn decode_payload(payload: Option<&str>) -> Option<Coffee> {
    payload.and_then(|raw| serde_json::from_str(raw).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> Coffee {
        Coffee {
            id: 7,
            title: "Latte".to_string(),
            description: Some("Smooth".to_string()),
            image: Some("http://x/7.jpg".to_string()),
            ingredients: Some(vec!["Espresso".to_string(), "Milk".to_string()]),
        }
    }

    #[test]
    fn payload_round_trips_the_full_record() {
        let payload = encode_payload(&latte()).unwrap();
        let decoded = decode_payload(Some(&payload)).unwrap();
        assert_eq!(decoded, latte());
    }

    #[test]
    fn absent_payload_decodes_to_none() {
        assert_eq!(decode_payload(None), None);
    }

    #[test]
    fn malformed_payload_decodes_to_none() {
        assert_eq!(decode_payload(Some("{not json")), None);
        assert_eq!(decode_payload(Some(r#"{"id": "seven"}"#)), None);
    }

    #[test]
    fn payload_without_optional_fields_still_decodes() {
        let raw = r#"{"id": 2, "title": "Americano"}"#;
        let decoded = decode_payload(Some(raw)).unwrap();
        assert_eq!(decoded.title, "Americano");
        assert_eq!(decoded.ingredients, None);
    }
}
