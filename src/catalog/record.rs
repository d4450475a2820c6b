use serde::{Deserialize, Serialize};

/// One catalog entry as returned by the collection endpoint.
///
/// Records are immutable once decoded: they are read, serialized for the
/// list→detail hand-off and deserialized on the other side, never mutated
/// in place. Optional fields decode to `None` when absent; rendering omits
/// the corresponding element instead of showing a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    /// Unique within a response; the list selection key.
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

impl Coffee {
    /// Description, only when present and non-empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Image URI, only when present and non-empty.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| !i.is_empty())
    }

    /// Ingredient list, only when present and non-empty.
    pub fn ingredients(&self) -> Option<&[String]> {
        self.ingredients.as_deref().filter(|i| !i.is_empty())
    }
}

/// Decode a catalog response body, order preserved exactly as returned.
pub fn decode_catalog(body: &[u8]) -> Result<Vec<Coffee>, serde_json::Error> {
    serde_json::from_slice(body)
}
