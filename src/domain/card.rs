use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a card (a UUID v4 string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Generates a fresh random card ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CardId {
    type Err = crate::error::BoardViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(|uuid| Self(uuid.to_string()))
            .map_err(|_| crate::error::BoardViewError::InvalidCardId(s.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on a board.
///
/// Property values are keyed by property id. For select properties the value
/// is the id of the chosen option, not its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub parent_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Creates an untitled card on the given board with initial property values
    pub fn new(parent_id: impl Into<String>, properties: BTreeMap<String, String>) -> Self {
        let now = Utc::now();
        Self {
            id: CardId::new(),
            parent_id: parent_id.into(),
            title: String::new(),
            icon: None,
            properties,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the value held for a property, treating empty strings as unset
    pub fn value(&self, property_id: &str) -> Option<&str> {
        self.properties
            .get(property_id)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Sets or clears a property value
    pub fn set_value(&mut self, property_id: &str, value: Option<String>) {
        match value {
            Some(v) if !v.is_empty() => {
                self.properties.insert(property_id.to_string(), v);
            }
            _ => {
                self.properties.remove(property_id);
            }
        }
        self.updated_at = Utc::now();
    }
}
