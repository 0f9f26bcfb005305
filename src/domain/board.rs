use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A categorical value belonging to a select property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOption {
    pub id: String,
    pub value: String,
    pub color: String,
}

impl PropertyOption {
    /// Creates an option with a freshly generated id
    pub fn new(value: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            value: value.into(),
            color: color.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Kind of value a card property holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Text,
    Number,
    Select,
    Checkbox,
    Date,
}

/// Definition of a card property on a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTemplate {
    pub id: String,
    pub name: String,
    pub property_type: PropertyType,
    #[serde(default)]
    pub options: Vec<PropertyOption>,
}

impl PropertyTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            property_type,
            options: Vec::new(),
        }
    }

    /// Creates a select property with the given options
    pub fn select(
        id: impl Into<String>,
        name: impl Into<String>,
        options: Vec<PropertyOption>,
    ) -> Self {
        Self {
            options,
            ..Self::new(id, name, PropertyType::Select)
        }
    }

    pub fn is_select(&self) -> bool {
        self.property_type == PropertyType::Select
    }

    /// Gets an option by id
    pub fn option(&self, option_id: &str) -> Option<&PropertyOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn option_mut(&mut self, option_id: &str) -> Option<&mut PropertyOption> {
        self.options.iter_mut().find(|o| o.id == option_id)
    }

    /// Position of an option in the current order
    pub fn option_index(&self, option_id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id == option_id)
    }

    /// Moves an option to `dest_index`.
    ///
    /// The option is taken out of its slot first and then reinserted at
    /// `dest_index` (clamped to the end), so every other option keeps its
    /// relative order. Returns `false` if the option does not exist.
    pub fn move_option(&mut self, option_id: &str, dest_index: usize) -> bool {
        let Some(from) = self.option_index(option_id) else {
            return false;
        };
        let option = self.options.remove(from);
        let dest = dest_index.min(self.options.len());
        self.options.insert(dest, option);
        true
    }

    /// Removes an option, returning it if it existed
    pub fn remove_option(&mut self, option_id: &str) -> Option<PropertyOption> {
        let index = self.option_index(option_id)?;
        Some(self.options.remove(index))
    }
}

/// Board metadata and its card property definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub card_properties: Vec<PropertyTemplate>,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            icon: None,
            card_properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, template: PropertyTemplate) -> Self {
        self.card_properties.push(template);
        self
    }

    /// Gets a property template by id
    pub fn property(&self, property_id: &str) -> Option<&PropertyTemplate> {
        self.card_properties.iter().find(|p| p.id == property_id)
    }

    pub fn property_mut(&mut self, property_id: &str) -> Option<&mut PropertyTemplate> {
        self.card_properties.iter_mut().find(|p| p.id == property_id)
    }

    /// Properties that can be used to group cards
    pub fn select_properties(&self) -> impl Iterator<Item = &PropertyTemplate> {
        self.card_properties.iter().filter(|p| p.is_select())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new("Untitled Board")
    }
}
