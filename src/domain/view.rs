use crate::domain::filter::FilterGroup;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One sort key of a view. Comparison itself happens in the board model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub property_id: String,
    #[serde(default)]
    pub reversed: bool,
}

/// Configuration of a board view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by_property_id: Option<String>,
    #[serde(default)]
    pub visible_property_ids: Vec<String>,
    #[serde(default)]
    pub filter: FilterGroup,
    #[serde(default)]
    pub sort_options: Vec<SortOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
}

impl BoardView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            group_by_property_id: None,
            visible_property_ids: Vec::new(),
            filter: FilterGroup::default(),
            sort_options: Vec::new(),
            search_text: None,
        }
    }

    pub fn grouped_by(mut self, property_id: impl Into<String>) -> Self {
        self.group_by_property_id = Some(property_id.into());
        self
    }

    pub fn is_property_visible(&self, property_id: &str) -> bool {
        self.visible_property_ids.iter().any(|id| id == property_id)
    }

    /// Visible property ids after toggling one.
    ///
    /// A hidden id is appended; a visible one is removed and the remainder
    /// keeps its order.
    pub fn toggled_visible_property_ids(&self, property_id: &str) -> Vec<String> {
        if self.is_property_visible(property_id) {
            self.visible_property_ids
                .iter()
                .filter(|id| *id != property_id)
                .cloned()
                .collect()
        } else {
            let mut ids = self.visible_property_ids.clone();
            ids.push(property_id.to_string());
            ids
        }
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new("Board View")
    }
}
