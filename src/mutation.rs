//! Mutation command objects sent to the dispatcher.

use crate::domain::{board::PropertyOption, card::Card, card::CardId};
use serde::{Deserialize, Serialize};

/// A single undoable change to the board model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mutation {
    InsertCard {
        card: Card,
    },
    ChangePropertyValue {
        card_id: CardId,
        property_id: String,
        value: Option<String>,
    },
    InsertPropertyOption {
        property_id: String,
        option: PropertyOption,
    },
    ChangePropertyOptionValue {
        property_id: String,
        option_id: String,
        value: String,
    },
    ChangePropertyOptionColor {
        property_id: String,
        option_id: String,
        color: String,
    },
    DeletePropertyOption {
        property_id: String,
        option_id: String,
    },
    ReorderPropertyOption {
        property_id: String,
        option_id: String,
        dest_index: usize,
    },
    ChangeViewVisibleProperties {
        view_id: String,
        property_ids: Vec<String>,
    },
    ChangeViewGroupBy {
        view_id: String,
        property_id: String,
    },
    ChangeBoardTitle {
        title: String,
    },
    ChangeViewTitle {
        view_id: String,
        title: String,
    },
    ChangeBoardIcon {
        icon: Option<String>,
    },
}

impl Mutation {
    /// Label shown in the undo history for this mutation
    pub fn undo_label(&self) -> &'static str {
        match self {
            Self::InsertCard { .. } => "add card",
            Self::ChangePropertyValue { .. } => "drag card",
            Self::InsertPropertyOption { .. } => "add group",
            Self::ChangePropertyOptionValue { .. } => "rename group",
            Self::ChangePropertyOptionColor { .. } => "change group color",
            Self::DeletePropertyOption { .. } => "delete group",
            Self::ReorderPropertyOption { .. } => "reorder group",
            Self::ChangeViewVisibleProperties { .. } => "show / hide property",
            Self::ChangeViewGroupBy { .. } => "group by",
            Self::ChangeBoardTitle { .. } => "change board title",
            Self::ChangeViewTitle { .. } => "change view title",
            Self::ChangeBoardIcon { icon: None } => "remove icon",
            Self::ChangeBoardIcon { icon: Some(_) } => "change icon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_labels() {
        assert_eq!(Mutation::ChangeBoardIcon { icon: None }.undo_label(), "remove icon");
        assert_eq!(
            Mutation::ChangeBoardIcon {
                icon: Some("x".to_string())
            }
            .undo_label(),
            "change icon"
        );
    }

    #[test]
    fn test_mutation_serialization_is_tagged() {
        let mutation = Mutation::ReorderPropertyOption {
            property_id: "status".to_string(),
            option_id: "done".to_string(),
            dest_index: 0,
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(json["kind"], "reorder_property_option");
        assert_eq!(json["dest_index"], 0);
    }
}
