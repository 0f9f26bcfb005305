//! Turns a drop on a column into at most one mutation.

use crate::{
    domain::snapshot::BoardSnapshot,
    drag::DragSession,
    error::{BoardViewError, Result},
    mutation::Mutation,
};

/// Outcome of a drop
#[derive(Debug, Clone, PartialEq)]
pub enum DropResolution {
    NoOp,
    Mutate(Mutation),
}

impl DropResolution {
    pub fn mutation(&self) -> Option<&Mutation> {
        match self {
            Self::NoOp => None,
            Self::Mutate(mutation) => Some(mutation),
        }
    }
}

/// Decides what dropping `subject` on the column of `target_option_id` means.
///
/// `target_option_id` is `None` for the "no value" column.
///
/// * A card dropped on its own column is a no-op; otherwise its grouping
///   value changes to the target option.
/// * A column header moves to the index of the target column, the "no
///   value" column mapping to index 0. Header drops without an active
///   grouping property fail with [`BoardViewError::NoGroupingProperty`].
/// * A subject or target that no longer exists in `snapshot` is a no-op.
pub fn resolve_drop(
    subject: &DragSession,
    target_option_id: Option<&str>,
    snapshot: &BoardSnapshot,
) -> Result<DropResolution> {
    match subject {
        DragSession::Idle => Ok(DropResolution::NoOp),
        DragSession::DraggingCard(card_id) => {
            let Some(card) = snapshot.card(card_id) else {
                tracing::warn!("Dropped card {} is no longer on the board", card_id);
                return Ok(DropResolution::NoOp);
            };
            let Some(property) = snapshot.group_by_property() else {
                tracing::debug!("Card dropped while the view has no grouping property");
                return Ok(DropResolution::NoOp);
            };
            if let Some(target) = target_option_id {
                if property.option(target).is_none() {
                    tracing::warn!("Drop target option {} no longer exists", target);
                    return Ok(DropResolution::NoOp);
                }
            }

            let old_value = card.value(&property.id);
            tracing::debug!(
                "Drop card '{}' from {:?} onto {:?}",
                card.title,
                old_value,
                target_option_id
            );
            if old_value == target_option_id {
                return Ok(DropResolution::NoOp);
            }

            Ok(DropResolution::Mutate(Mutation::ChangePropertyValue {
                card_id: card.id.clone(),
                property_id: property.id.clone(),
                value: target_option_id.map(str::to_string),
            }))
        }
        DragSession::DraggingOption(option_id) => {
            let property = snapshot
                .group_by_property()
                .ok_or(BoardViewError::NoGroupingProperty)?;

            if property.option(option_id).is_none() {
                tracing::warn!("Dragged option {} no longer exists", option_id);
                return Ok(DropResolution::NoOp);
            }

            let dest_index = match target_option_id {
                None => 0,
                Some(target) => match property.option_index(target) {
                    Some(index) => index,
                    None => {
                        tracing::warn!("Drop target option {} no longer exists", target);
                        return Ok(DropResolution::NoOp);
                    }
                },
            };
            tracing::debug!("Drop option {} at index {}", option_id, dest_index);

            Ok(DropResolution::Mutate(Mutation::ReorderPropertyOption {
                property_id: property.id.clone(),
                option_id: option_id.clone(),
                dest_index,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        board::{Board, PropertyOption, PropertyTemplate},
        card::{Card, CardId},
        view::BoardView,
    };
    use std::collections::BTreeMap;

    fn snapshot() -> BoardSnapshot {
        let board = Board::default().with_property(PropertyTemplate::select(
            "status",
            "Status",
            ["A", "B", "C", "D"]
                .iter()
                .map(|v| PropertyOption::new(*v, "gray").with_id(*v))
                .collect(),
        ));

        let mut in_b = BTreeMap::new();
        in_b.insert("status".to_string(), "B".to_string());
        let cards = vec![
            Card::new(&board.id, in_b).with_title("in b"),
            Card::new(&board.id, BTreeMap::new()).with_title("no value"),
        ];

        BoardSnapshot::new(board, BoardView::default().grouped_by("status"), cards)
    }

    fn card_id(snapshot: &BoardSnapshot, title: &str) -> CardId {
        snapshot
            .cards
            .iter()
            .find(|c| c.title == title)
            .map(|c| c.id.clone())
            .unwrap()
    }

    #[test]
    fn test_card_drop_on_own_column_is_noop() {
        let snapshot = snapshot();
        let session = DragSession::DraggingCard(card_id(&snapshot, "in b"));
        assert_eq!(
            resolve_drop(&session, Some("B"), &snapshot).unwrap(),
            DropResolution::NoOp
        );

        let session = DragSession::DraggingCard(card_id(&snapshot, "no value"));
        assert_eq!(
            resolve_drop(&session, None, &snapshot).unwrap(),
            DropResolution::NoOp
        );
    }

    #[test]
    fn test_card_drop_on_other_column_changes_value() {
        let snapshot = snapshot();
        let id = card_id(&snapshot, "in b");
        let session = DragSession::DraggingCard(id.clone());

        let resolution = resolve_drop(&session, Some("D"), &snapshot).unwrap();
        assert_eq!(
            resolution,
            DropResolution::Mutate(Mutation::ChangePropertyValue {
                card_id: id,
                property_id: "status".to_string(),
                value: Some("D".to_string()),
            })
        );
    }

    #[test]
    fn test_card_drop_on_no_value_clears_value() {
        let snapshot = snapshot();
        let session = DragSession::DraggingCard(card_id(&snapshot, "in b"));

        let resolution = resolve_drop(&session, None, &snapshot).unwrap();
        match resolution.mutation() {
            Some(Mutation::ChangePropertyValue { value, .. }) => assert!(value.is_none()),
            other => panic!("unexpected resolution {:?}", other),
        }
    }

    #[test]
    fn test_orphaned_card_dropped_on_no_value_clears_value() {
        let mut snapshot = snapshot();
        snapshot.board.property_mut("status").unwrap().remove_option("B");
        let session = DragSession::DraggingCard(card_id(&snapshot, "in b"));

        let resolution = resolve_drop(&session, None, &snapshot).unwrap();
        assert!(resolution.mutation().is_some());
    }

    #[test]
    fn test_stale_card_is_noop() {
        let snapshot = snapshot();
        let session = DragSession::DraggingCard(CardId::new());
        assert_eq!(
            resolve_drop(&session, Some("A"), &snapshot).unwrap(),
            DropResolution::NoOp
        );
    }

    #[test]
    fn test_stale_target_is_noop() {
        let snapshot = snapshot();
        let session = DragSession::DraggingCard(card_id(&snapshot, "in b"));
        assert_eq!(
            resolve_drop(&session, Some("gone"), &snapshot).unwrap(),
            DropResolution::NoOp
        );

        let session = DragSession::DraggingOption("A".to_string());
        assert_eq!(
            resolve_drop(&session, Some("gone"), &snapshot).unwrap(),
            DropResolution::NoOp
        );
    }

    #[test]
    fn test_option_drop_reorders_to_target_index() {
        let snapshot = snapshot();
        let session = DragSession::DraggingOption("A".to_string());

        let resolution = resolve_drop(&session, Some("C"), &snapshot).unwrap();
        assert_eq!(
            resolution,
            DropResolution::Mutate(Mutation::ReorderPropertyOption {
                property_id: "status".to_string(),
                option_id: "A".to_string(),
                dest_index: 2,
            })
        );
    }

    #[test]
    fn test_option_drop_on_no_value_moves_to_front() {
        let snapshot = snapshot();
        let session = DragSession::DraggingOption("C".to_string());

        let resolution = resolve_drop(&session, None, &snapshot).unwrap();
        match resolution.mutation() {
            Some(Mutation::ReorderPropertyOption { dest_index, .. }) => assert_eq!(*dest_index, 0),
            other => panic!("unexpected resolution {:?}", other),
        }
    }

    #[test]
    fn test_option_drop_on_itself_still_mutates() {
        let snapshot = snapshot();
        let session = DragSession::DraggingOption("B".to_string());

        let resolution = resolve_drop(&session, Some("B"), &snapshot).unwrap();
        match resolution.mutation() {
            Some(Mutation::ReorderPropertyOption { dest_index, .. }) => assert_eq!(*dest_index, 1),
            other => panic!("unexpected resolution {:?}", other),
        }
    }

    #[test]
    fn test_option_drop_without_grouping_fails() {
        let mut snapshot = snapshot();
        snapshot.view.group_by_property_id = None;
        let session = DragSession::DraggingOption("A".to_string());

        assert!(matches!(
            resolve_drop(&session, Some("B"), &snapshot),
            Err(BoardViewError::NoGroupingProperty)
        ));
    }

    #[test]
    fn test_stale_option_is_noop() {
        let snapshot = snapshot();
        let session = DragSession::DraggingOption("deleted".to_string());
        assert_eq!(
            resolve_drop(&session, Some("A"), &snapshot).unwrap(),
            DropResolution::NoOp
        );
    }

    #[test]
    fn test_idle_drop_is_noop() {
        let snapshot = snapshot();
        assert_eq!(
            resolve_drop(&DragSession::Idle, Some("A"), &snapshot).unwrap(),
            DropResolution::NoOp
        );
    }
}
