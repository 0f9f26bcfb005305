use crate::{
    domain::BoardSnapshot,
    error::{BoardViewError, Result},
    mutation::Mutation,
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

/// Entry point for every change the board view requests.
///
/// Implementations persist the mutation and record it under `undo_label`.
/// An `Err` means the mutation was rejected or lost; callers never retry.
#[async_trait]
pub trait MutationDispatcher: Send + Sync {
    /// Issues one mutation
    async fn dispatch(&self, mutation: Mutation, undo_label: &str) -> Result<()>;
}

/// Applies a mutation to a snapshot.
///
/// Deleting an option only touches the property definition. Cards still
/// holding the deleted option fall into the "no value" column on the next
/// projection.
pub fn apply_mutation(snapshot: &mut BoardSnapshot, mutation: &Mutation) -> Result<()> {
    match mutation {
        Mutation::InsertCard { card } => {
            snapshot.cards.push(card.clone());
        }
        Mutation::ChangePropertyValue {
            card_id,
            property_id,
            value,
        } => {
            let card = snapshot
                .card_mut(card_id)
                .ok_or_else(|| BoardViewError::CardNotFound(card_id.to_string()))?;
            card.set_value(property_id, value.clone());
        }
        Mutation::InsertPropertyOption {
            property_id,
            option,
        } => {
            property_mut(snapshot, property_id)?
                .options
                .push(option.clone());
        }
        Mutation::ChangePropertyOptionValue {
            property_id,
            option_id,
            value,
        } => {
            option_mut(snapshot, property_id, option_id)?.value = value.clone();
        }
        Mutation::ChangePropertyOptionColor {
            property_id,
            option_id,
            color,
        } => {
            option_mut(snapshot, property_id, option_id)?.color = color.clone();
        }
        Mutation::DeletePropertyOption {
            property_id,
            option_id,
        } => {
            property_mut(snapshot, property_id)?
                .remove_option(option_id)
                .ok_or_else(|| BoardViewError::OptionNotFound(option_id.clone()))?;
        }
        Mutation::ReorderPropertyOption {
            property_id,
            option_id,
            dest_index,
        } => {
            if !property_mut(snapshot, property_id)?.move_option(option_id, *dest_index) {
                return Err(BoardViewError::OptionNotFound(option_id.clone()));
            }
        }
        Mutation::ChangeViewVisibleProperties {
            view_id,
            property_ids,
        } => {
            ensure_view(snapshot, view_id)?;
            snapshot.view.visible_property_ids = property_ids.clone();
        }
        Mutation::ChangeViewGroupBy {
            view_id,
            property_id,
        } => {
            ensure_view(snapshot, view_id)?;
            snapshot.view.group_by_property_id = Some(property_id.clone());
        }
        Mutation::ChangeBoardTitle { title } => {
            snapshot.board.title = title.clone();
        }
        Mutation::ChangeViewTitle { view_id, title } => {
            ensure_view(snapshot, view_id)?;
            snapshot.view.title = title.clone();
        }
        Mutation::ChangeBoardIcon { icon } => {
            snapshot.board.icon = icon.clone();
        }
    }
    Ok(())
}

fn property_mut<'a>(
    snapshot: &'a mut BoardSnapshot,
    property_id: &str,
) -> Result<&'a mut crate::domain::PropertyTemplate> {
    snapshot
        .board
        .property_mut(property_id)
        .ok_or_else(|| BoardViewError::PropertyNotFound(property_id.to_string()))
}

fn option_mut<'a>(
    snapshot: &'a mut BoardSnapshot,
    property_id: &str,
    option_id: &str,
) -> Result<&'a mut crate::domain::PropertyOption> {
    property_mut(snapshot, property_id)?
        .option_mut(option_id)
        .ok_or_else(|| BoardViewError::OptionNotFound(option_id.to_string()))
}

fn ensure_view(snapshot: &BoardSnapshot, view_id: &str) -> Result<()> {
    if snapshot.view.id == view_id {
        Ok(())
    } else {
        Err(BoardViewError::StorageError(format!(
            "Unknown view: {}",
            view_id
        )))
    }
}
