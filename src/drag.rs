//! Drag session state between drag-start and drop or cancel.
//!
//! The session stores identities only. Subjects are looked up in the
//! snapshot current at drop time, so a card or option deleted mid-drag
//! resolves to a no-op instead of a stale mutation.

use crate::domain::card::CardId;

/// The single in-flight drag subject
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    DraggingCard(CardId),
    DraggingOption(String),
}

impl DragSession {
    /// Begins dragging a card, replacing any subject left over from a missed drag-end
    pub fn start_card(&mut self, card_id: CardId) {
        if !self.is_idle() {
            tracing::debug!("Replacing stale drag subject {:?}", self);
        }
        tracing::debug!("Drag start: card {}", card_id);
        *self = Self::DraggingCard(card_id);
    }

    /// Begins dragging a column header
    pub fn start_option(&mut self, option_id: impl Into<String>) {
        if !self.is_idle() {
            tracing::debug!("Replacing stale drag subject {:?}", self);
        }
        let option_id = option_id.into();
        tracing::debug!("Drag start: option {}", option_id);
        *self = Self::DraggingOption(option_id);
    }

    /// Drag ended without a drop
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Consumes the current subject for a drop, leaving the session idle
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
