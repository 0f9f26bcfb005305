use crate::domain::{
    board::{Board, PropertyTemplate},
    card::{Card, CardId},
    view::BoardView,
};
use crate::projection::{project, Projection};
use serde::{Deserialize, Serialize};

/// A consistent, read-only picture of one board view.
///
/// `cards` is already filtered and sorted by the board model; their order is
/// kept within each group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board: Board,
    pub view: BoardView,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl BoardSnapshot {
    pub fn new(board: Board, view: BoardView, cards: Vec<Card>) -> Self {
        Self { board, view, cards }
    }

    /// The active grouping property.
    ///
    /// Resolves to `None` when the view names no property, a deleted one, or
    /// one that is not a select property.
    pub fn group_by_property(&self) -> Option<&PropertyTemplate> {
        let id = self.view.group_by_property_id.as_deref()?;
        self.board.property(id).filter(|p| p.is_select())
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == id)
    }

    /// Board properties shown on cards, in board order
    pub fn visible_property_templates(&self) -> Vec<&PropertyTemplate> {
        self.board
            .card_properties
            .iter()
            .filter(|t| self.view.is_property_visible(&t.id))
            .collect()
    }

    pub fn has_filter(&self) -> bool {
        !self.view.filter.is_empty()
    }

    pub fn has_sort(&self) -> bool {
        !self.view.sort_options.is_empty()
    }

    /// Groups the cards by the active grouping property
    pub fn project(&self) -> Projection<'_> {
        project(&self.cards, self.group_by_property())
    }
}
