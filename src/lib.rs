//! # Boardview Core
//!
//! Grouping and drag-and-drop engine for kanban board views.
//!
//! Cards are projected into columns keyed by one select property of the
//! board. Drags of cards and column headers are resolved into mutations
//! that go through a [`MutationDispatcher`]; the crate never writes board
//! state itself and stays independent of UI toolkits and storage backends.

pub mod config;
pub mod controller;
pub mod domain;
pub mod drag;
pub mod drop_resolver;
pub mod error;
pub mod mutation;
pub mod projection;
pub mod storage;

// Re-export commonly used types
pub use config::ControllerConfig;
pub use controller::{BoardCommand, BoardController, Presenter};
pub use domain::{
    board::{Board, PropertyOption, PropertyTemplate, PropertyType},
    card::{Card, CardId},
    snapshot::BoardSnapshot,
    view::BoardView,
};
pub use drag::DragSession;
pub use drop_resolver::{resolve_drop, DropResolution};
pub use error::{BoardViewError, Result};
pub use mutation::Mutation;
pub use projection::{project, Group, Projection};
pub use storage::MutationDispatcher;
