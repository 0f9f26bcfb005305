pub mod board;
pub mod card;
pub mod filter;
pub mod snapshot;
pub mod view;

pub use board::{Board, PropertyOption, PropertyTemplate, PropertyType};
pub use card::{Card, CardId};
pub use filter::{FilterClause, FilterCondition, FilterEntry, FilterGroup, FilterOperation};
pub use snapshot::BoardSnapshot;
pub use view::{BoardView, SortOption};
