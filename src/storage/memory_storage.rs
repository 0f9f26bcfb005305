use crate::{
    domain::BoardSnapshot,
    error::Result,
    mutation::Mutation,
    storage::{apply_mutation, MutationDispatcher},
};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// A mutation that was applied, with the label it was issued under
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRecord {
    pub mutation: Mutation,
    pub undo_label: String,
}

/// In-memory board model that applies mutations as they are dispatched
pub struct MemoryStorage {
    state: RwLock<BoardSnapshot>,
    history: RwLock<Vec<DispatchRecord>>,
}

impl MemoryStorage {
    pub fn new(snapshot: BoardSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Copy of the current board state
    pub async fn snapshot(&self) -> BoardSnapshot {
        self.state.read().await.clone()
    }

    /// Applied mutations, oldest first
    pub async fn history(&self) -> Vec<DispatchRecord> {
        self.history.read().await.clone()
    }
}

#[async_trait]
impl MutationDispatcher for MemoryStorage {
    async fn dispatch(&self, mutation: Mutation, undo_label: &str) -> Result<()> {
        {
            let mut state = self.state.write().await;
            apply_mutation(&mut state, &mutation)?;
        }

        tracing::info!("Applied '{}': {:?}", undo_label, mutation);
        self.history.write().await.push(DispatchRecord {
            mutation,
            undo_label: undo_label.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, BoardView};
    use crate::error::BoardViewError;

    #[tokio::test]
    async fn test_dispatch_applies_and_records() {
        let storage = MemoryStorage::new(BoardSnapshot::default());

        storage
            .dispatch(
                Mutation::ChangeBoardTitle {
                    title: "Roadmap".to_string(),
                },
                "change board title",
            )
            .await
            .unwrap();

        assert_eq!(storage.snapshot().await.board.title, "Roadmap");
        let history = storage.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].undo_label, "change board title");
    }

    #[tokio::test]
    async fn test_rejected_mutation_is_not_recorded() {
        let snapshot = BoardSnapshot::new(Board::default(), BoardView::default(), vec![]);
        let storage = MemoryStorage::new(snapshot.clone());

        let result = storage
            .dispatch(
                Mutation::DeletePropertyOption {
                    property_id: "missing".to_string(),
                    option_id: "x".to_string(),
                },
                "delete group",
            )
            .await;

        assert!(matches!(result, Err(BoardViewError::PropertyNotFound(_))));
        assert!(storage.history().await.is_empty());
        assert_eq!(storage.snapshot().await, snapshot);
    }
}
