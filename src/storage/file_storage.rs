use crate::{
    domain::BoardSnapshot,
    error::{BoardViewError, Result},
    mutation::Mutation,
    storage::{apply_mutation, MutationDispatcher},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs, sync::Mutex};

/// JSON file backed board model
pub struct FileStorage {
    root_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    const BOARDVIEW_DIR: &'static str = ".boardview";
    const BOARD_FILE: &'static str = "board.json";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::BOARDVIEW_DIR),
            write_lock: Mutex::new(()),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    /// Creates the storage directory and writes `initial` if no board exists yet
    pub async fn initialize(&self, initial: &BoardSnapshot) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        if !self.board_file().exists() {
            self.save_snapshot(initial).await?;
        }
        Ok(())
    }

    pub async fn is_initialized(&self) -> bool {
        self.board_file().exists()
    }

    pub async fn load_snapshot(&self) -> Result<BoardSnapshot> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Err(BoardViewError::BoardNotInitialized);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let snapshot: BoardSnapshot = serde_json::from_str(&contents)?;

        Ok(snapshot)
    }

    pub async fn save_snapshot(&self, snapshot: &BoardSnapshot) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(self.board_file(), json).await?;

        Ok(())
    }
}

#[async_trait]
impl MutationDispatcher for FileStorage {
    async fn dispatch(&self, mutation: Mutation, undo_label: &str) -> Result<()> {
        // Serializes load-apply-save so concurrent dispatches don't drop writes
        let _guard = self.write_lock.lock().await;

        let mut snapshot = self.load_snapshot().await?;
        apply_mutation(&mut snapshot, &mutation)?;
        self.save_snapshot(&snapshot).await?;

        tracing::info!("Persisted '{}' to {}", undo_label, self.board_file().display());
        Ok(())
    }
}
