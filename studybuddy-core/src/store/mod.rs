use crate::{CoreError, Flashcard, HistoryEntry, SessionState};
use async_trait::async_trait;

pub mod memory;

/// Keyed, ordered record store the core computes against. Appends
/// preserve call order; reads are full snapshots.
#[async_trait]
pub trait CardStore: Send + Sync {
    // Cards
    async fn append_card(&self, card: &Flashcard) -> Result<(), CoreError>;
    async fn list_cards(&self) -> Result<Vec<Flashcard>, CoreError>;

    // Ask history
    async fn push_history(&self, entry: &HistoryEntry) -> Result<(), CoreError>;
    async fn list_history(&self) -> Result<Vec<HistoryEntry>, CoreError>;
    async fn clear_history(&self) -> Result<(), CoreError>;

    // Session state (streak / daily counters)
    async fn load_session(&self) -> Result<Option<SessionState>, CoreError>;
    async fn save_session(&self, state: &SessionState) -> Result<(), CoreError>;
}
