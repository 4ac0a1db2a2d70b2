use crate::history::push_capped;
use crate::{CoreError, Flashcard, HistoryEntry, SessionState};
use async_trait::async_trait;
use parking_lot::RwLock;

/// Vec-backed store; insertion order is the stored order.
#[derive(Default)]
pub struct MemoryStore {
    cards: RwLock<Vec<Flashcard>>,
    history: RwLock<Vec<HistoryEntry>>,
    session: RwLock<Option<SessionState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl crate::store::CardStore for MemoryStore {
    async fn append_card(&self, card: &Flashcard) -> Result<(), CoreError> {
        self.cards.write().push(card.clone());
        Ok(())
    }

    async fn list_cards(&self) -> Result<Vec<Flashcard>, CoreError> {
        Ok(self.cards.read().clone())
    }

    async fn push_history(&self, entry: &HistoryEntry) -> Result<(), CoreError> {
        push_capped(&mut self.history.write(), entry.clone());
        Ok(())
    }

    async fn list_history(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        Ok(self.history.read().clone())
    }

    async fn clear_history(&self) -> Result<(), CoreError> {
        self.history.write().clear();
        Ok(())
    }

    async fn load_session(&self) -> Result<Option<SessionState>, CoreError> {
        Ok(self.session.read().clone())
    }

    async fn save_session(&self, state: &SessionState) -> Result<(), CoreError> {
        *self.session.write() = Some(state.clone());
        Ok(())
    }
}
