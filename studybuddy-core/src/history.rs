use crate::{HistoryEntry, HISTORY_CAP};

/// Appends to the history, dropping the oldest entries beyond the cap.
pub fn push_capped(history: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    history.push(entry);
    while history.len() > HISTORY_CAP {
        history.remove(0);
    }
}

/// Case-insensitive substring search. An empty term matches everything.
pub fn search<'a>(history: &'a [HistoryEntry], term: &str) -> Vec<&'a HistoryEntry> {
    let t = term.trim().to_lowercase();
    history
        .iter()
        .filter(|e| t.is_empty() || e.question.to_lowercase().contains(&t))
        .collect()
}
