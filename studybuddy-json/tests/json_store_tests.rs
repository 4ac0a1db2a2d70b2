use chrono::Utc;
use studybuddy_core::store::CardStore;
use studybuddy_core::{new_card, Difficulty, HistoryEntry, SessionState};
use studybuddy_json::JsonStore;
use tempfile::tempdir;

#[tokio::test]
async fn cards_survive_reopen_in_insertion_order() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("studybuddy.json");
    let backups = dir.path().join("backups");

    {
        let store = JsonStore::open_with(file.clone(), backups.clone(), 3)
            .await
            .unwrap();
        let now = Utc::now();
        for i in 0..3 {
            let c = new_card(format!("q{i}"), "a", Difficulty::Medium, now);
            store.append_card(&c).await.unwrap();
        }
    }

    let store = JsonStore::open_with(file, backups, 3).await.unwrap();
    let cards = store.list_cards().await.unwrap();
    let questions: Vec<_> = cards.iter().map(|c| c.question.as_str()).collect();
    assert_eq!(questions, ["q0", "q1", "q2"]);
}

#[tokio::test]
async fn history_and_session_survive_reopen() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("studybuddy.json");
    let backups = dir.path().join("backups");

    let install_id = {
        let store = JsonStore::open_with(file.clone(), backups.clone(), 3)
            .await
            .unwrap();
        store
            .push_history(&HistoryEntry::new("what is 2 + 2", Utc::now()))
            .await
            .unwrap();
        let session = SessionState::new(Utc::now().date_naive());
        store.save_session(&session).await.unwrap();
        session.install_id
    };

    let store = JsonStore::open_with(file, backups, 3).await.unwrap();
    let history = store.list_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].question, "what is 2 + 2");

    let session = store.load_session().await.unwrap().unwrap();
    assert_eq!(session.install_id, install_id);
}

#[tokio::test]
async fn clear_history_persists() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("studybuddy.json");
    let backups = dir.path().join("backups");

    {
        let store = JsonStore::open_with(file.clone(), backups.clone(), 3)
            .await
            .unwrap();
        store
            .push_history(&HistoryEntry::new("q", Utc::now()))
            .await
            .unwrap();
        store.clear_history().await.unwrap();
    }

    let store = JsonStore::open_with(file, backups, 3).await.unwrap();
    assert!(store.list_history().await.unwrap().is_empty());
}

#[tokio::test]
async fn backups_are_rotated() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("studybuddy.json");
    let backups = dir.path().join("backups");

    let store = JsonStore::open_with(file, backups.clone(), 2).await.unwrap();
    let now = Utc::now();
    for i in 0..5 {
        let c = new_card(format!("q{i}"), "a", Difficulty::Medium, now);
        store.append_card(&c).await.unwrap();
    }

    let count = std::fs::read_dir(&backups)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
        .count();
    assert!(count <= 2);
}
