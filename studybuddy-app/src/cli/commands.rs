use crate::cli::opts::*;

use anyhow::Result;
use chrono::Utc;
use studybuddy_core::export::{anki_tsv, markdown};
use studybuddy_core::history::search;
use studybuddy_core::insights::{record_solve, roll_day, summarize};
use studybuddy_core::store::memory::MemoryStore;
use studybuddy_core::{
    due_cards, new_card, solve, CardStore, Difficulty, HistoryEntry, SessionState,
};
use studybuddy_json::JsonStore;
use std::sync::Arc;
use tracing::debug;

pub async fn run_cli(args: Cli) -> Result<()> {
    let store = open_store(&args.store, args.store_path.clone()).await?;
    match args.cmd.clone() {
        Command::Solve(cmd) => solve_cmd(store, cmd).await,
        Command::Cards(cmd) => cards_cmd(store, cmd).await,
        Command::History(cmd) => history_cmd(store, cmd).await,
        Command::Insights => insights_cmd(store).await,
        Command::Export(cmd) => export_cmd(store, cmd).await,
    }
}

pub async fn open_store(
    kind: &StoreKind,
    path: Option<std::path::PathBuf>,
) -> Result<Arc<dyn CardStore>> {
    match kind {
        StoreKind::Json => {
            let s = match path {
                Some(p) => {
                    let backups = p.with_extension("backups");
                    JsonStore::open_with(p, backups, 10).await?
                }
                None => JsonStore::open_default().await?,
            };
            Ok(Arc::new(s))
        }
        StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}

async fn solve_cmd(store: Arc<dyn CardStore>, cmd: SolveCmd) -> Result<()> {
    let question = cmd.question.join(" ");
    let difficulty: Difficulty = cmd.difficulty.parse()?;
    let now = Utc::now();

    let answer = solve(&question);
    debug!(difficulty = difficulty.as_str(), "solved locally");

    let card = new_card(question.clone(), answer.clone(), difficulty, now);
    store.append_card(&card).await?;
    store
        .push_history(&HistoryEntry::new(question, now))
        .await?;

    let today = now.date_naive();
    let mut session = store
        .load_session()
        .await?
        .unwrap_or_else(|| SessionState::new(today));
    record_solve(&mut session, today);
    store.save_session(&session).await?;

    println!("{answer}");
    println!("\nSolves today: {}", session.solves_today);
    println!(
        "Next review: {} ({})",
        card.next_review_at.format("%Y-%m-%d %H:%M"),
        card.difficulty.as_str()
    );
    Ok(())
}

async fn cards_cmd(store: Arc<dyn CardStore>, cmd: CardsCmd) -> Result<()> {
    let cards = store.list_cards().await?;
    let shown = match cmd {
        CardsCmd::List => cards,
        CardsCmd::Due => due_cards(&cards, Utc::now()),
    };
    if shown.is_empty() {
        println!("no cards");
        return Ok(());
    }
    for c in shown {
        println!(
            "{}\t{}\t{}\tdue={}\treviews={}",
            c.id,
            c.question,
            c.difficulty.as_str(),
            c.next_review_at.format("%Y-%m-%d %H:%M"),
            c.review_count
        );
    }
    Ok(())
}

async fn history_cmd(store: Arc<dyn CardStore>, cmd: HistoryCmd) -> Result<()> {
    match cmd {
        HistoryCmd::List { search: term } => {
            let history = store.list_history().await?;
            let shown = search(&history, term.as_deref().unwrap_or(""));
            if shown.is_empty() {
                println!("no history");
                return Ok(());
            }
            for e in shown {
                println!("{}\t{}", e.asked_at.format("%Y-%m-%d %H:%M"), e.question);
            }
        }
        HistoryCmd::Clear => {
            store.clear_history().await?;
            println!("ok");
        }
    }
    Ok(())
}

async fn insights_cmd(store: Arc<dyn CardStore>) -> Result<()> {
    let today = Utc::now().date_naive();
    let mut session = store
        .load_session()
        .await?
        .unwrap_or_else(|| SessionState::new(today));
    roll_day(&mut session, today);
    store.save_session(&session).await?;

    let ins = summarize(&session);
    println!("Streak: {} days", ins.streak_days);
    println!("Questions (last 7 tracked days): {}", ins.total_questions);
    println!("Daily average: {:.1}", ins.avg_per_day);
    match ins.most_active {
        Some((day, n)) => println!("Most active: {day} ({n} questions)"),
        None => println!("Most active: none yet"),
    }
    Ok(())
}

async fn export_cmd(store: Arc<dyn CardStore>, cmd: ExportCmd) -> Result<()> {
    let cards = store.list_cards().await?;
    match cmd {
        ExportCmd::Json { path } => {
            let s = serde_json::to_string_pretty(&cards)?;
            std::fs::write(&path, s)?;
            println!("wrote {}", path.display());
        }
        ExportCmd::Csv { path } => {
            let mut wtr = csv::Writer::from_path(&path)?;
            wtr.write_record(["question", "answer", "difficulty"])?;
            for c in cards {
                wtr.write_record([c.question, c.answer, c.difficulty.as_str().to_string()])?;
            }
            wtr.flush()?;
            println!("wrote {}", path.display());
        }
        ExportCmd::Anki { path } => {
            std::fs::write(&path, anki_tsv(&cards))?;
            println!("wrote {}", path.display());
        }
        ExportCmd::Markdown { path } => {
            std::fs::write(&path, markdown(&cards))?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
