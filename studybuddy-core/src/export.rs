use crate::Flashcard;

/// Anki-importable TSV, one card per line. Tabs inside fields would
/// break the column split, so they are replaced with spaces.
pub fn anki_tsv(cards: &[Flashcard]) -> String {
    cards
        .iter()
        .map(|c| {
            format!(
                "{}\t{}\tstudy-buddy",
                c.question.replace('\t', " "),
                c.answer.replace('\t', " ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown blocks suitable for pasting into a notes app.
pub fn markdown(cards: &[Flashcard]) -> String {
    cards
        .iter()
        .map(|c| format!("## {}\n\n{}\n\n---\n", c.question, c.answer))
        .collect::<Vec<_>>()
        .join("\n")
}
