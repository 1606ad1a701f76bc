//! Share-text rendering of journal entries.

use crate::journal::{JournalEntry, ThoughtPair};

/// One thought pair with its reflections, formatted for sharing.
///
/// Connector plans read as a single sentence; two-prompt plans as two.
pub fn format_thought_pair(pair: &ThoughtPair, entry: &JournalEntry) -> String {
    let thought = match &pair.connector {
        Some(connector) => format!(
            "{} \"{}\" {} {}.",
            entry.prompt1, pair.part1, connector, pair.part2
        ),
        None => format!(
            "{} \"{}\".\n{} \"{}\".",
            entry.prompt1, pair.part1, entry.prompt2, pair.part2
        ),
    };
    format!(
        "{thought}\n  Reflecții la acest gând:\n  - Tot timpul ești așa? R: {}\n  - Cum te simți când nu ești așa? R: {}",
        pair.reflection1, pair.reflection2
    )
}

/// A whole entry: title line, then every thought pair.
pub fn format_entry(entry: &JournalEntry) -> String {
    let title = format!("Jurnal: {} ({})\n", entry.plan_title, entry.timestamp);
    let body = entry
        .thought_pairs
        .iter()
        .map(|pair| format_thought_pair(pair, entry))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{title}\n{body}")
}

/// The whole journal, entries separated by a rule.
pub fn format_journal(entries: &[JournalEntry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::Badge;

    fn entry_with(connector: Option<&str>) -> JournalEntry {
        JournalEntry {
            id: "t".to_string(),
            plan_title: "Eu sunt...".to_string(),
            prompt1: "Eu sunt...".to_string(),
            prompt2: "...".to_string(),
            thought_pairs: vec![ThoughtPair {
                part1: "curajos".to_string(),
                connector: connector.map(str::to_string),
                part2: "am vorbit în fața clasei".to_string(),
                reflection1: "doar uneori".to_string(),
                reflection2: "puțin trist".to_string(),
            }],
            badge_name: Badge::Identitate,
            timestamp: "07.08.2026".to_string(),
        }
    }

    #[test]
    fn connector_pairs_render_as_one_sentence() {
        let entry = entry_with(Some("datorită"));
        let text = format_thought_pair(&entry.thought_pairs[0], &entry);
        assert!(text.starts_with(
            "Eu sunt... \"curajos\" datorită am vorbit în fața clasei."
        ));
        assert!(text.contains("- Tot timpul ești așa? R: doar uneori"));
        assert!(text.contains("- Cum te simți când nu ești așa? R: puțin trist"));
    }

    #[test]
    fn two_prompt_pairs_render_as_two_sentences() {
        let entry = entry_with(None);
        let text = format_thought_pair(&entry.thought_pairs[0], &entry);
        assert!(text.starts_with(
            "Eu sunt... \"curajos\".\n... \"am vorbit în fața clasei\"."
        ));
    }

    #[test]
    fn journal_separates_entries_with_a_rule() {
        let entries = vec![entry_with(None), entry_with(Some("datorită"))];
        let text = format_journal(&entries);
        assert_eq!(text.matches("\n\n---\n\n").count(), 1);
        assert!(text.starts_with("Jurnal: Eu sunt... (07.08.2026)\n"));
    }
}
