//! Paginated A4 PDF export.
//!
//! Each entry starts on a fresh page and flows onto further pages as
//! needed. Text is set in the base-14 Helvetica with WinAnsi encoding,
//! so Romanian comma-below diacritics are transliterated to their base
//! letters rather than embedding a Unicode font.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::ExportError;
use crate::export::text::format_thought_pair;
use crate::journal::JournalEntry;

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 56;
const LEADING: i64 = 16;
const BODY_SIZE: i64 = 11;
const TITLE_SIZE: i64 = 16;
const WRAP_COLUMNS: usize = 88;
const MAX_LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    size: i64,
}

impl Line {
    fn title(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: TITLE_SIZE,
        }
    }

    fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: BODY_SIZE,
        }
    }

    fn blank() -> Self {
        Self::body("")
    }
}

/// Export one entry to a PDF file.
pub fn export_entry_to_pdf(entry: &JournalEntry, path: &Path) -> Result<(), ExportError> {
    write_pdf(std::slice::from_ref(entry), path)
}

/// Export the whole journal to a single multi-page PDF file.
pub fn export_all_to_pdf(entries: &[JournalEntry], path: &Path) -> Result<(), ExportError> {
    if entries.is_empty() {
        return Err(ExportError::NoEntries);
    }
    write_pdf(entries, path)
}

fn write_pdf(entries: &[JournalEntry], path: &Path) -> Result<(), ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for entry in entries {
        for chunk in layout_entry(entry).chunks(MAX_LINES_PER_PAGE) {
            let content = page_content(chunk)?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();
    doc.save(path).map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(())
}

fn page_content(lines: &[Line]) -> Result<Vec<u8>, ExportError> {
    let mut ops = vec![
        Operation::new("BT", vec![]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
    ];
    let mut current_size = 0;
    for line in lines {
        if line.size != current_size {
            ops.push(Operation::new("Tf", vec!["F1".into(), line.size.into()]));
            current_size = line.size;
        }
        ops.push(Operation::new("T*", vec![]));
        if !line.text.is_empty() {
            ops.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(&line.text))],
            ));
        }
    }
    ops.push(Operation::new("ET", vec![]));
    Content { operations: ops }
        .encode()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

/// The printable lines for one entry: a title block, then every thought
/// pair in its share-text form, word-wrapped to the page width.
fn layout_entry(entry: &JournalEntry) -> Vec<Line> {
    let mut lines = vec![
        Line::title(format!("Jurnal: {}", entry.plan_title)),
        Line::body(format!(
            "{} - Insigna: {}",
            entry.timestamp, entry.badge_name
        )),
        Line::blank(),
    ];
    for pair in &entry.thought_pairs {
        for logical in format_thought_pair(pair, entry).split('\n') {
            for wrapped in wrap(logical, WRAP_COLUMNS) {
                lines.push(Line::body(wrapped));
            }
        }
        lines.push(Line::blank());
    }
    lines
}

/// Greedy word wrap; continuation lines are indented.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    if text.chars().count() <= columns {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let prospective = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if prospective > columns && !current.is_empty() {
            lines.push(current);
            current = format!("    {word}");
        } else if current.is_empty() {
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Encode for the WinAnsi base font: Romanian comma-below letters map
/// to their base letters, anything unrepresentable to '?'.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            'ă' | 'â' => b'a',
            'Ă' | 'Â' => b'A',
            'î' => b'i',
            'Î' => b'I',
            'ș' | 'ş' => b's',
            'Ș' | 'Ş' => b'S',
            'ț' | 'ţ' => b't',
            'Ț' | 'Ţ' => b'T',
            c if (c as u32) < 0x100 => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::Badge;
    use crate::journal::ThoughtPair;

    fn entry(pairs: usize) -> JournalEntry {
        JournalEntry {
            id: "t".to_string(),
            plan_title: "Eu sunt...".to_string(),
            prompt1: "Eu sunt...".to_string(),
            prompt2: "...".to_string(),
            thought_pairs: (0..pairs)
                .map(|i| ThoughtPair {
                    part1: format!("gând {i}"),
                    connector: Some("datorită".to_string()),
                    part2: "ceva ce am reușit să fac de curând".to_string(),
                    reflection1: "doar uneori".to_string(),
                    reflection2: "puțin trist".to_string(),
                })
                .collect(),
            badge_name: Badge::Identitate,
            timestamp: "07.08.2026".to_string(),
        }
    }

    #[test]
    fn wrap_respects_the_column_limit() {
        let text = "cuvânt ".repeat(40);
        for line in wrap(text.trim(), 30) {
            assert!(line.chars().count() <= 30, "line too long: {line}");
        }
        assert_eq!(wrap("scurt", 30), vec!["scurt".to_string()]);
    }

    #[test]
    fn diacritics_transliterate_to_win_ansi() {
        assert_eq!(encode_win_ansi("înțelegere"), b"intelegere".to_vec());
        assert_eq!(encode_win_ansi("Știu"), b"Stiu".to_vec());
        assert_eq!(encode_win_ansi("😊"), b"?".to_vec());
    }

    #[test]
    fn layout_starts_with_the_title_block() {
        let lines = layout_entry(&entry(2));
        assert_eq!(lines[0], Line::title("Jurnal: Eu sunt..."));
        assert_eq!(
            lines[1],
            Line::body("07.08.2026 - Insigna: Identitate")
        );
        assert!(lines.len() > 4);
    }

    #[test]
    fn long_entries_paginate() {
        let lines = layout_entry(&entry(15));
        assert!(lines.chunks(MAX_LINES_PER_PAGE).count() > 1);
    }

    #[test]
    fn exported_file_is_a_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jurnal.pdf");
        export_entry_to_pdf(&entry(7), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn exporting_an_empty_journal_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gol.pdf");
        assert!(matches!(
            export_all_to_pdf(&[], &path),
            Err(ExportError::NoEntries)
        ));
        assert!(!path.exists());
    }
}
