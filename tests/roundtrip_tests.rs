//! Export and re-import integration tests
//!
//! Renders answer sets through every format and reads Text and JSON back.

use chrono::{FixedOffset, TimeZone};
use pretty_assertions::assert_eq;

use qud::export::markdown::render_markdown;
use qud::export::text::render_text;
use qud::export::{layout_pdf, ExportStamp, PdfOp};
use qud::import::{parse_json, parse_text};
use qud::{FieldId, FormData, PdfConfig, Question, SECTIONS};

fn stamp() -> ExportStamp {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    ExportStamp::new(offset.with_ymd_and_hms(2026, 10, 17, 8, 15, 0).unwrap())
}

fn field(s: &str) -> FieldId {
    s.parse().unwrap()
}

/// Every field filled with a distinct value, some spanning several lines
fn full_form() -> FormData {
    FieldId::all()
        .enumerate()
        .map(|(i, id)| {
            let value = match (i % 3, id.question) {
                (0, _) => format!("answer number {} for {}", i, id),
                (1, Question::How) => "seems logical; customer interviews".to_string(),
                (1, Question::What) => format!("line one of {}\nline two\n\nafter a gap", id),
                _ => format!("  padded {} value  ", i),
            };
            (id, value)
        })
        .collect()
}

// =============================================================================
// Text round trip
// =============================================================================

mod text_roundtrip_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_form_survives_round_trip() {
        let answers = full_form();
        let parsed = parse_text(&render_text(&answers, &stamp()));

        assert_eq!(parsed.len(), 32);
        for (id, value) in answers.iter() {
            assert_eq!(parsed.get(id), value.trim(), "field {}", id);
        }
    }

    #[test]
    fn test_partial_form_restores_only_filled_fields() {
        let mut answers = FormData::new();
        answers.set(field("problem-what"), "Users waste time");
        answers.set(field("problem-how"), "");
        answers.set(field("production-how"), "pilot line");

        let parsed = parse_text(&render_text(&answers, &stamp()));

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get(field("problem-what")), "Users waste time");
        assert_eq!(parsed.get(field("production-how")), "pilot line");
        assert!(!parsed.contains(field("problem-how")));
    }

    #[test]
    fn test_whitespace_only_answers_are_dropped() {
        let mut answers = FormData::new();
        answers.set(field("problem-what"), "   ");
        answers.set(field("problem-how"), "customer interviews");
        answers.set(field("world-impact-how"), " \t ");

        let parsed = parse_text(&render_text(&answers, &stamp()));

        assert_eq!(parsed.len(), 1);
        assert!(!parsed.contains(field("problem-what")));
        assert!(!parsed.contains(field("world-impact-how")));
        assert_eq!(parsed.get(field("problem-how")), "customer interviews");
    }

    #[test]
    fn test_empty_form_parses_to_nothing() {
        let parsed = parse_text(&render_text(&FormData::new(), &stamp()));
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_render_is_stable_for_fixed_stamp() {
        let data = full_form();
        assert_eq!(render_text(&data, &stamp()), render_text(&data, &stamp()));
    }

    #[test]
    fn test_hand_edited_export_still_imports() {
        let mut answers = FormData::new();
        answers.set(field("exit-what"), "Acquisition");
        let edited = render_text(&answers, &stamp())
            .replace("EXIT - What do you know?:\n", "EXIT - What do you know?:   \r\n")
            .replace("\nAcquisition\n", "\n\n   Acquisition by a larger player   \n");

        let parsed = parse_text(&edited);
        assert_eq!(parsed.get(field("exit-what")), "Acquisition by a larger player");
    }
}

// =============================================================================
// JSON import
// =============================================================================

mod json_import_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_saved_answer_file_imports() {
        let answers = full_form();
        let json = serde_json::to_string_pretty(&answers).unwrap();
        assert_eq!(parse_json(&json).unwrap(), answers);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let parsed = parse_json(r#"{"problem-what": "x", "theme": "dark", "problem-why": "y"}"#).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(parse_json("42").is_err());
        assert!(parse_json("null").is_err());
    }
}

// =============================================================================
// Cross-format consistency
// =============================================================================

mod format_consistency_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_formats_follow_section_order() {
        let data = full_form();
        let markdown = render_markdown(&data, &stamp());
        let text = render_text(&data, &stamp());
        let layout = layout_pdf(&data, &stamp(), &PdfConfig::default());
        let pdf_titles: Vec<String> = layout
            .ops
            .iter()
            .filter_map(|op| match op {
                PdfOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();

        let mut last_md = 0;
        let mut last_txt = 0;
        let mut last_pdf = 0;
        for section in SECTIONS.iter() {
            let md = markdown.find(&format!("## {}\n", section.title)).unwrap();
            let txt = text.find(&format!("{} - What do you know?:", section.text_heading)).unwrap();
            let pdf = pdf_titles
                .iter()
                .position(|t| *t == section.title.to_uppercase())
                .unwrap();
            assert!(md >= last_md && txt >= last_txt && pdf >= last_pdf, "{}", section.slug);
            last_md = md;
            last_txt = txt;
            last_pdf = pdf;
        }
    }

    #[test]
    fn test_placeholders_per_format() {
        let data = FormData::new();
        assert_eq!(render_markdown(&data, &stamp()).matches("*No response*").count(), 32);
        assert_eq!(render_text(&data, &stamp()).matches("[No response]").count(), 32);

        let layout = layout_pdf(&data, &stamp(), &PdfConfig::default());
        let placeholders = layout
            .ops
            .iter()
            .filter(|op| matches!(op, PdfOp::Text { text, .. } if text == "No response"))
            .count();
        assert_eq!(placeholders, 32);
    }

    #[test]
    fn test_pdf_bytes_match_layout_pages() {
        let data = full_form();
        let layout = layout_pdf(&data, &stamp(), &PdfConfig::default());
        let bytes = qud::export::pdf::writer::write_pdf(&layout).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains(&format!("/Count {}", layout.page_count())));
    }
}
