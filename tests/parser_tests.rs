use lights::parser::{parse_scene, parse_scene_file};
use lights::types::RecordKind;

#[cfg(test)]
mod parser_tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_scene_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lights_parser_test_{}", name));
        fs::write(&path, contents).expect("failed to write temp scene file");
        path
    }

    #[test]
    fn test_well_formed_file_parses_one_record_per_group() {
        let path = temp_scene_file(
            "well_formed.txt",
            "C 1.0 0.5 0.25\nN 0.0 1.0 0.0\nV -2.0 3.0 4.5\nV 0.0 0.0 0.0\n",
        );
        let records = parse_scene_file(&path);
        fs::remove_file(&path).ok();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].kind, RecordKind::Color);
        assert_eq!(records[0].value.to_array(), [1.0, 0.5, 0.25]);
        assert_eq!(records[1].kind, RecordKind::Normal);
        assert_eq!(records[2].kind, RecordKind::Position);
        assert_eq!(records[2].value.to_array(), [-2.0, 3.0, 4.5]);
    }

    #[test]
    fn test_tag_classification_is_total() {
        let records = parse_scene("C 0 0 0 V 0 0 0 N 0 0 0 X 0 0 0 ? 0 0 0");
        let kinds: Vec<RecordKind> = records.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecordKind::Color,
                RecordKind::Position,
                RecordKind::Normal,
                RecordKind::Normal,
                RecordKind::Normal,
            ]
        );
    }

    #[test]
    fn test_trailing_incomplete_group_is_discarded() {
        let records = parse_scene("V 1 2 3 V 4 5");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_trailing_garbage_stops_parsing_silently() {
        let records = parse_scene("C 1 1 1 V 0 0 0 this is not a group V 9 9 9");
        // "this" is a multi-char tag token: parsing stops, later groups are lost.
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_nonexistent_file_yields_empty_scene() {
        let path = std::env::temp_dir().join("lights_parser_test_does_not_exist.txt");
        let records = parse_scene_file(&path);
        assert!(records.is_empty());
    }

    #[test]
    fn test_tokens_may_span_lines_arbitrarily() {
        let records = parse_scene("V\n1\n2\n3 C 0.5\t0.5 0.5");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, RecordKind::Position);
        assert_eq!(records[1].kind, RecordKind::Color);
    }

    #[test]
    fn test_components_are_not_clamped_or_validated() {
        let records = parse_scene("C 2.5 -1.0 100.0 V 1e6 -1e6 0");
        assert_eq!(records[0].value.to_array(), [2.5, -1.0, 100.0]);
        assert_eq!(records[1].value.to_array(), [1e6, -1e6, 0.0]);
    }
}
