use std::fs;
use std::path::Path;

use crate::types::{Record, RecordKind};

/// Parses a scene description file into an ordered record list.
///
/// If the file cannot be opened, prints a diagnostic and returns an empty
/// list - callers always get something drawable, possibly nothing.
pub fn parse_scene_file(path: impl AsRef<Path>) -> Vec<Record> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to open scene file {:?}: {}", path, e);
            return Vec::new();
        }
    };
    parse_scene(&contents)
}

/// Parses scene text: whitespace-separated groups of one tag character and
/// three floats, e.g. `V 1.0 0.0 -2.0`. Newlines are not significant.
///
/// Reading stops at the first group that does not fit this shape (including
/// end of input); a partial trailing group is discarded without error.
pub fn parse_scene(input: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut tokens = input.split_whitespace();

    loop {
        let Some(tag) = tokens.next().and_then(single_char) else {
            break;
        };
        let Some(x) = tokens.next().and_then(parse_float) else {
            break;
        };
        let Some(y) = tokens.next().and_then(parse_float) else {
            break;
        };
        let Some(z) = tokens.next().and_then(parse_float) else {
            break;
        };
        records.push(Record::new(RecordKind::from_tag(tag), x, y, z));
    }

    records
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let tag = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(tag)
}

fn parse_float(token: &str) -> Option<f32> {
    token.parse().ok()
}
