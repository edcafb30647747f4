use std::path::{Path, PathBuf};

use crate::parser::parse_scene_file;
use crate::types::Record;

/// The active record sequence and the file it came from.
///
/// Insertion order is significant: the sequence is a drawing program, not a
/// spatial data set. Reload replaces the whole sequence; individual records
/// are never mutated.
#[derive(Debug)]
pub struct Scene {
    path: PathBuf,
    records: Vec<Record>,
}

impl Scene {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let records = parse_scene_file(&path);
        println!("Scene loaded: {} records from {:?}", records.len(), path);
        Self { path, records }
    }

    /// Re-parses the source file, discarding the old sequence wholesale.
    pub fn reload(&mut self) {
        self.records = parse_scene_file(&self.path);
        println!(
            "Scene reloaded: {} records from {:?}",
            self.records.len(),
            self.path()
        );
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
