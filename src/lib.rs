pub mod cli;
pub mod clock;
pub mod parser;
pub mod renderer;
pub mod replay;
pub mod scene;
pub mod types;

pub use parser::{parse_scene, parse_scene_file};
pub use replay::{replay, DrawSink, QuadBatcher};
pub use scene::Scene;
pub use types::{Record, RecordKind, Vertex};
