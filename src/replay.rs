use glam::Vec3;

use crate::types::{Record, RecordKind, Vertex};

/// Target of a scene replay: the classic immediate-mode drawing contract.
/// State set through `set_color`/`set_normal` is sticky - it applies to
/// every vertex emitted afterwards until overwritten.
pub trait DrawSink {
    fn set_color(&mut self, color: Vec3);
    fn set_normal(&mut self, normal: Vec3);
    fn begin_quads(&mut self);
    fn vertex(&mut self, position: Vec3);
    fn end_quads(&mut self);
}

/// Replays a record sequence as immediate-mode drawing commands.
///
/// Position records are consumed strictly in groups of four, each group one
/// quad: the batch opens on the first position of a group and closes when
/// the running counter wraps modulo 4. If the total position count is not a
/// multiple of four the final batch is left open, with no flush and no
/// error.
pub fn replay(records: &[Record], sink: &mut impl DrawSink) {
    let mut vertex_count = 0;
    for record in records {
        match record.kind {
            RecordKind::Color => sink.set_color(record.value),
            RecordKind::Position => {
                if vertex_count == 0 {
                    sink.begin_quads();
                }
                sink.vertex(record.value);
                vertex_count = (vertex_count + 1) % 4;
                if vertex_count == 0 {
                    sink.end_quads();
                }
            }
            RecordKind::Normal => sink.set_normal(record.value),
        }
    }
}

/// Translation shim from the immediate-mode contract to a modern API:
/// collects closed quads as a triangle-list vertex buffer, one upload per
/// scene load instead of per-frame replay.
///
/// Initial sticky state mirrors fixed-function defaults: white color,
/// +Z normal.
#[derive(Debug)]
pub struct QuadBatcher {
    color: Vec3,
    normal: Vec3,
    pending: Vec<Vertex>,
    vertices: Vec<Vertex>,
    closed_quads: usize,
}

impl QuadBatcher {
    pub fn new() -> Self {
        Self {
            color: Vec3::ONE,
            normal: Vec3::Z,
            pending: Vec::new(),
            vertices: Vec::new(),
            closed_quads: 0,
        }
    }

    /// Convenience: replay a whole record list into a fresh batcher.
    pub fn batch(records: &[Record]) -> Self {
        let mut batcher = Self::new();
        replay(records, &mut batcher);
        batcher
    }

    /// Triangle-list vertices of all closed quads, two triangles per quad.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertices of the trailing open batch, if the scene ended mid-quad.
    /// These are never drawn.
    pub fn pending(&self) -> &[Vertex] {
        &self.pending
    }

    pub fn closed_quads(&self) -> usize {
        self.closed_quads
    }
}

impl Default for QuadBatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSink for QuadBatcher {
    fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    fn set_normal(&mut self, normal: Vec3) {
        self.normal = normal;
    }

    fn begin_quads(&mut self) {
        self.pending.clear();
    }

    fn vertex(&mut self, position: Vec3) {
        self.pending
            .push(Vertex::new(position, self.normal, self.color));
    }

    fn end_quads(&mut self) {
        // Quad v0 v1 v2 v3 becomes triangles v0 v1 v2 and v0 v2 v3.
        if let [v0, v1, v2, v3] = self.pending[..] {
            self.vertices.extend_from_slice(&[v0, v1, v2, v0, v2, v3]);
            self.closed_quads += 1;
        }
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_scene;

    #[test]
    fn four_positions_close_one_quad() {
        let records = parse_scene("V 0 0 0 V 1 0 0 V 1 1 0 V 0 1 0");
        let batch = QuadBatcher::batch(&records);

        assert_eq!(batch.closed_quads(), 1);
        assert_eq!(batch.vertices().len(), 6);
        assert!(batch.pending().is_empty());

        let positions: Vec<[f32; 3]> = batch.vertices().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ]
        );
    }

    #[test]
    fn fifth_position_stays_pending() {
        let records = parse_scene("V 0 0 0 V 1 0 0 V 1 1 0 V 0 1 0 V 9 9 9");
        let batch = QuadBatcher::batch(&records);

        assert_eq!(batch.closed_quads(), 1);
        assert_eq!(batch.vertices().len(), 6);
        assert_eq!(batch.pending().len(), 1);
        assert_eq!(batch.pending()[0].position, [9.0, 9.0, 9.0]);
    }

    #[test]
    fn color_and_normal_are_sticky_across_quads() {
        let records = parse_scene(
            "C 1 0 0 N 0 1 0 \
             V 0 0 0 V 1 0 0 V 1 1 0 V 0 1 0 \
             V 0 0 1 V 1 0 1 V 1 1 1 V 0 1 1",
        );
        let batch = QuadBatcher::batch(&records);

        assert_eq!(batch.closed_quads(), 2);
        for v in batch.vertices() {
            assert_eq!(v.color, [1.0, 0.0, 0.0]);
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn defaults_are_white_color_and_plus_z_normal() {
        let records = parse_scene("V 0 0 0 V 1 0 0 V 1 1 0 V 0 1 0");
        let batch = QuadBatcher::batch(&records);

        for v in batch.vertices() {
            assert_eq!(v.color, [1.0, 1.0, 1.0]);
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
    }
}
