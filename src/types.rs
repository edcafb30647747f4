use glam::Vec3;

/// What a scene file record means to the renderer.
///
/// The mapping from tag characters is total: `C` and `V` are recognized,
/// everything else falls through to `Normal`. This matches the file format
/// as shipped; rejecting unknown tags would change which files load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Color,
    Position,
    Normal,
}

impl RecordKind {
    pub const fn from_tag(tag: char) -> Self {
        match tag {
            'C' => RecordKind::Color,
            'V' => RecordKind::Position,
            _ => RecordKind::Normal,
        }
    }
}

/// One entry of the scene file: a tag plus three free-form floats.
/// Components are never clamped or validated (colors may exceed [0,1],
/// positions are unconstrained).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub kind: RecordKind,
    pub value: Vec3,
}

impl Record {
    pub fn new(kind: RecordKind, x: f32, y: f32, z: f32) -> Self {
        Self {
            kind,
            value: Vec3::new(x, y, z),
        }
    }
}

/// Vertex data for GPU upload: expanded quad geometry with the sticky
/// color/normal state baked in per vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tags_map_to_their_kinds() {
        assert_eq!(RecordKind::from_tag('C'), RecordKind::Color);
        assert_eq!(RecordKind::from_tag('V'), RecordKind::Position);
        assert_eq!(RecordKind::from_tag('N'), RecordKind::Normal);
    }

    #[test]
    fn unrecognized_tags_fall_through_to_normal() {
        for tag in ['X', '?', 'c', 'v', '7'] {
            assert_eq!(RecordKind::from_tag(tag), RecordKind::Normal);
        }
    }
}
