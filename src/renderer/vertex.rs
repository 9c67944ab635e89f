//! Vertex types and tessellation for GPU hosts

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    fn at(p: DVec2, color: [f32; 4]) -> Self {
        Self::new(p.x as f32, p.y as f32, color)
    }
}

/// Raw bytes for uploading into a vertex buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Scale points around `origin` (selection feedback)
pub fn scale_about(points: &[DVec2], origin: DVec2, factor: f64) -> Vec<DVec2> {
    points.iter().map(|&p| origin + (p - origin) * factor).collect()
}

/// Triangle fan from the first point of a closed outline.
///
/// Leaf outlines start at the apex and are star-shaped around it, so a fan
/// covers them without overlap.
pub fn fill_vertices(polygon: &[DVec2], color: [f32; 4]) -> Vec<Vertex> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let apex = polygon[0];
    let mut vertices = Vec::with_capacity((polygon.len() - 2) * 3);

    for pair in polygon[1..].windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        // Skip slivers that touch the apex (closing segment)
        if (p1 - apex).perp_dot(p2 - apex).abs() <= f64::EPSILON {
            continue;
        }
        vertices.push(Vertex::at(apex, color));
        vertices.push(Vertex::at(p1, color));
        vertices.push(Vertex::at(p2, color));
    }

    vertices
}

/// Quads along a closed outline, `width` wide and centered on the edge
pub fn stroke_vertices(polygon: &[DVec2], width: f64, color: [f32; 4]) -> Vec<Vertex> {
    if polygon.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(polygon.len() * 6);
    let closing = [polygon[polygon.len() - 1], polygon[0]];

    for pair in polygon.windows(2).chain(std::iter::once(&closing[..])) {
        let (p1, p2) = (pair[0], pair[1]);
        let dir = (p2 - p1).normalize_or_zero();
        if dir == DVec2::ZERO {
            continue;
        }
        let perp = dir.perp() * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(Vertex::at(v1a, color));
        vertices.push(Vertex::at(v1b, color));
        vertices.push(Vertex::at(v2a, color));

        vertices.push(Vertex::at(v2a, color));
        vertices.push(Vertex::at(v1b, color));
        vertices.push(Vertex::at(v2b, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]
    }

    fn triangle_area(v: &[Vertex]) -> f64 {
        let p = |i: usize| DVec2::new(v[i].position[0] as f64, v[i].position[1] as f64);
        ((p(1) - p(0)).perp_dot(p(2) - p(0)) / 2.0).abs()
    }

    #[test]
    fn test_fill_covers_polygon() {
        let vertices = fill_vertices(&square(), [1.0; 4]);
        assert_eq!(vertices.len(), 6);
        let area: f64 = vertices.chunks(3).map(triangle_area).sum();
        assert!((area - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_fill_degenerate() {
        assert!(fill_vertices(&square()[..2], [1.0; 4]).is_empty());
    }

    #[test]
    fn test_stroke_closes_outline() {
        let vertices = stroke_vertices(&square(), 2.0, [0.0, 0.0, 0.0, 1.0]);
        // Four edges including the closing one
        assert_eq!(vertices.len(), 4 * 6);
        assert_eq!(as_bytes(&vertices).len(), vertices.len() * std::mem::size_of::<Vertex>());
    }

    #[test]
    fn test_scale_about() {
        let scaled = scale_about(&[DVec2::new(10.0, 0.0)], DVec2::ZERO, 1.1);
        assert!((scaled[0].x - 11.0).abs() < 1e-12);
    }
}
