/// Geometry primitives for isometric rendering
use std::cmp::Ordering;

use nalgebra::Point3;

/// A planar face defined by an ordered ring of at least 3 coplanar points.
///
/// The winding order of the ring determines the sign of the face normal,
/// and therefore which side of the face catches the light.
#[derive(Debug, Clone)]
pub struct Path {
    points: Vec<Point3<f32>>,
}

impl Path {
    pub fn new(points: Vec<Point3<f32>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }

    /// Mean viewing depth of the face under the fixed isometric view
    /// direction. Larger values are farther from the viewer.
    pub fn depth(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        let total: f32 = self.points.iter().map(point_depth).sum();
        total / self.points.len() as f32
    }
}

/// An unordered collection of faces forming a solid
#[derive(Debug, Clone, Default)]
pub struct Shape {
    paths: Vec<Path>,
}

impl Shape {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Faces sorted farthest first, so that drawing them in order lets
    /// nearer faces paint over farther ones
    pub fn ordered_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.paths.iter().collect();
        paths.sort_by(|a, b| {
            b.depth()
                .partial_cmp(&a.depth())
                .unwrap_or(Ordering::Equal)
        });
        paths
    }
}

/// Anything that can yield faces in a back-to-front order safe to draw
pub trait Drawable {
    fn draw_order(&self) -> Vec<&Path>;
}

impl Drawable for Path {
    fn draw_order(&self) -> Vec<&Path> {
        vec![self]
    }
}

impl Drawable for Shape {
    fn draw_order(&self) -> Vec<&Path> {
        self.ordered_paths()
    }
}

/// Viewing depth of a single point. Z is weighted double so a block
/// resting on top of another sorts in front of it.
fn point_depth(point: &Point3<f32>) -> f32 {
    point.x + point.y - 2.0 * point.z
}
