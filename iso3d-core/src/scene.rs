/// Isometric projection and flat per-face shading
use std::f32::consts::PI;

use log::debug;
use nalgebra::{Point2, Point3, Vector3};

use crate::color::Color;
use crate::geometry::{Drawable, Path};

/// Render target for projected polygons.
///
/// Implementations draw a filled polygon using the given vertex order and
/// color. Drawing cannot fail from the scene's point of view.
pub trait DrawSurface {
    /// Pixel dimensions of the target surface as (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// Draw a filled polygon with the given color
    fn draw_polygon(&mut self, points: &[Point2<f32>], color: Color);
}

/// A configured isometric scene targeting one drawing surface.
///
/// The projection angle, scale, screen origin, light direction and shading
/// intensity are fixed at construction and never change while rendering.
pub struct Scene<S: DrawSurface> {
    surface: S,
    angle: f32,
    scale: f32,
    origin_x: f32,
    origin_y: f32,
    light_direction: Vector3<f32>,
    color_difference: f32,
}

impl<S: DrawSurface> Scene<S> {
    /// Create a scene with the default scale of 70 screen units per model
    /// unit, sized for pixel-addressed surfaces
    pub fn new(surface: S) -> Self {
        Self::with_scale(surface, 70.0)
    }

    /// Create a scene with a custom scale. Coarse surfaces such as terminal
    /// cell grids need a much smaller scale than the pixel default.
    pub fn with_scale(surface: S, scale: f32) -> Self {
        let (width, height) = surface.dimensions();
        Self {
            surface,
            angle: PI / 6.0,
            scale,
            origin_x: width as f32 / 2.0,
            origin_y: height as f32 * 0.9,
            light_direction: Vector3::new(2.0, -1.0, 3.0).normalize(),
            color_difference: 0.20,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Project a model-space point onto the drawing surface.
    ///
    /// Model X rides along the projection angle, model Y along its mirror
    /// (PI - angle), and model Z maps straight up the screen. Screen Y grows
    /// downward, hence the subtractions.
    pub fn project(&self, point: &Point3<f32>) -> Point2<f32> {
        let x_map = (
            point.x * self.scale * self.angle.cos(),
            point.x * self.scale * self.angle.sin(),
        );
        let y_map = (
            point.y * self.scale * (PI - self.angle).cos(),
            point.y * self.scale * (PI - self.angle).sin(),
        );

        Point2::new(
            self.origin_x + x_map.0 + y_map.0,
            self.origin_y - x_map.1 - y_map.1 - point.z * self.scale,
        )
    }

    /// Add an item to the scene, drawing each of its faces back to front.
    ///
    /// Faces are shaded from `base_color`, or a neutral gray when no color
    /// is given. Returns an error for a face with fewer than 3 points or
    /// with a degenerate normal; faces submitted before the offending one
    /// stay drawn.
    pub fn add<T: Drawable>(&mut self, item: &T, base_color: Option<Color>) -> Result<(), String> {
        let paths = item.draw_order();
        debug!("submitting {} face(s)", paths.len());

        for path in paths {
            self.add_path(path, base_color)?;
        }
        Ok(())
    }

    /// Shade one face and issue its draw call
    fn add_path(&mut self, path: &Path, base_color: Option<Color>) -> Result<(), String> {
        let points = path.points();
        if points.len() < 3 {
            return Err(format!(
                "face needs at least 3 points to define a normal, got {}",
                points.len()
            ));
        }

        let base_color = base_color.unwrap_or_default();

        // Face normal from the first two edges; planarity and consistent
        // winding are the caller's contract
        let v1 = points[1] - points[0];
        let v2 = points[2] - points[1];
        let normal = v1.cross(&v2);
        if normal.norm() < 1e-6 {
            return Err("degenerate face: first three points are collinear".to_string());
        }
        let normal = normal.normalize();

        // Brightness in [-1, 1]: positive faces the light, negative faces away
        let brightness = normal.dot(&self.light_direction);
        let color = base_color.lighten(brightness * self.color_difference);

        let projected: Vec<Point2<f32>> = points.iter().map(|p| self.project(p)).collect();
        self.surface.draw_polygon(&projected, color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;

    /// Surface that records every draw call instead of rasterizing
    struct RecordingSurface {
        width: u32,
        height: u32,
        calls: Vec<(Vec<Point2<f32>>, Color)>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
            }
        }
    }

    impl DrawSurface for RecordingSurface {
        fn dimensions(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn draw_polygon(&mut self, points: &[Point2<f32>], color: Color) {
            self.calls.push((points.to_vec(), color));
        }
    }

    fn test_scene() -> Scene<RecordingSurface> {
        Scene::new(RecordingSurface::new(200, 100))
    }

    fn unit_square(z: f32) -> Path {
        Path::new(vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(0.0, 1.0, z),
        ])
    }

    #[test]
    fn test_model_origin_projects_to_screen_origin() {
        let scene = test_scene();
        let projected = scene.project(&Point3::origin());
        assert!((projected.x - 100.0).abs() < 1e-6);
        assert!((projected.y - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_unit_x_axis_mapping() {
        let scene = test_scene();
        let projected = scene.project(&Point3::new(1.0, 0.0, 0.0));
        let angle = PI / 6.0;
        // Screen Y grows downward, so the displacement up the screen is negative
        assert!((projected.x - 100.0 - 70.0 * angle.cos()).abs() < 1e-4);
        assert!((projected.y - 90.0 + 70.0 * angle.sin()).abs() < 1e-4);
    }

    #[test]
    fn test_z_maps_to_pure_vertical_displacement() {
        let scene = test_scene();
        let low = scene.project(&Point3::new(0.3, 0.7, 0.25));
        let high = scene.project(&Point3::new(0.3, 0.7, 1.25));
        assert!((low.x - high.x).abs() < 1e-6);
        assert!((low.y - high.y - 70.0).abs() < 1e-4);
    }

    #[test]
    fn test_default_base_color_is_neutral_gray() {
        let mut scene = test_scene();
        scene.add(&unit_square(0.0), None).unwrap();

        // Upward normal (0, 0, 1), so brightness is the light's z component
        let brightness = Vector3::new(2.0f32, -1.0, 3.0).normalize().z;
        let expected = Color::default().lighten(brightness * 0.20);

        let calls = &scene.surface().calls;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, expected);
    }

    #[test]
    fn test_base_color_is_shaded() {
        let mut scene = test_scene();
        scene
            .add(&unit_square(0.0), Some(Color::new(50, 160, 60)))
            .unwrap();

        let brightness = Vector3::new(2.0f32, -1.0, 3.0).normalize().z;
        let expected = Color::new(50, 160, 60).lighten(brightness * 0.20);
        assert_eq!(scene.surface().calls[0].1, expected);
    }

    #[test]
    fn test_winding_order_preserved_in_draw_call() {
        let pentagon = Path::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ]);

        let mut scene = test_scene();
        scene.add(&pentagon, None).unwrap();

        let calls = &scene.surface().calls;
        assert_eq!(calls[0].0.len(), 5);
        for (drawn, point) in calls[0].0.iter().zip(pentagon.points()) {
            let expected = scene.project(point);
            assert!((drawn.x - expected.x).abs() < 1e-6);
            assert!((drawn.y - expected.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_shape_faces_drawn_in_ordered_paths_order() {
        // Same square at two heights; the lower one is farther and must be
        // drawn first
        let shape = Shape::new(vec![unit_square(2.0), unit_square(0.0)]);

        let mut scene = test_scene();
        scene.add(&shape, None).unwrap();

        let calls = &scene.surface().calls;
        assert_eq!(calls.len(), 2);
        // The z = 2 face sits 2 * scale higher on screen (smaller y)
        let first_y = calls[0].0[0].y;
        let second_y = calls[1].0[0].y;
        assert!((first_y - second_y - 140.0).abs() < 1e-4);
    }

    #[test]
    fn test_brightness_stays_within_shading_intensity() {
        // Faces in all three axis planes, both windings
        let faces = vec![
            unit_square(0.0),
            Path::new(vec![
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 0.0),
            ]),
            Path::new(vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 0.0, 1.0),
            ]),
            Path::new(vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
                Point3::new(0.0, 1.0, 0.0),
            ]),
        ];

        let mut scene = test_scene();
        for face in &faces {
            scene.add(face, None).unwrap();
        }

        // Max channel shift is color_difference * 255 = 51
        for (_, color) in &scene.surface().calls {
            assert!((color.r as i32 - 120).abs() <= 51);
            assert!((color.g as i32 - 120).abs() <= 51);
            assert!((color.b as i32 - 120).abs() <= 51);
        }
    }

    #[test]
    fn test_face_with_too_few_points_is_rejected() {
        let degenerate = Path::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ]);

        let mut scene = test_scene();
        assert!(scene.add(&degenerate, None).is_err());
        assert!(scene.surface().calls.is_empty());
    }

    #[test]
    fn test_collinear_leading_points_are_rejected() {
        let collinear = Path::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ]);

        let mut scene = test_scene();
        assert!(scene.add(&collinear, None).is_err());
        assert!(scene.surface().calls.is_empty());
    }
}
