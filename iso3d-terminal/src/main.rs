/// ISO3D Terminal Demo - Shaded Cube
///
/// Renders a flat-shaded isometric cube to the current terminal.
/// Set RUST_LOG=debug for rendering diagnostics.

use std::io::{self, stdout, Write};

use crossterm::terminal;
use iso3d_core::{Color, Path, Scene, Shape};
use iso3d_terminal::TerminalSurface;
use log::info;
use nalgebra::Point3;

fn main() -> io::Result<()> {
    env_logger::init();

    let (width, height) = terminal::size()?;
    info!("rendering to a {}x{} terminal", width, height);

    let surface = TerminalSurface::new(width as usize, height as usize);

    // Terminal cells are coarse, so use a much smaller scale than the
    // pixel default
    let mut scene = Scene::with_scale(surface, 6.0);

    let cube = cube(Point3::new(0.0, 0.0, 0.0), 1.5);
    scene
        .add(&cube, Some(Color::new(50, 160, 60)))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut stdout = stdout();
    scene.surface().draw(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Six outward-wound square faces of an axis-aligned cube
fn cube(origin: Point3<f32>, size: f32) -> Shape {
    let (x, y, z) = (origin.x, origin.y, origin.z);
    let s = size;
    Shape::new(vec![
        // Bottom
        Path::new(vec![
            Point3::new(x, y, z),
            Point3::new(x, y + s, z),
            Point3::new(x + s, y + s, z),
            Point3::new(x + s, y, z),
        ]),
        // Top
        Path::new(vec![
            Point3::new(x, y, z + s),
            Point3::new(x + s, y, z + s),
            Point3::new(x + s, y + s, z + s),
            Point3::new(x, y + s, z + s),
        ]),
        // Front (y = const)
        Path::new(vec![
            Point3::new(x, y, z),
            Point3::new(x + s, y, z),
            Point3::new(x + s, y, z + s),
            Point3::new(x, y, z + s),
        ]),
        // Back
        Path::new(vec![
            Point3::new(x, y + s, z),
            Point3::new(x, y + s, z + s),
            Point3::new(x + s, y + s, z + s),
            Point3::new(x + s, y + s, z),
        ]),
        // Left (x = const)
        Path::new(vec![
            Point3::new(x, y, z),
            Point3::new(x, y, z + s),
            Point3::new(x, y + s, z + s),
            Point3::new(x, y + s, z),
        ]),
        // Right
        Path::new(vec![
            Point3::new(x + s, y, z),
            Point3::new(x + s, y + s, z),
            Point3::new(x + s, y + s, z + s),
            Point3::new(x + s, y, z + s),
        ]),
    ])
}
