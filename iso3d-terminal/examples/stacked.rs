/// Example: Two stacked cubes
///
/// Shows painter's-algorithm ordering across shapes: the lower cube is
/// submitted first so the upper cube paints over it where they meet.
///
/// Usage: cargo run --example stacked

use std::io::{self, stdout, Write};

use crossterm::terminal;
use iso3d_core::{Color, Path, Scene, Shape};
use iso3d_terminal::TerminalSurface;
use nalgebra::Point3;

fn main() -> io::Result<()> {
    env_logger::init();

    let (width, height) = terminal::size()?;
    let surface = TerminalSurface::new(width as usize, height as usize);
    let mut scene = Scene::with_scale(surface, 6.0);

    let size = 1.2;
    let lower = cube(Point3::new(0.0, 0.0, 0.0), size);
    let upper = cube(Point3::new(0.0, 0.0, size), size);

    // Farther shape first; each shape orders its own faces internally
    scene
        .add(&lower, Some(Color::new(160, 60, 50)))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    scene
        .add(&upper, Some(Color::new(50, 60, 160)))
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
        Path::new(vec![
            Point3::new(x, y, z),
            Point3::new(x, y + s, z),
            Point3::new(x + s, y + s, z),
            Point3::new(x + s, y, z),
        ]),
        Path::new(vec![
            Point3::new(x, y, z + s),
            Point3::new(x + s, y, z + s),
            Point3::new(x + s, y + s, z + s),
            Point3::new(x, y + s, z + s),
        ]),
        Path::new(vec![
            Point3::new(x, y, z),
            Point3::new(x + s, y, z),
            Point3::new(x + s, y, z + s),
            Point3::new(x, y, z + s),
        ]),
        Path::new(vec![
            Point3::new(x, y + s, z),
            Point3::new(x, y + s, z + s),
            Point3::new(x + s, y + s, z + s),
            Point3::new(x + s, y + s, z),
        ]),
        Path::new(vec![
            Point3::new(x, y, z),
            Point3::new(x, y, z + s),
            Point3::new(x, y + s, z + s),
            Point3::new(x, y + s, z),
        ]),
        Path::new(vec![
            Point3::new(x + s, y, z),
            Point3::new(x + s, y + s, z),
            Point3::new(x + s, y + s, z + s),
            Point3::new(x + s, y, z + s),
        ]),
    ])
}
