/// Cell rasterizer for terminal polygon rendering
use std::cmp::Ordering;
use std::io::Write;

use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use iso3d_core::{Color, DrawSurface};
use nalgebra::Point2;

/// Character used for filled cells
const FILL_CHAR: char = '█';

/// Drawing surface that rasterizes filled polygons into a terminal cell
/// buffer. Later polygons overwrite earlier ones, so occlusion comes from
/// submission order alone.
pub struct TerminalSurface {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
}

impl TerminalSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Scanline even-odd fill, clipped to the surface bounds
    fn fill_polygon(&mut self, points: &[Point2<f32>], color: Color) {
        if points.len() < 3 {
            return;
        }

        // Vertical bounding box
        let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        let min_y = (min_y.floor() as i32).max(0);
        let max_y = (max_y.ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            let py = y as f32 + 0.5;

            // Where do the polygon edges cross this scanline?
            let mut crossings = Vec::new();
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                if (a.y <= py) != (b.y <= py) {
                    let t = (py - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

            // Fill between pairs of crossings
            for pair in crossings.chunks(2) {
                if pair.len() < 2 {
                    break;
                }
                let start = ((pair[0] - 0.5).ceil() as i32).max(0);
                let end = ((pair[1] - 0.5).floor() as i32).min(self.width as i32 - 1);
                for x in start..=end {
                    self.cells[y as usize * self.width + x as usize] = Some(color);
                }
            }
        }
    }

    /// Flush the cell buffer to a writer as colored block characters
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                match self.cells[y * self.width + x] {
                    Some(color) => {
                        writer.queue(SetForegroundColor(TermColor::Rgb {
                            r: color.r,
                            g: color.g,
                            b: color.b,
                        }))?;
                        writer.queue(Print(FILL_CHAR))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl DrawSurface for TerminalSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    fn draw_polygon(&mut self, points: &[Point2<f32>], color: Color) {
        self.fill_polygon(points, color);
    }
}
