/// Terminal drawing surface for ISO3D scenes

pub mod renderer;

pub use renderer::TerminalSurface;
