pub mod renderer;

pub use renderer::{Renderer, effects_summary, status_text};
