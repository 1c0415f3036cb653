//! Logo rendering onto caller-supplied `plotters` drawing areas.

mod layout;
mod logo;
mod multi;
mod style;

pub use layout::best_layout;
pub use logo::{draw_logo, render_sample_logo};
pub use multi::{render_logo_grid, SampleSelection, DEFAULT_GRID_LENGTH};
pub use style::{ColorScheme, FontSettings, LogoOptions};
