mod error;
mod svg;

pub use error::{ImageError, Result};
pub use svg::{palette, render, render_svg, Palette, SVG_CONTENT_TYPE};
