//! Presentation adapter for placements
//!
//! Turns a computed placement into things a rendering layer can apply: CSS
//! transform strings, sampled entrance-animation frames and an SVG preview.

pub mod animation;
pub mod config;
pub mod css;
pub mod svg;

pub use animation::{EntranceAnimation, Frame};
pub use config::SvgConfig;
pub use css::{frame_style, panel_transform, stem_transform};
pub use svg::render_svg;
