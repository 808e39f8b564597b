//! Outline rendering for smoothed rectangles
//!
//! This module is organized into submodules:
//! - `defaults`: Constants shared by styles, the path builder and SVG output
//! - `path`: Path commands and the `PathConsumer` seam
//! - `path_builder`: Corner parameters and outline synthesis
//! - `svg`: facet-svg path data and preview documents

pub mod defaults;
pub mod path;
pub mod path_builder;
pub mod svg;

// Re-export commonly used items
pub use path::{Path, PathCommand, PathConsumer};
pub use path_builder::{CornerParameters, compute_path};
pub use svg::{
    SvgOptions, SvgPathWriter, path_data, path_data_builder, path_element, svg_document,
};
