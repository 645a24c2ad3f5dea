//! Logomark - procedural generator for the site logo and favicon
//!
//! This library produces a fixed SVG mark (an open rounded polyline across
//! four inset corner points, stroked with a teal gradient, with white dots
//! at two corners) and writes it to disk. The computation is fully
//! deterministic: for the fixed canvas constants the document is
//! byte-identical on every invocation.
//!
//! # Example
//!
//! ```rust
//! use logomark::logo_document;
//!
//! let doc = logo_document();
//! assert!(doc.starts_with("<svg"));
//! ```

pub mod error;
pub mod geometry;
pub mod svg;

pub use error::GenerateError;

use std::fs;
use std::path::Path;

use geometry::{Corners, CANVAS_HEIGHT, CANVAS_WIDTH, PADDING, STROKE_WIDTH};
use svg::SvgBuilder;

/// Relative paths the binary writes, in order
pub const OUTPUT_PATHS: [&str; 2] = ["public/logo.svg", "public/favicon.svg"];

/// Assemble the logo SVG document
///
/// Pure function of the canvas constants: a diagonal teal gradient
/// definition, one open path visiting bottom-left, top-left,
/// bottom-right, top-right, and two white dots at the top-left and
/// bottom-right corners.
pub fn logo_document() -> String {
    let corners = Corners::inset(CANVAS_WIDTH, CANVAS_HEIGHT, PADDING);

    let mut builder = SvgBuilder::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    builder.add_diagonal_gradient("tealGrad", &[(0, "#0d9488"), (100, "#34d399")]);
    builder.add_open_path(
        &[
            corners.bottom_left,
            corners.top_left,
            corners.bottom_right,
            corners.top_right,
        ],
        "url(#tealGrad)",
        STROKE_WIDTH,
    );
    builder.add_circle(corners.top_left, geometry::dot_radius(), "white");
    builder.add_circle(corners.bottom_right, geometry::dot_radius(), "white");
    builder.build()
}

/// Write the logo document to `path`, creating missing parent
/// directories and overwriting any existing file
pub fn generate(path: impl AsRef<Path>) -> Result<(), GenerateError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, logo_document()).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
