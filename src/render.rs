//! Rendering of module matrices
//!
//! Light background, dark modules, with a configurable quiet zone. PNG output
//! goes through the `image` crate; SVG and terminal output are plain text.

use crate::models::BitMatrix;
use image::{GrayImage, ImageError, Luma};
use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;

/// Quiet zone width required around a symbol, in modules
pub const DEFAULT_QUIET_ZONE: usize = 4;
/// Module fill used for SVG output
pub const SVG_DARK: &str = "#1a1a2e";

/// Rendering and file output failures
#[derive(Debug, Error)]
pub enum RenderError {
    /// Encoding or writing a raster image failed
    #[error("image error: {0}")]
    Image(#[from] ImageError),
    /// Writing an SVG file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Scale of 0 pixels per module
    #[error("scale must be at least 1 pixel per module")]
    ZeroScale,
}

/// Output sizing shared by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels (or SVG user units) per module
    pub scale: u32,
    /// Light border, in modules
    pub quiet_zone: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 8,
            quiet_zone: DEFAULT_QUIET_ZONE,
        }
    }
}

/// Rasterize to an 8-bit grayscale image (white background, black modules)
pub fn to_image(matrix: &BitMatrix, opts: RenderOptions) -> Result<GrayImage, RenderError> {
    if opts.scale == 0 {
        return Err(RenderError::ZeroScale);
    }
    let modules = (matrix.width() + 2 * opts.quiet_zone) as u32;
    let side = modules * opts.scale;
    let quiet = opts.quiet_zone as u32;

    let img = GrayImage::from_fn(side, side, |px, py| {
        let mx = (px / opts.scale).checked_sub(quiet);
        let my = (py / opts.scale).checked_sub(quiet);
        let dark = match (mx, my) {
            (Some(x), Some(y)) => matrix.get(x as usize, y as usize),
            _ => false,
        };
        Luma([if dark { 0 } else { 255 }])
    });
    Ok(img)
}

/// SVG document with one `rect` per dark module
pub fn to_svg(matrix: &BitMatrix, opts: RenderOptions) -> String {
    let scale = opts.scale.max(1) as usize;
    let side = (matrix.width() + 2 * opts.quiet_zone) * scale;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {side} {side}" shape-rendering="crispEdges">"#
    );
    let _ = writeln!(svg, r#"<rect width="{side}" height="{side}" fill="white"/>"#);
    for y in 0..matrix.height() {
        for x in 0..matrix.width() {
            if matrix.get(x, y) {
                let _ = writeln!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{scale}" height="{scale}" fill="{SVG_DARK}"/>"#,
                    (x + opts.quiet_zone) * scale,
                    (y + opts.quiet_zone) * scale,
                );
            }
        }
    }
    svg.push_str("</svg>\n");
    svg
}

/// Terminal preview, two module rows per text line using half blocks
pub fn to_text(matrix: &BitMatrix, quiet_zone: usize) -> String {
    let side = matrix.width() + 2 * quiet_zone;
    let dark = |x: usize, y: usize| -> bool {
        x >= quiet_zone
            && y >= quiet_zone
            && matrix.get(x - quiet_zone, y - quiet_zone)
    };

    let mut out = String::new();
    for y in (0..side).step_by(2) {
        for x in 0..side {
            // Light modules are drawn, dark ones left blank, for dark terminals
            let ch = match (dark(x, y), dark(x, y + 1)) {
                (false, false) => '█',
                (false, true) => '▀',
                (true, false) => '▄',
                (true, true) => ' ',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Save by file extension: `.svg` as SVG text, anything else through `image`
pub fn save<P: AsRef<Path>>(
    matrix: &BitMatrix,
    path: P,
    opts: RenderOptions,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        std::fs::write(path, to_svg(matrix, opts))?;
    } else {
        to_image(matrix, opts)?.save(path)?;
    }
    Ok(())
}
