//! PNG decoding of map images and export of catalogued tiles

use crate::io::error::{ProcessingError, Result};
use crate::spatial::Tile;
use crate::terrain::Palette;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Flat row-major RGBA buffer of one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixels, row by row
    pub pixels: Vec<[u8; 4]>,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
}

/// Load a map image as a flat RGBA buffer
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_map_pixels(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).map_err(|e| ProcessingError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    let pixels = rgba.pixels().map(|pixel| pixel.0).collect();
    Ok(PixelBuffer {
        pixels,
        width,
        height,
    })
}

/// Draw a tile with each pixel enlarged to a `scale`-sided block
pub fn render_tile(tile: &Tile, palette: &Palette, scale: u32) -> RgbaImage {
    let shape = tile.shape();
    let scale = scale.max(1);
    let width = shape.cols as u32 * scale;
    let height = shape.rows as u32 * scale;

    ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        let color = tile
            .get(row, col)
            .map_or([0, 0, 0, 0], |state| palette.to_color(state));
        Rgba(color)
    })
}

/// Write a tile as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tile_png(tile: &Tile, palette: &Palette, scale: u32, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ProcessingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_tile(tile, palette, scale)
        .save(output_path)
        .map_err(|e| ProcessingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Write a row-major pixel buffer as a PNG
///
/// Used to author map fixtures, typically from [`MapDecoder::encode`](crate::spatial::MapDecoder::encode);
/// the pipeline itself only reads maps.
///
/// # Errors
///
/// Returns an error if the buffer does not fill `width x height` or the file
/// cannot be written
pub fn save_pixels(pixels: &[[u8; 4]], width: u32, height: u32, output_path: &Path) -> Result<()> {
    let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
    let img = RgbaImage::from_raw(width, height, raw).ok_or_else(|| {
        crate::io::error::malformed_image(&format!(
            "{} pixels do not fill {width}x{height}",
            pixels.len()
        ))
    })?;
    img.save(output_path)
        .map_err(|e| ProcessingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
