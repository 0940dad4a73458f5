//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header read, no pixel decode) |
//! | Decode TIFF | `image::ImageReader` |
//! | Extract region | `image::DynamicImage::crop_imm` |
//! | Pad canvas | `image::ImageBuffer` + `imageops::replace` |
//! | Encode TIFF | `image::codecs::tiff::TiffEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::geometry::{self, CropPlan, CropWindow};
use super::params::CropParams;
use image::codecs::tiff::TiffEncoder;
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageReader, Pixel, imageops};
use std::io::Write;
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode a frame from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|source| BackendError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode and save as TIFF.
fn save_image(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(|e| BackendError::Write {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(e),
    })?;
    let mut writer = std::io::BufWriter::new(file);
    img.write_with_encoder(TiffEncoder::new(&mut writer))
        .map_err(|source| BackendError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    // BufWriter's drop discards flush errors, so flush before reporting success
    writer.flush().map_err(|e| BackendError::Write {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(e),
    })
}

/// Copy `overlap` (a source frame region) onto a black `width` x `height`
/// canvas, anchored at the canvas origin.
///
/// Generic over the pixel type so the canvas matches the source exactly.
fn pad_buffer<P>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
    overlap: Option<CropWindow>,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    // ImageBuffer::new zero-fills, which is black in every supported format
    let mut canvas = ImageBuffer::new(width, height);
    if let Some(region) = overlap {
        let view = src.view(region.left, region.top, region.width, region.height);
        // SubImage implements GenericImageView only through Deref, hence the reborrow
        imageops::replace(&mut canvas, &*view, 0, 0);
    }
    canvas
}

/// Depth-preserving pad: each `DynamicImage` variant is padded in its own
/// pixel format, so 16-bit captures stay 16-bit.
fn pad_frame(
    img: &DynamicImage,
    width: u32,
    height: u32,
    overlap: Option<CropWindow>,
) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(buf) => pad_buffer(buf, width, height, overlap).into(),
        DynamicImage::ImageLumaA8(buf) => pad_buffer(buf, width, height, overlap).into(),
        DynamicImage::ImageRgb8(buf) => pad_buffer(buf, width, height, overlap).into(),
        DynamicImage::ImageRgba8(buf) => pad_buffer(buf, width, height, overlap).into(),
        DynamicImage::ImageLuma16(buf) => pad_buffer(buf, width, height, overlap).into(),
        DynamicImage::ImageLumaA16(buf) => pad_buffer(buf, width, height, overlap).into(),
        DynamicImage::ImageRgb16(buf) => pad_buffer(buf, width, height, overlap).into(),
        DynamicImage::ImageRgba16(buf) => pad_buffer(buf, width, height, overlap).into(),
        DynamicImage::ImageRgb32F(buf) => pad_buffer(buf, width, height, overlap).into(),
        DynamicImage::ImageRgba32F(buf) => pad_buffer(buf, width, height, overlap).into(),
        // DynamicImage is non-exhaustive; unknown variants go through RGBA8
        other => {
            let rgba = other.to_rgba8();
            pad_buffer(&rgba, width, height, overlap).into()
        }
    }
}

/// Execute a resolved [`CropPlan`] against a decoded frame.
fn apply_plan(img: &DynamicImage, plan: CropPlan) -> DynamicImage {
    match plan {
        CropPlan::Extract(w) => img.crop_imm(w.left, w.top, w.width, w.height),
        CropPlan::Pad {
            width,
            height,
            overlap,
        } => pad_frame(img, width, height, overlap),
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|source| BackendError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Dimensions { width, height })
    }

    fn crop(&self, params: &CropParams) -> Result<Dimensions, BackendError> {
        let img = load_image(&params.source)?;
        let dims = Dimensions {
            width: img.width(),
            height: img.height(),
        };
        let plan = geometry::resolve(params.window, dims, params.policy).map_err(|source| {
            BackendError::Bounds {
                path: params.source.clone(),
                source,
            }
        })?;
        let cropped = apply_plan(&img, plan);
        save_image(&cropped, &params.output)?;
        Ok(plan.output_size())
    }
}
