//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Crop** | `DynamicImage::crop_imm` |
//! | **Pad** | `ImageBuffer` canvas + `imageops::replace` |
//! | **Encode** | `codecs::tiff::TiffEncoder` |
//!
//! The module is split into:
//! - **Geometry**: Pure functions for window math (unit testable)
//! - **Parameters**: Data structures describing crop operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining geometry + backend

pub mod backend;
pub mod geometry;
pub mod operations;
pub mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use geometry::{BoundsPolicy, CropWindow};
pub use operations::{crop_to_file, get_dimensions, planned_output_size};
pub use params::CropParams;
pub use rust_backend::RustBackend;
