//! Procedural composition of branded raster images and multi-page documents.
//!
//! Everything is drawn on CPU into owned RGB canvases: two-stop gradients, hard-edged rounded
//! masks, styled text runs and auto-sized boxes. Documents flow content blocks across A4 pages
//! and are written as PDFs with one raster image per page. [`pipeline::run`] produces the whole
//! artifact set into an [`output::sink::ArtifactSink`].
#![forbid(unsafe_code)]

pub(crate) mod foundation;
pub mod layout;
pub mod output;
pub mod paint;
pub mod pipeline;
pub mod text;

pub use foundation::core::{Color, Point, Rect, Vec2};
pub use foundation::error::{BrandpressError, BrandpressResult};
