//! Saccade Core - Geometry and raster primitives for visual attention
//!
//! This crate provides the value types that every other saccade crate is
//! built on:
//!
//! - [`Region`] - A possibly partial rectangle or point in pixel space
//! - [`Rect`] / [`Point`] / [`Size`] - Fully specified geometry
//! - [`Raster`] - The pixel-matrix capability set used by segments
//! - [`Mat`] / [`MatMut`] - The bundled raster (immutable / mutable)
//!
//! All types are plain values: operations return new values and never
//! modify their inputs, so they can be shared across threads freely.

pub mod error;
pub mod mat;
pub mod raster;
pub mod region;

pub use error::{Error, Result};
pub use mat::{MASK_ON, MaskedStats, Mat, MatMut, ScaleMethod};
pub use raster::Raster;
pub use region::{Point, Rect, Region, Size};
