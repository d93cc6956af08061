#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared primitives for Sprig.
//!
//! - [`bridge`]: how pattern algorithms compare and print opaque elements
//! - [`colors`]: ANSI palette shared by dumps and traces
//! - [`utils`]: small formatting helpers

pub mod bridge;
pub mod colors;
pub mod utils;

pub use bridge::{
    Bridge, Custom, ElemDisplay, ElemEq, ElemFmt, Equivalent, Native, Overlay, Override, Render,
    elems_equivalent,
};
pub use colors::Colors;
