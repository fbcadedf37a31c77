//! Error handling.
//!
//! All validation failures are structural or programmer-input errors, so no
//! operation in this crate is ever retried. Constructors fail before
//! anything is built, meaning a failed call never leaves a partially
//! constructed shading behind.

use crate::color::ColorSpaceType;
use crate::shading::MeshShadingType;

/// A wrapper type for umbra errors.
pub type ShadingResult<T> = Result<T, ShadingError>;

/// An error while building a shading or a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadingError {
    /// The document has already been finished and cannot host new objects.
    InvalidDocument,
    /// An unsupported mesh shading kind was requested.
    InvalidShadingType(MeshShadingType),
    /// An unsupported color space was requested.
    InvalidColorSpace(ColorSpaceType),
    /// A numeric parameter was outside its contractual domain, for example
    /// a non-positive interpolation exponent.
    InvalidParameter(f32),
    /// A color component was outside the 0..=1 range.
    ComponentOutOfRange(f32),
    /// The operation was invoked on a shading that cannot support it, for
    /// example a vertex append on a gradient shading.
    InvalidObject,
}
