//! Creating new PDF documents.
//!
//! The starting point is always the creation of a [`Document`], which
//! represents _one_ PDF document that shading objects can be registered
//! into. Shadings are built and filled with vertex data as standalone
//! values first; once a shading is complete, it is attached to the
//! document with [`Document::add_shading`]. Calling [`Document::finish`]
//! writes all registered objects out as a PDF file.

use crate::error::{ShadingError, ShadingResult};
use crate::serialize::{SerializeContext, SerializeSettings};
use crate::shading::Shading;

/// A PDF document hosting shading objects.
pub struct Document {
    serializer_context: Option<SerializeContext>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new document with default settings.
    pub fn new() -> Self {
        Self {
            serializer_context: Some(SerializeContext::new(SerializeSettings::default())),
        }
    }

    /// Create a new document with specific serialization settings.
    pub fn new_with(serialize_settings: SerializeSettings) -> Self {
        Self {
            serializer_context: Some(SerializeContext::new(serialize_settings)),
        }
    }

    /// Add a shading to the document.
    ///
    /// Shadings with identical content are written to the document only
    /// once. Fails with [`ShadingError::InvalidDocument`] if the document
    /// has already been finished.
    pub fn add_shading(&mut self, shading: Shading) -> ShadingResult<()> {
        let sc = self
            .serializer_context
            .as_mut()
            .ok_or(ShadingError::InvalidDocument)?;
        sc.register_cacheable(shading);

        Ok(())
    }

    /// Write the document to a PDF.
    ///
    /// This leaves the document in a finished state: any further operation
    /// on it fails with [`ShadingError::InvalidDocument`].
    pub fn finish(&mut self) -> ShadingResult<Vec<u8>> {
        let sc = self
            .serializer_context
            .take()
            .ok_or(ShadingError::InvalidDocument)?;

        Ok(sc.finish().finish())
    }
}
