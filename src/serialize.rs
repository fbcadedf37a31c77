use std::collections::HashMap;

use pdf_writer::{Pdf, Ref};

use crate::chunk_container::ChunkContainer;
use crate::version::PdfVersion;
use crate::Cacheable;

/// Settings that should be applied when creating a PDF document.
#[derive(Copy, Clone, Debug)]
pub struct SerializeSettings {
    /// Whether the file header should carry an ASCII-compatible binary
    /// marker. Note that mesh vertex streams are raw binary data either
    /// way, so this only affects the header.
    pub ascii_compatible: bool,
    /// The PDF version that should be used for export.
    pub pdf_version: PdfVersion,
}

impl Default for SerializeSettings {
    fn default() -> Self {
        Self {
            ascii_compatible: false,
            pdf_version: PdfVersion::Pdf17,
        }
    }
}

/// The mutable state that is needed when writing a PDF file: the chunks
/// that have been produced so far, the reference allocator and the cache
/// of already-serialized objects.
pub(crate) struct SerializeContext {
    /// Keep track of object hashes and their corresponding reference. This
    /// is used for caching, so that for example the same interpolation
    /// function will not be embedded twice in the document.
    cached_mappings: HashMap<u128, Ref>,
    /// The current ref in use. All serializers should use the `new_ref`
    /// method to generate a new Ref, instead of creating one manually.
    cur_ref: Ref,
    /// Collects all chunks that are generated as part of the PDF writing
    /// process.
    chunk_container: ChunkContainer,
    /// Settings used for serialization.
    serialize_settings: SerializeSettings,
}

impl SerializeContext {
    pub(crate) fn new(serialize_settings: SerializeSettings) -> Self {
        Self {
            cached_mappings: HashMap::new(),
            cur_ref: Ref::new(1),
            chunk_container: ChunkContainer::new(),
            serialize_settings,
        }
    }

    pub(crate) fn serialize_settings(&self) -> SerializeSettings {
        self.serialize_settings
    }

    pub(crate) fn new_ref(&mut self) -> Ref {
        self.cur_ref.bump()
    }

    pub(crate) fn register_cacheable<T>(&mut self, object: T) -> Ref
    where
        T: Cacheable,
    {
        let hash = object.sip_hash();

        if let Some(_ref) = self.cached_mappings.get(&hash) {
            *_ref
        } else {
            let root_ref = self.new_ref();
            let chunk_container_fn = object.chunk_container();
            let chunk = object.serialize(self, root_ref);
            self.cached_mappings.insert(hash, root_ref);
            chunk_container_fn(&mut self.chunk_container).push(chunk);
            root_ref
        }
    }

    pub(crate) fn finish(mut self) -> Pdf {
        let chunk_container = std::mem::take(&mut self.chunk_container);
        chunk_container.finish(&self)
    }
}
