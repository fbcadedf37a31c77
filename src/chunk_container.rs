use std::collections::HashMap;

use pdf_writer::{Chunk, Pdf, Ref};

use crate::serialize::SerializeContext;

pub(crate) type ChunkContainerFn = fn(&mut ChunkContainer) -> &mut Vec<Chunk>;

/// Collects all chunks that we create while building
/// the PDF and then writes them out in an orderly manner.
#[derive(Default)]
pub(crate) struct ChunkContainer {
    pub(crate) functions: Vec<Chunk>,
    pub(crate) shadings: Vec<Chunk>,
}

impl ChunkContainer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn finish(self, sc: &SerializeContext) -> Pdf {
        let mut remapped_ref = Ref::new(1);
        let mut remapper = HashMap::new();

        // This traverses the chunks in the order that we will write them to
        // the PDF and assigns new references as we go, so that the objects
        // in the final PDF are numbered with monotonically increasing
        // numbers. It also allows us to estimate the capacity we will need
        // for the new PDF.
        let mut chunks_byte_len = 0;
        self.visit(&mut |chunk| {
            for object_ref in chunk.refs() {
                let existing = remapper.insert(object_ref, remapped_ref.bump());
                debug_assert!(existing.is_none());
            }

            chunks_byte_len += chunk.len();
        });

        // The chunk length is not an exact number because the length might
        // change as we renumber, so add a bit of padding to avoid
        // reallocations in the general case.
        let capacity = (chunks_byte_len as f32 * 1.1 + 32.0) as usize;
        let mut pdf = Pdf::with_capacity(capacity);
        sc.serialize_settings().pdf_version.set_version(&mut pdf);

        if sc.serialize_settings().ascii_compatible {
            pdf.set_binary_marker(b"AAAA");
        }

        self.visit(&mut |chunk| {
            chunk.renumber_into(&mut pdf, |old| remapper[&old]);
        });

        pdf
    }

    fn visit(&self, f: &mut impl FnMut(&Chunk)) {
        for chunk in self.functions.iter().chain(self.shadings.iter()) {
            f(chunk);
        }
    }
}
