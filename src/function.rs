//! Interpolation functions for gradient shadings.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use pdf_writer::{Chunk, Finish, Ref};

use crate::chunk_container::ChunkContainerFn;
use crate::error::{ShadingError, ShadingResult};
use crate::geom::NormalizedF32;
use crate::serialize::SerializeContext;
use crate::Cacheable;

#[derive(Debug, PartialEq, Clone)]
struct Repr {
    c0: [NormalizedF32; 3],
    c1: [NormalizedF32; 3],
    n: f32,
}

impl Eq for Repr {}

impl Hash for Repr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.c0.hash(state);
        self.c1.hash(state);
        self.n.to_bits().hash(state);
    }
}

/// An exponential interpolation function (function type 2) between two
/// boundary colors, with its domain fixed to [0, 1].
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) struct ExponentialFunction(Arc<Repr>);

impl ExponentialFunction {
    /// Create a new exponential interpolation function.
    ///
    /// Validation is fail-fast: the first out-of-range color component or
    /// a non-positive exponent aborts the construction before anything is
    /// built.
    pub(crate) fn new(c0: [f32; 3], c1: [f32; 3], n: f32) -> ShadingResult<Self> {
        let c0 = normalized(c0)?;
        let c1 = normalized(c1)?;

        if !n.is_finite() || n <= 0.0 {
            return Err(ShadingError::InvalidParameter(n));
        }

        Ok(Self(Arc::new(Repr { c0, c1, n })))
    }
}

fn normalized(components: [f32; 3]) -> ShadingResult<[NormalizedF32; 3]> {
    let mut out = [NormalizedF32::ZERO; 3];

    for (slot, component) in out.iter_mut().zip(components) {
        *slot = NormalizedF32::new(component)
            .ok_or(ShadingError::ComponentOutOfRange(component))?;
    }

    Ok(out)
}

impl Cacheable for ExponentialFunction {
    fn chunk_container(&self) -> ChunkContainerFn {
        |cc| &mut cc.functions
    }

    fn serialize(self, _: &mut SerializeContext, root_ref: Ref) -> Chunk {
        let mut chunk = Chunk::new();

        let mut exp = chunk.exponential_function(root_ref);
        exp.domain([0.0, 1.0]);
        exp.range([0.0, 1.0].repeat(3));
        exp.c0(self.0.c0.iter().map(|c| c.get()));
        exp.c1(self.0.c1.iter().map(|c| c.get()));
        exp.n(self.0.n);
        exp.finish();

        chunk
    }
}
