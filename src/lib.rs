/*!
A crate for writing PDF gradient and mesh shadings.

umbra builds on top of the [pdf-writer] crate and provides high-level
primitives for the three shading kinds that PDF renderers consume most
often: axial gradients (shading type 2), radial gradients (shading type 3)
and free-form Gouraud triangle meshes (shading type 4). Gradients are
described declaratively by their geometry and an exponential interpolation
function; mesh shadings are filled vertex by vertex, with every position
quantized into a byte-exact, big-endian binary record.

# Example

The following example creates a document with one axial gradient and one
triangle mesh and writes it out as a PDF file.

```
use umbra::color::rgb;
use umbra::geom::Point;
use umbra::shading::{DecodeRange, EdgeFlag, Shading};
use umbra::Document;

let mut document = Document::new();

// A black-to-white gradient along a horizontal line.
let axial = Shading::axial(
    Point::from_xy(0.0, 0.0),
    Point::from_xy(100.0, 0.0),
    [0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
    1.0,
)
.unwrap();

// A single triangle with one red, one green and one blue corner. The
// decode range fixes the bounds that vertex positions are quantized
// against.
let mut mesh = Shading::free_form_mesh(DecodeRange::new(0.0, 100.0, 0.0, 100.0));
mesh.add_vertex(EdgeFlag::Start, Point::from_xy(0.0, 0.0), rgb::Color::new(255, 0, 0))
    .unwrap();
mesh.add_vertex(EdgeFlag::Start, Point::from_xy(100.0, 0.0), rgb::Color::new(0, 255, 0))
    .unwrap();
mesh.add_vertex(EdgeFlag::Start, Point::from_xy(50.0, 100.0), rgb::Color::new(0, 0, 255))
    .unwrap();

document.add_shading(axial).unwrap();
document.add_shading(mesh).unwrap();
let pdf = document.finish().unwrap();
# assert!(!pdf.is_empty());
```

[pdf-writer]: https://github.com/typst/pdf-writer
*/

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod chunk_container;
mod function;
mod serialize;
mod util;
mod version;

pub mod color;
pub mod document;
pub mod error;
pub mod geom;
pub mod shading;

use pdf_writer::{Chunk, Ref};

pub use document::Document;
pub use serialize::SerializeSettings;
pub use version::PdfVersion;

use crate::chunk_container::ChunkContainerFn;
use crate::serialize::SerializeContext;
use crate::util::SipHashable;

pub(crate) trait Cacheable: SipHashable {
    fn chunk_container(&self) -> ChunkContainerFn;
    fn serialize(self, sc: &mut SerializeContext, root_ref: Ref) -> Chunk;
}
