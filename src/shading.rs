//! Gradient and mesh shadings.
//!
//! A [`Shading`] is either a gradient (axial or radial, described by its
//! geometry and an interpolation function) or a free-form triangle mesh,
//! whose geometry arrives per-vertex: every call to [`Shading::add_vertex`]
//! quantizes a position against the coordinate bounds fixed at creation
//! and appends one binary record to the shading's vertex stream.
//!
//! The vertex record layout is a fixed external contract with consuming
//! renderers: a 1-byte edge flag, the quantized X and Y position as 4-byte
//! big-endian unsigned integers and one byte per RGB color component, 12
//! bytes in total.

use std::hash::{Hash, Hasher};

use pdf_writer::types::FunctionShadingType;
use pdf_writer::writers::StreamShadingType;
use pdf_writer::{Chunk, Finish, Ref};

use crate::chunk_container::ChunkContainerFn;
use crate::color::{self, rgb, ColorSpaceType};
use crate::error::{ShadingError, ShadingResult};
use crate::function::ExponentialFunction;
use crate::geom::{Circle, Point};
use crate::serialize::SerializeContext;
use crate::Cacheable;

/// The length of one encoded vertex record.
const VERTEX_RECORD_LEN: usize = 12;

const BITS_PER_COORDINATE: i32 = 32;
const BITS_PER_COMPONENT: i32 = 8;
const BITS_PER_FLAG: i32 = 8;

/// The coordinate bounds that vertex positions are quantized against.
///
/// The bounds are fixed when a mesh shading is created and are not
/// validated: a degenerate range (`x_min >= x_max`) is accepted and
/// encodes every position on that axis as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeRange {
    /// The lower bound of the x axis.
    pub x_min: f32,
    /// The upper bound of the x axis.
    pub x_max: f32,
    /// The lower bound of the y axis.
    pub y_min: f32,
    /// The upper bound of the y axis.
    pub y_max: f32,
}

impl DecodeRange {
    /// Create a new decode range.
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

impl Eq for DecodeRange {}

impl Hash for DecodeRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x_min.to_bits().hash(state);
        self.x_max.to_bits().hash(state);
        self.y_min.to_bits().hash(state);
        self.y_max.to_bits().hash(state);
    }
}

/// Classifies how a vertex connects to the previous triangle.
///
/// The sequencing of edge flags is a contract between the producer of the
/// mesh and the consuming renderer; it is not validated here.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum EdgeFlag {
    /// Start a new triangle. The following two vertices complete it.
    Start = 0,
    /// Form a triangle with the second and third vertex of the previous
    /// triangle.
    ContinueBc = 1,
    /// Form a triangle with the first and third vertex of the previous
    /// triangle.
    ContinueAc = 2,
}

/// The kind of a mesh shading.
///
/// Only [`MeshShadingType::FreeForm`] is currently supported end-to-end;
/// the remaining kinds exist so that callers can request them, but they
/// are rejected when constructing a shading.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum MeshShadingType {
    /// A free-form triangle mesh (shading type 4).
    FreeForm,
    /// A lattice-form triangle mesh (shading type 5).
    Lattice,
    /// A Coons patch mesh (shading type 6).
    CoonsPatch,
    /// A tensor-product patch mesh (shading type 7).
    TensorProductPatch,
}

#[derive(Debug, PartialEq, Clone)]
struct GradientRepr {
    shading_type: FunctionShadingType,
    coords: Vec<f32>,
    function: ExponentialFunction,
}

impl Eq for GradientRepr {}

impl Hash for GradientRepr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shading_type.hash(state);

        for el in &self.coords {
            el.to_bits().hash(state);
        }

        self.function.hash(state);
    }
}

#[derive(Debug, Hash, Eq, PartialEq, Clone)]
struct MeshRepr {
    color_space: ColorSpaceType,
    decode: DecodeRange,
    vertex_data: Vec<u8>,
}

#[derive(Debug, Hash, Eq, PartialEq, Clone)]
enum Repr {
    Gradient(GradientRepr),
    Mesh(MeshRepr),
}

/// A gradient or mesh shading.
///
/// Build one with [`Shading::axial`], [`Shading::radial`] or
/// [`Shading::free_form_mesh`], fill mesh shadings with vertices, and
/// then register the finished shading with
/// [`Document::add_shading`](crate::Document::add_shading).
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Shading(Repr);

impl Shading {
    /// Create an axial gradient shading (shading type 2) along the line
    /// from `a` to `b`.
    ///
    /// `c0` and `c1` are the boundary colors, each component in 0..=1,
    /// and `n` the interpolation exponent, which must be greater than
    /// zero. The function domain is fixed to [0, 1].
    pub fn axial(a: Point, b: Point, c0: [f32; 3], c1: [f32; 3], n: f32) -> ShadingResult<Self> {
        let function = ExponentialFunction::new(c0, c1, n)?;

        Ok(Self(Repr::Gradient(GradientRepr {
            shading_type: FunctionShadingType::Axial,
            coords: vec![a.x, a.y, b.x, b.y],
            function,
        })))
    }

    /// Create a radial gradient shading (shading type 3) between the two
    /// circles `a` and `b`.
    ///
    /// Takes the same color and exponent parameters as [`Shading::axial`].
    pub fn radial(a: Circle, b: Circle, c0: [f32; 3], c1: [f32; 3], n: f32) -> ShadingResult<Self> {
        let function = ExponentialFunction::new(c0, c1, n)?;

        Ok(Self(Repr::Gradient(GradientRepr {
            shading_type: FunctionShadingType::Radial,
            coords: vec![a.x, a.y, a.radius, b.x, b.y, b.radius],
            function,
        })))
    }

    /// Create a free-form triangle mesh shading (shading type 4) in
    /// device RGB.
    ///
    /// `decode` fixes the coordinate bounds that all subsequently appended
    /// vertices are quantized against.
    pub fn free_form_mesh(decode: DecodeRange) -> Self {
        Self(Repr::Mesh(MeshRepr {
            color_space: ColorSpaceType::DeviceRgb,
            decode,
            vertex_data: vec![],
        }))
    }

    /// Create a mesh shading of the given kind and color space.
    ///
    /// This exists for forward compatibility: only free-form meshes in
    /// device RGB are currently accepted, everything else is rejected at
    /// this boundary instead of producing a shading whose vertex stream
    /// could not be encoded.
    pub fn mesh(
        kind: MeshShadingType,
        color_space: ColorSpaceType,
        decode: DecodeRange,
    ) -> ShadingResult<Self> {
        if kind != MeshShadingType::FreeForm {
            return Err(ShadingError::InvalidShadingType(kind));
        }

        if color_space != ColorSpaceType::DeviceRgb {
            return Err(ShadingError::InvalidColorSpace(color_space));
        }

        Ok(Self::free_form_mesh(decode))
    }

    /// The coordinate bounds this shading quantizes vertex positions
    /// against.
    ///
    /// Fails with [`ShadingError::InvalidObject`] for gradient shadings,
    /// which carry no decode metadata.
    pub fn decode_range(&self) -> ShadingResult<DecodeRange> {
        match &self.0 {
            Repr::Mesh(mesh) => Ok(mesh.decode),
            Repr::Gradient(_) => Err(ShadingError::InvalidObject),
        }
    }

    /// The encoded vertex stream of a mesh shading.
    ///
    /// Gradient shadings have no vertex stream and return an empty slice.
    pub fn vertex_data(&self) -> &[u8] {
        match &self.0 {
            Repr::Mesh(mesh) => &mesh.vertex_data,
            Repr::Gradient(_) => &[],
        }
    }

    /// Append a vertex with a pre-quantized 8-bit color.
    ///
    /// The position is quantized against the decode range fixed at
    /// creation; positions outside of it are clamped to the range ends.
    /// On success, the vertex stream grows by exactly one 12-byte record.
    /// Fails with [`ShadingError::InvalidObject`] if the shading is not a
    /// mesh, in which case no data is written.
    pub fn add_vertex(&mut self, flag: EdgeFlag, p: Point, color: rgb::Color) -> ShadingResult<()> {
        let mesh = self.mesh_mut()?;

        let record = vertex_record(
            flag,
            encode_coordinate(p.x, mesh.decode.x_min, mesh.decode.x_max),
            encode_coordinate(p.y, mesh.decode.y_min, mesh.decode.y_max),
            [color.red(), color.green(), color.blue()],
        );
        mesh.vertex_data.extend_from_slice(&record);

        Ok(())
    }

    /// Append a vertex with a normalized floating-point color.
    ///
    /// Each color component must be in 0..=1 and is mapped to 8 bits by
    /// rounding; everything else works like [`Shading::add_vertex`].
    pub fn add_vertex_normalized(
        &mut self,
        flag: EdgeFlag,
        p: Point,
        color: [f32; 3],
    ) -> ShadingResult<()> {
        // Validate all components up front so that a failed call leaves
        // the vertex stream untouched.
        let mut quantized = [0u8; 3];
        for (slot, component) in quantized.iter_mut().zip(color) {
            if !(0.0..=1.0).contains(&component) {
                return Err(ShadingError::ComponentOutOfRange(component));
            }

            *slot = (component * 255.0).round() as u8;
        }

        self.add_vertex(
            flag,
            p,
            rgb::Color::new(quantized[0], quantized[1], quantized[2]),
        )
    }

    fn mesh_mut(&mut self) -> ShadingResult<&mut MeshRepr> {
        match &mut self.0 {
            Repr::Mesh(mesh) => Ok(mesh),
            Repr::Gradient(_) => Err(ShadingError::InvalidObject),
        }
    }
}

/// Linearly map a position into the 32-bit coordinate range declared by
/// `min` and `max`.
///
/// The normalized position is clamped into 0..=1, so out-of-range
/// positions saturate at the range ends instead of wrapping around.
fn encode_coordinate(v: f32, min: f32, max: f32) -> u32 {
    // Degenerate and reversed ranges encode every position as zero. Also
    // catches non-finite bounds.
    if !(max > min) {
        return 0;
    }

    let norm = (f64::from(v) - f64::from(min)) / (f64::from(max) - f64::from(min));
    (norm.clamp(0.0, 1.0) * f64::from(u32::MAX)).round() as u32
}

/// Assemble one vertex record in a local buffer, so that it can be
/// appended to the stream in a single write.
///
/// Multi-byte fields are big-endian regardless of host byte order.
fn vertex_record(flag: EdgeFlag, x: u32, y: u32, rgb: [u8; 3]) -> [u8; VERTEX_RECORD_LEN] {
    let mut record = [0; VERTEX_RECORD_LEN];
    record[0] = flag as u8;
    record[1..5].copy_from_slice(&x.to_be_bytes());
    record[5..9].copy_from_slice(&y.to_be_bytes());
    record[9..].copy_from_slice(&rgb);
    record
}

/// The Decode array: the coordinate bounds, followed by a 0..1 range for
/// each of the three color components.
fn decode_array(decode: DecodeRange) -> [f32; 10] {
    [
        decode.x_min,
        decode.x_max,
        decode.y_min,
        decode.y_max,
        0.0,
        1.0,
        0.0,
        1.0,
        0.0,
        1.0,
    ]
}

impl Cacheable for Shading {
    fn chunk_container(&self) -> ChunkContainerFn {
        |cc| &mut cc.shadings
    }

    fn serialize(self, sc: &mut SerializeContext, root_ref: Ref) -> Chunk {
        let mut chunk = Chunk::new();

        match self.0 {
            Repr::Gradient(gradient) => {
                let function_ref = sc.register_cacheable(gradient.function.clone());

                let mut shading = chunk.function_shading(root_ref);
                shading.shading_type(gradient.shading_type);
                color::set_colorspace(ColorSpaceType::DeviceRgb, &mut shading);
                shading.coords(gradient.coords.iter().copied());
                shading.function(function_ref);
                shading.finish();
            }
            Repr::Mesh(mesh) => {
                let mut shading = chunk.stream_shading(root_ref, &mesh.vertex_data);
                shading.shading_type(StreamShadingType::FreeformGouraud);
                color::set_colorspace(mesh.color_space, &mut shading);
                shading.bits_per_coordinate(BITS_PER_COORDINATE);
                shading.bits_per_component(BITS_PER_COMPONENT);
                shading.bits_per_flag(BITS_PER_FLAG);
                shading.decode(decode_array(mesh.decode));
                shading.finish();
            }
        }

        chunk
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::geom::{Circle, Point};

    fn unit_mesh() -> Shading {
        Shading::free_form_mesh(DecodeRange::new(0.0, 1.0, 0.0, 1.0))
    }

    #[test]
    fn coordinate_endpoints() {
        assert_eq!(encode_coordinate(10.0, 10.0, 20.0), 0);
        assert_eq!(encode_coordinate(20.0, 10.0, 20.0), u32::MAX);
    }

    #[test]
    fn coordinate_monotonicity() {
        let mut last = 0;

        for i in 0..=100 {
            let x = i as f32 / 100.0;
            let encoded = encode_coordinate(x, 0.0, 1.0);
            assert!(encoded >= last);
            last = encoded;
        }
    }

    #[test]
    fn coordinate_quantization_roundtrip() {
        for x in [0.0f32, 0.125, 0.33, 0.5, 0.77, 1.0] {
            let encoded = encode_coordinate(x, 0.0, 1.0);
            let decoded = f64::from(encoded) / f64::from(u32::MAX);
            assert_approx_eq!(f64, decoded, f64::from(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn coordinate_clamping() {
        assert_eq!(encode_coordinate(-5.0, 0.0, 1.0), 0);
        assert_eq!(encode_coordinate(5.0, 0.0, 1.0), u32::MAX);
    }

    #[test]
    fn coordinate_degenerate_range() {
        assert_eq!(encode_coordinate(1.0, 1.0, 1.0), 0);
        assert_eq!(encode_coordinate(3.0, 1.0, 1.0), 0);
        assert_eq!(encode_coordinate(0.0, 1.0, 1.0), 0);
        // A reversed range is degenerate as well.
        assert_eq!(encode_coordinate(0.5, 1.0, 0.0), 0);
    }

    #[test]
    fn vertex_record_layout() {
        let record = vertex_record(EdgeFlag::ContinueBc, 0x01020304, 0xFFFFFFFF, [7, 8, 9]);
        assert_eq!(
            record,
            [1, 0x01, 0x02, 0x03, 0x04, 0xFF, 0xFF, 0xFF, 0xFF, 7, 8, 9]
        );
    }

    #[test]
    fn stream_grows_by_record_len() {
        let mut mesh = unit_mesh();

        for i in 0..5 {
            let flag = if i % 3 == 0 {
                EdgeFlag::Start
            } else {
                EdgeFlag::ContinueBc
            };
            mesh.add_vertex(flag, Point::from_xy(0.5, 0.5), rgb::Color::black())
                .unwrap();
            assert_eq!(mesh.vertex_data().len(), (i + 1) * VERTEX_RECORD_LEN);
        }
    }

    #[test]
    fn full_scale_coordinate_bytes() {
        let mut mesh = unit_mesh();
        mesh.add_vertex(EdgeFlag::Start, Point::from_xy(1.0, 0.0), rgb::Color::white())
            .unwrap();

        assert_eq!(
            mesh.vertex_data(),
            [0, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 255, 255, 255]
        );
    }

    #[test]
    fn normalized_color_roundtrip() {
        let mut mesh = unit_mesh();

        for (i, c) in [0.0f32, 0.25, 0.5, 0.75, 1.0].into_iter().enumerate() {
            mesh.add_vertex_normalized(EdgeFlag::Start, Point::from_xy(0.0, 0.0), [c, c, c])
                .unwrap();

            let record = &mesh.vertex_data()[i * VERTEX_RECORD_LEN..(i + 1) * VERTEX_RECORD_LEN];
            let expected = (c * 255.0).round() as u8;
            assert_eq!(&record[9..], [expected; 3]);
        }
    }

    #[test]
    fn normalized_color_out_of_range() {
        let mut mesh = unit_mesh();
        let result =
            mesh.add_vertex_normalized(EdgeFlag::Start, Point::from_xy(0.0, 0.0), [0.0, 1.5, 0.0]);

        assert_eq!(result, Err(ShadingError::ComponentOutOfRange(1.5)));
        assert!(mesh.vertex_data().is_empty());
    }

    #[test]
    fn vertex_append_on_gradient() {
        let mut axial = Shading::axial(
            Point::from_xy(0.0, 0.0),
            Point::from_xy(1.0, 0.0),
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            1.0,
        )
        .unwrap();

        let result = axial.add_vertex(EdgeFlag::Start, Point::from_xy(0.0, 0.0), rgb::Color::black());
        assert_eq!(result, Err(ShadingError::InvalidObject));
        assert!(axial.vertex_data().is_empty());
    }

    #[test]
    fn decode_range_accessor() {
        let decode = DecodeRange::new(-1.0, 1.0, -2.0, 2.0);
        assert_eq!(Shading::free_form_mesh(decode).decode_range(), Ok(decode));

        let axial = Shading::axial(
            Point::from_xy(0.0, 0.0),
            Point::from_xy(1.0, 0.0),
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            1.0,
        )
        .unwrap();
        assert_eq!(axial.decode_range(), Err(ShadingError::InvalidObject));
    }

    #[test]
    fn axial_component_out_of_range() {
        let result = Shading::axial(
            Point::from_xy(0.0, 0.0),
            Point::from_xy(1.0, 0.0),
            [0.0, 0.0, 1.5],
            [1.0, 1.0, 1.0],
            1.0,
        );

        assert_eq!(result, Err(ShadingError::ComponentOutOfRange(1.5)));
    }

    #[test]
    fn radial_zero_exponent() {
        let result = Shading::radial(
            Circle::new(0.0, 0.0, 1.0),
            Circle::new(0.0, 0.0, 5.0),
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            0.0,
        );

        assert_eq!(result, Err(ShadingError::InvalidParameter(0.0)));
    }

    #[test]
    fn unsupported_mesh_kinds() {
        let decode = DecodeRange::new(0.0, 1.0, 0.0, 1.0);

        assert_eq!(
            Shading::mesh(MeshShadingType::CoonsPatch, ColorSpaceType::DeviceRgb, decode),
            Err(ShadingError::InvalidShadingType(MeshShadingType::CoonsPatch))
        );
        assert_eq!(
            Shading::mesh(MeshShadingType::FreeForm, ColorSpaceType::DeviceCmyk, decode),
            Err(ShadingError::InvalidColorSpace(ColorSpaceType::DeviceCmyk))
        );
        assert!(Shading::mesh(
            MeshShadingType::FreeForm,
            ColorSpaceType::DeviceRgb,
            decode
        )
        .is_ok());
    }
}
