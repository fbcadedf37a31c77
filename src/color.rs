//! Dealing with colors and color spaces.
//!
//! Shadings are defined in a device-dependent color space. Device RGB is
//! the only space that is supported end-to-end: the gray and CMYK spaces
//! exist as tags so that callers can request them, but they are rejected
//! at the construction boundary instead of producing a shading whose
//! vertex stream could not be encoded.

use pdf_writer::{Dict, Name};

use crate::util::NameExt;

/// The PDF name for the device RGB color space.
pub(crate) const DEVICE_RGB: &str = "DeviceRGB";
/// The PDF name for the device gray color space.
pub(crate) const DEVICE_GRAY: &str = "DeviceGray";
/// The PDF name for the device CMYK color space.
pub(crate) const DEVICE_CMYK: &str = "DeviceCMYK";

/// The device color space a shading is defined in.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum ColorSpaceType {
    /// The device RGB color space.
    DeviceRgb,
    /// The device gray color space.
    DeviceGray,
    /// The device CMYK color space.
    DeviceCmyk,
}

impl ColorSpaceType {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            ColorSpaceType::DeviceRgb => DEVICE_RGB,
            ColorSpaceType::DeviceGray => DEVICE_GRAY,
            ColorSpaceType::DeviceCmyk => DEVICE_CMYK,
        }
    }
}

pub(crate) fn set_colorspace(cs: ColorSpaceType, target: &mut Dict) {
    target
        .insert(Name(b"ColorSpace"))
        .primitive(cs.name().to_pdf_name());
}

/// RGB colors.
pub mod rgb {
    /// An RGB color with 8 bits per component.
    #[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
    pub struct Color(pub(crate) u8, pub(crate) u8, pub(crate) u8);

    impl Default for Color {
        fn default() -> Self {
            Color::black()
        }
    }

    impl Color {
        /// Create a new RGB color.
        pub fn new(red: u8, green: u8, blue: u8) -> Self {
            Color(red, green, blue)
        }

        /// Create a black RGB color.
        pub fn black() -> Self {
            Self::new(0, 0, 0)
        }

        /// Create a white RGB color.
        pub fn white() -> Self {
            Self::new(255, 255, 255)
        }

        /// The `red` component of the color.
        pub fn red(&self) -> u8 {
            self.0
        }

        /// The `green` component of the color.
        pub fn green(&self) -> u8 {
            self.1
        }

        /// The `blue` component of the color.
        pub fn blue(&self) -> u8 {
            self.2
        }
    }
}
