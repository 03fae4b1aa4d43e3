//! Color types and the packed 32-bit pixel layout.
//!
//! Pixels are stored packed as `0xAABBGGRR`: red in the low byte, then
//! green, then blue, with alpha in the high byte. Serialization to a
//! 3-channel stream takes the three low bytes in that order, so the packed
//! layout and the encoder's RGB order always agree.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::from_packed(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self::from_packed(0xFFFF_FFFF);
    /// Opaque red.
    pub const RED: Self = Self::from_packed(0xFF00_00FF);
    /// Opaque green.
    pub const GREEN: Self = Self::from_packed(0xFF00_FF00);
    /// Opaque blue.
    pub const BLUE: Self = Self::from_packed(0xFFFF_0000);
    /// Purple used for scatter dots.
    pub const PURPLE: Self = Self::from_packed(0xFFFF_00AF);
    /// Light grey used for the canvas background.
    pub const GREY: Self = Self::from_packed(0xFFA0_A0A0);
    /// Dark grey used for grid lines.
    pub const DARK_GREY: Self = Self::from_packed(0xFF50_5050);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Unpack a `0xAABBGGRR` value.
    #[must_use]
    pub const fn from_packed(packed: u32) -> Self {
        Self::new(
            (packed & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 24) & 0xFF) as u8,
        )
    }

    /// Pack into `0xAABBGGRR`.
    #[must_use]
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16) | ((self.a as u32) << 24)
    }

    /// The three color channels in encoder order.
    #[must_use]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<u32> for Rgba {
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.to_packed()
    }
}
