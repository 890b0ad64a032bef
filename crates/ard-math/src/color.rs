//! Color helpers. Colors are `Vec4` in RGBA order.

use glam::{Vec3, Vec4};

/// Converts a single sRGB encoded channel into linear space.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a single linear channel into sRGB encoding.
#[inline]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub trait ColorExt {
    /// Converts the RGB channels from sRGB to linear. Alpha is left untouched.
    fn to_linear(self) -> Self;

    /// Converts the RGB channels from linear to sRGB. Alpha is left untouched.
    fn to_srgb(self) -> Self;

    /// The largest of the RGB channels.
    fn max_rgb(self) -> f32;

    /// Unweighted average of the RGB channels.
    fn rgb_mean(self) -> f32;
}

impl ColorExt for Vec4 {
    #[inline]
    fn to_linear(self) -> Self {
        Vec4::new(
            srgb_to_linear(self.x),
            srgb_to_linear(self.y),
            srgb_to_linear(self.z),
            self.w,
        )
    }

    #[inline]
    fn to_srgb(self) -> Self {
        Vec4::new(
            linear_to_srgb(self.x),
            linear_to_srgb(self.y),
            linear_to_srgb(self.z),
            self.w,
        )
    }

    #[inline]
    fn max_rgb(self) -> f32 {
        self.truncate().max_element()
    }

    #[inline]
    fn rgb_mean(self) -> f32 {
        (self.x + self.y + self.z) / 3.0
    }
}

impl ColorExt for Vec3 {
    #[inline]
    fn to_linear(self) -> Self {
        Vec3::new(
            srgb_to_linear(self.x),
            srgb_to_linear(self.y),
            srgb_to_linear(self.z),
        )
    }

    #[inline]
    fn to_srgb(self) -> Self {
        Vec3::new(
            linear_to_srgb(self.x),
            linear_to_srgb(self.y),
            linear_to_srgb(self.z),
        )
    }

    #[inline]
    fn max_rgb(self) -> f32 {
        self.max_element()
    }

    #[inline]
    fn rgb_mean(self) -> f32 {
        (self.x + self.y + self.z) / 3.0
    }
}
