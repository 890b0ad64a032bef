use ard_math::{color::ColorExt, Vec3};

/// Largest byte value a decomposed channel may take. Leaves headroom above it the way image
/// editors do for overexposed colors.
pub const MAX_BYTE_FOR_OVEREXPOSED_COLOR: f32 = 191.0;

/// An HDR color split into a displayable color and an intensity multiplier.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HdrDecomposition {
    pub color: Vec3,
    pub intensity: f32,
}

/// Splits an HDR color so that `color * intensity` reproduces it while `color` stays within
/// `[0, 191/255]`.
pub fn decompose_hdr(hdr: Vec3) -> HdrDecomposition {
    let max = hdr.max_rgb();
    if max == 0.0 {
        return HdrDecomposition {
            color: hdr,
            intensity: 1.0,
        };
    }

    let scale = MAX_BYTE_FOR_OVEREXPOSED_COLOR / max;
    let color = (hdr * scale).min(Vec3::splat(MAX_BYTE_FOR_OVEREXPOSED_COLOR)) / 255.0;

    HdrDecomposition {
        color,
        intensity: 255.0 / scale,
    }
}

/// Emissive output after deciding between `KHR_materials_emissive_strength` and clamping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Emission {
    pub factor: [f32; 3],
    /// Set when the strength extension should be written.
    pub strength: Option<f32>,
}

impl HdrDecomposition {
    /// Intensities above 1 become an emissive strength if allowed. Otherwise the color is
    /// multiplied back and clamped into the factor, losing anything brighter than 1.
    pub fn into_emission(self, allow_strength: bool) -> Emission {
        if self.intensity > 1.0 && allow_strength {
            Emission {
                factor: self.color.to_array(),
                strength: Some(self.intensity),
            }
        } else {
            let factor = (self.color * self.intensity).clamp(Vec3::ZERO, Vec3::ONE);
            Emission {
                factor: factor.to_array(),
                strength: None,
            }
        }
    }
}
