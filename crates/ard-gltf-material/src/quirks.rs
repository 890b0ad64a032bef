//! Shaders that need special treatment.
//!
//! Everything keyed on a shader name lives in [`KNOWN_SHADERS`] so the full set of special
//! cases can be read in one place.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ShaderQuirks: u32 {
        /// Always exported as `KHR_materials_unlit`.
        const UNLIT = 1 << 0;
        /// `_Glossiness` actually stores roughness.
        const INVERTED_GLOSSINESS = 1 << 1;
        /// Keeps the metallic factor meaningful when a packed metallic map is enabled. The
        /// metallic-gloss map is already linear and needs no channel conversion.
        const GLTF_PBR = 1 << 2;
        /// Uses `_BumpMap` without enabling a normal map keyword.
        const IMPLICIT_NORMAL_MAP = 1 << 3;
        /// Renders both faces without a cull mode property.
        const DOUBLE_SIDED = 1 << 4;
    }
}

#[derive(Debug, Copy, Clone)]
pub enum ShaderMatch {
    Exact(&'static str),
    Contains(&'static str),
    /// Compares against the lowercased shader name. The pattern must be lowercase.
    ContainsIgnoreCase(&'static str),
    EndsWith(&'static str),
}

#[derive(Debug, Copy, Clone)]
pub struct KnownShader {
    pub pattern: ShaderMatch,
    pub quirks: ShaderQuirks,
}

pub const KNOWN_SHADERS: &[KnownShader] = &[
    KnownShader {
        pattern: ShaderMatch::ContainsIgnoreCase("unlit"),
        quirks: ShaderQuirks::UNLIT,
    },
    KnownShader {
        pattern: ShaderMatch::Exact("Sprites/Default"),
        quirks: ShaderQuirks::UNLIT,
    },
    KnownShader {
        pattern: ShaderMatch::Exact("GLTF/PbrMetallicRoughness"),
        quirks: ShaderQuirks::GLTF_PBR.union(ShaderQuirks::INVERTED_GLOSSINESS),
    },
    KnownShader {
        pattern: ShaderMatch::Exact("glTF/PbrMetallicRoughness"),
        quirks: ShaderQuirks::GLTF_PBR,
    },
    KnownShader {
        pattern: ShaderMatch::Contains("glTF"),
        quirks: ShaderQuirks::IMPLICIT_NORMAL_MAP,
    },
    KnownShader {
        pattern: ShaderMatch::EndsWith("-Double"),
        quirks: ShaderQuirks::DOUBLE_SIDED,
    },
];

impl ShaderMatch {
    pub fn matches(&self, shader: &str) -> bool {
        match *self {
            ShaderMatch::Exact(name) => shader == name,
            ShaderMatch::Contains(part) => shader.contains(part),
            ShaderMatch::ContainsIgnoreCase(part) => shader.to_lowercase().contains(part),
            ShaderMatch::EndsWith(suffix) => shader.ends_with(suffix),
        }
    }
}

/// All quirks that apply to a shader.
pub fn shader_quirks(shader: &str) -> ShaderQuirks {
    KNOWN_SHADERS
        .iter()
        .filter(|known| known.pattern.matches(shader))
        .fold(ShaderQuirks::empty(), |acc, known| acc | known.quirks)
}
