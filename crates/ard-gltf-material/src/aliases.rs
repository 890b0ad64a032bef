//! Property alias tables.
//!
//! Each group lists the property names different shaders use for one semantic channel. Order
//! is priority: the resolver takes the first name the material declares.

use std::marker::PhantomData;

use ard_math::Vec4;

use crate::material::{PropertyType, SourceMaterial, TextureRef};

/// The value kind an alias group resolves to.
pub trait PropertyKind {
    type Value;

    /// If a property of the given type can be read as this kind.
    fn accepts(ty: PropertyType) -> bool;

    fn read(material: &dyn SourceMaterial, name: &str) -> Option<Self::Value>;
}

pub struct FloatProperty;

pub struct ColorProperty;

/// Integers are also read from float properties since many shaders declare enums as floats.
pub struct IntProperty;

/// Texture slots resolve even when nothing is assigned to them.
pub struct TextureProperty;

/// Matches any declared property. Used for existence probes over mixed groups.
pub struct AnyProperty;

#[derive(Debug)]
pub struct AliasGroup<K> {
    names: &'static [&'static str],
    _kind: PhantomData<fn() -> K>,
}

impl<K> AliasGroup<K> {
    pub const fn new(names: &'static [&'static str]) -> Self {
        assert!(!names.is_empty(), "alias groups must not be empty");
        Self {
            names,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

impl<K> Clone for AliasGroup<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for AliasGroup<K> {}

impl PropertyKind for FloatProperty {
    type Value = f32;

    #[inline]
    fn accepts(ty: PropertyType) -> bool {
        ty == PropertyType::Float
    }

    #[inline]
    fn read(material: &dyn SourceMaterial, name: &str) -> Option<f32> {
        material.float(name)
    }
}

impl PropertyKind for ColorProperty {
    type Value = Vec4;

    #[inline]
    fn accepts(ty: PropertyType) -> bool {
        ty == PropertyType::Color
    }

    #[inline]
    fn read(material: &dyn SourceMaterial, name: &str) -> Option<Vec4> {
        material.color(name)
    }
}

impl PropertyKind for IntProperty {
    type Value = i32;

    #[inline]
    fn accepts(ty: PropertyType) -> bool {
        matches!(ty, PropertyType::Int | PropertyType::Float)
    }

    #[inline]
    fn read(material: &dyn SourceMaterial, name: &str) -> Option<i32> {
        material.int(name)
    }
}

impl PropertyKind for TextureProperty {
    type Value = Option<TextureRef>;

    #[inline]
    fn accepts(ty: PropertyType) -> bool {
        ty == PropertyType::Texture
    }

    #[inline]
    fn read(material: &dyn SourceMaterial, name: &str) -> Option<Option<TextureRef>> {
        Some(material.texture(name))
    }
}

impl PropertyKind for AnyProperty {
    type Value = PropertyType;

    #[inline]
    fn accepts(_: PropertyType) -> bool {
        true
    }

    #[inline]
    fn read(material: &dyn SourceMaterial, name: &str) -> Option<PropertyType> {
        material.property_type(name)
    }
}

/// Any of these marks a metallic-roughness style shader.
pub const PBR_METALLIC_ROUGHNESS: AliasGroup<AnyProperty> = AliasGroup::new(&[
    "metallicFactor",
    "roughnessFactor",
    "metallicRoughnessTexture",
    "_MetallicFactor",
    "_RoughnessFactor",
    "_MetallicRoughnessTexture",
    "_MetallicGlossMap",
    "_Glossiness",
    "_Metallic",
    "_Roughness",
    "_Smoothness",
]);

pub const PBR_SPECULAR_GLOSSINESS: AliasGroup<AnyProperty> =
    AliasGroup::new(&["_SpecColor", "_SpecGlossMap"]);

pub const COMMON_CONSTANT: AliasGroup<AnyProperty> =
    AliasGroup::new(&["_AmbientFactor", "_LightMap", "_LightFactor"]);

pub const ALPHA_CUTOFF: AliasGroup<FloatProperty> =
    AliasGroup::new(&["alphaCutoff", "_AlphaCutoff", "_Cutoff", "AlphaCutOff"]);

pub const CULL_MODE: AliasGroup<IntProperty> =
    AliasGroup::new(&["_Cull", "_CullMode", "_CullModeForward"]);

pub const NORMAL_SCALE: AliasGroup<FloatProperty> = AliasGroup::new(&[
    "normalScale",
    "_NormalScale",
    "_BumpScale",
    "normalTextureScale",
]);

pub const NORMAL_TEXTURE: AliasGroup<TextureProperty> = AliasGroup::new(&[
    "normalTexture",
    "_NormalTexture",
    "_NormalMap",
    "_BumpMap",
    "_NormalTex",
    "_NormalMapTexture",
    "_NormalMapTex",
]);

/// Keywords, not properties. Any of them enables emission.
pub const EMISSION_KEYWORDS: &[&str] = &["_EMISSION", "_Emission", "EMISSION", "Emission"];

pub const EMISSION_COLOR: AliasGroup<ColorProperty> = AliasGroup::new(&[
    "emissiveFactor",
    "_EmissiveFactor",
    "_EmissionColor",
    "_EmissiveColor",
]);

pub const EMISSIVE_TEXTURE: AliasGroup<TextureProperty> = AliasGroup::new(&[
    "emissiveTexture",
    "_EmissiveTexture",
    "_EmissiveColorMap",
    "_EmissionMap",
    "_EmissiveMap",
]);

pub const OCCLUSION_STRENGTH: AliasGroup<FloatProperty> = AliasGroup::new(&[
    "occlusionStrength",
    "_OcclusionStrength",
    "occlusionTextureStrength",
]);

pub const OCCLUSION_TEXTURE: AliasGroup<TextureProperty> = AliasGroup::new(&[
    "occlusionTexture",
    "_OcclusionTexture",
    "_OcclusionMap",
    "_MaskMap",
]);

pub const OCCLUSION_TEX_COORD: AliasGroup<FloatProperty> =
    AliasGroup::new(&["occlusionTextureTexCoord", "_OcclusionTextureTexCoord"]);

pub const METALLIC_FACTOR: AliasGroup<FloatProperty> =
    AliasGroup::new(&["metallicFactor", "_MetallicFactor", "_Metallic"]);

/// Textures already in glTF metallic-roughness layout.
pub const METALLIC_ROUGHNESS_TEXTURE: AliasGroup<TextureProperty> = AliasGroup::new(&[
    "metallicRoughnessTexture",
    "_MetallicRoughnessTexture",
    "_MetallicRoughnessMap",
    "_MetallicRoughnessTex",
]);

/// Metallic in R, smoothness in A.
pub const METALLIC_GLOSS_TEXTURE: AliasGroup<TextureProperty> =
    AliasGroup::new(&["_MetallicGlossMap"]);

/// Metallic in R, occlusion in G, smoothness in A.
pub const MASK_TEXTURE: AliasGroup<TextureProperty> = AliasGroup::new(&["_MaskMap"]);

pub const SMOOTHNESS_FACTOR: AliasGroup<FloatProperty> = AliasGroup::new(&[
    "smoothnessFactor",
    "_SmoothnessFactor",
    "_Smoothness",
    "_Glossiness",
]);

pub const ROUGHNESS_FACTOR: AliasGroup<FloatProperty> =
    AliasGroup::new(&["roughnessFactor", "_RoughnessFactor", "_Roughness"]);

pub const BASE_COLOR: AliasGroup<ColorProperty> = AliasGroup::new(&[
    "baseColorFactor",
    "_BaseColorFactor",
    "_BaseColor",
    "_Color",
    "_TinColor",
]);

pub const BASE_COLOR_TEXTURE: AliasGroup<TextureProperty> = AliasGroup::new(&[
    "baseColorTexture",
    "_BaseColorTexture",
    "_ColorTexture",
    "_BaseColorMap",
    "_BaseColorTex",
    "_BaseMap",
    "_MainTex",
]);

pub const SPECULAR_COLOR: AliasGroup<ColorProperty> = AliasGroup::new(&["_SpecColor"]);

pub const SPECULAR_GLOSSINESS_TEXTURE: AliasGroup<TextureProperty> =
    AliasGroup::new(&["_SpecGlossMap"]);

pub const AMBIENT_FACTOR: AliasGroup<ColorProperty> = AliasGroup::new(&["_AmbientFactor"]);

pub const LIGHTMAP_TEXTURE: AliasGroup<TextureProperty> = AliasGroup::new(&["_LightMap"]);

pub const LIGHTMAP_FACTOR: AliasGroup<ColorProperty> = AliasGroup::new(&["_LightFactor"]);

/// Particle shaders tint with this instead of the base color.
pub const TINT_COLOR: &str = "_TintColor";

/// Secondary color whose grayscale value scales the tint.
pub const TINT_WHITENESS_COLOR: &str = "_Color";

/// Slot whose presence makes the fallback translator export double sided.
pub const MAIN_TEXTURE: &str = "_MainTex";

pub const GLOSS_MAP_SCALE: &str = "_GlossMapScale";

pub const NORMAL_MAP: &str = "_BumpMap";

pub const NORMAL_MAP_KEYWORDS: &[&str] = &["_NORMALMAP", "_BUMPMAP"];

/// Float flag; at least 1 means the normal map stores plain XYZ.
pub const NORMAL_MAP_FORMAT_XYZ: &str = "_NormalMapFormatXYZ";

pub const METALLIC_GLOSS_MAP_KEYWORD: &str = "_METALLICGLOSSMAP";

pub const METALLIC_SPEC_GLOSS_MAP_KEYWORD: &str = "_METALLICSPECGLOSSMAP";

/// Remap ranges of mask maps, as (min, max) property pairs.
pub const MASK_METALLIC_REMAP: (&str, &str) = ("_MetallicRemapMin", "_MetallicRemapMax");
pub const MASK_SMOOTHNESS_REMAP: (&str, &str) = ("_SmoothnessRemapMin", "_SmoothnessRemapMax");
pub const MASK_OCCLUSION_REMAP: (&str, &str) = ("_AORemapMin", "_AORemapMax");

/// HDRP style emission split into an LDR color and an intensity.
pub const USE_EMISSIVE_INTENSITY: &str = "_UseEmissiveIntensity";
pub const EMISSIVE_COLOR_LDR: &str = "_EmissiveColorLDR";
pub const EMISSIVE_INTENSITY: &str = "_EmissiveIntensity";
pub const EMISSIVE_COLOR_HDR: &str = "_EmissiveColor";

/// Present on shaders that can turn texture transforms off.
pub const TEXTURE_TRANSFORM_TOGGLE: &str = "_TEXTURE_TRANSFORM";
pub const TEXTURE_TRANSFORM_KEYWORD: &str = "_TEXTURE_TRANSFORM_ON";

pub const ALPHA_TEST_KEYWORD: &str = "_ALPHATEST_ON";
pub const BUILTIN_ALPHA_TEST_KEYWORD: &str = "_BUILTIN_ALPHATEST_ON";

/// Render queue of alpha tested geometry.
pub const ALPHA_TEST_RENDER_QUEUE: i32 = 2450;

/// Cull mode value meaning "render both faces".
pub const CULL_OFF: i32 = 0;
