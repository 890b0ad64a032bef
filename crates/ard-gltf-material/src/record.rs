//! glTF material output. Field names serialize to the glTF 2.0 JSON schema.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::ShadingModel;

pub const KHR_MATERIALS_UNLIT: &str = "KHR_materials_unlit";
pub const KHR_MATERIALS_PBR_SPECULAR_GLOSSINESS: &str = "KHR_materials_pbrSpecularGlossiness";
pub const KHR_MATERIALS_EMISSIVE_STRENGTH: &str = "KHR_materials_emissive_strength";
pub const KHR_MATERIALS_COMMON: &str = "KHR_materials_common";
pub const KHR_TEXTURE_TRANSFORM: &str = "KHR_texture_transform";

#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlphaMode {
    #[default]
    Opaque,
    Mask,
    Blend,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Translator that produced this record.
    #[serde(skip)]
    pub model: ShadingModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_texture: Option<NormalTextureInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occlusion_texture: Option<OcclusionTextureInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissive_texture: Option<TextureInfo>,
    #[serde(skip_serializing_if = "is_black")]
    pub emissive_factor: [f32; 3],
    pub alpha_mode: AlphaMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_cutoff: Option<f32>,
    pub double_sided: bool,
    #[serde(skip_serializing_if = "MaterialExtensions::is_empty")]
    pub extensions: MaterialExtensions,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    pub base_color_factor: [f32; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_color_texture: Option<TextureInfo>,
    pub metallic_factor: f32,
    pub roughness_factor: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metallic_roughness_texture: Option<TextureInfo>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextureInfo {
    pub index: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub tex_coord: u32,
    #[serde(skip_serializing_if = "TextureInfoExtensions::is_empty")]
    pub extensions: TextureInfoExtensions,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NormalTextureInfo {
    #[serde(flatten)]
    pub info: TextureInfo,
    pub scale: f32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct OcclusionTextureInfo {
    #[serde(flatten)]
    pub info: TextureInfo,
    pub strength: f32,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct TextureInfoExtensions {
    #[serde(
        rename = "KHR_texture_transform",
        skip_serializing_if = "Option::is_none"
    )]
    pub texture_transform: Option<TextureTransform>,
}

/// `KHR_texture_transform`, already converted to glTF's top-left UV origin.
#[derive(Debug, Serialize, Copy, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextureTransform {
    pub offset: [f32; 2],
    pub rotation: f32,
    pub scale: [f32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tex_coord: Option<u32>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct MaterialExtensions {
    #[serde(rename = "KHR_materials_unlit", skip_serializing_if = "Option::is_none")]
    pub unlit: Option<Unlit>,
    #[serde(
        rename = "KHR_materials_pbrSpecularGlossiness",
        skip_serializing_if = "Option::is_none"
    )]
    pub pbr_specular_glossiness: Option<PbrSpecularGlossiness>,
    #[serde(
        rename = "KHR_materials_emissive_strength",
        skip_serializing_if = "Option::is_none"
    )]
    pub emissive_strength: Option<EmissiveStrength>,
    #[serde(rename = "KHR_materials_common", skip_serializing_if = "Option::is_none")]
    pub common_constant: Option<CommonConstant>,
    /// Extensions this crate doesn't model, keyed by extension name.
    #[serde(flatten)]
    pub others: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Default)]
pub struct Unlit {}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PbrSpecularGlossiness {
    pub diffuse_factor: [f32; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffuse_texture: Option<TextureInfo>,
    /// Omitted when a specular-glossiness texture carries the values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specular_factor: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossiness_factor: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specular_glossiness_texture: Option<TextureInfo>,
}

#[derive(Debug, Serialize, Copy, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmissiveStrength {
    pub emissive_strength: f32,
}

/// Legacy constant-lit material block.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommonConstant {
    pub technique: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient_factor: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightmap_texture: Option<TextureInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightmap_factor: Option<[f32; 4]>,
}

#[inline]
fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[inline]
fn is_black(value: &[f32; 3]) -> bool {
    *value == [0.0; 3]
}

impl MaterialRecord {
    pub fn new(name: Option<String>, model: ShadingModel) -> Self {
        Self {
            name,
            model,
            pbr_metallic_roughness: None,
            normal_texture: None,
            occlusion_texture: None,
            emissive_texture: None,
            emissive_factor: [0.0; 3],
            alpha_mode: AlphaMode::Opaque,
            alpha_cutoff: None,
            double_sided: false,
            extensions: MaterialExtensions::default(),
        }
    }

    /// Index of the metallic-roughness texture, if there is one.
    #[inline]
    pub fn metallic_roughness_index(&self) -> Option<u32> {
        self.pbr_metallic_roughness
            .as_ref()?
            .metallic_roughness_texture
            .as_ref()
            .map(|info| info.index)
    }
}

impl Default for PbrMetallicRoughness {
    /// glTF defaults.
    fn default() -> Self {
        Self {
            base_color_factor: [1.0; 4],
            base_color_texture: None,
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            metallic_roughness_texture: None,
        }
    }
}

impl PbrMetallicRoughness {
    /// Starting point for engine materials: non-metallic and fully rough.
    pub fn dielectric() -> Self {
        Self {
            metallic_factor: 0.0,
            ..Default::default()
        }
    }
}

impl TextureInfo {
    #[inline]
    pub fn new(index: u32) -> Self {
        Self {
            index,
            tex_coord: 0,
            extensions: TextureInfoExtensions::default(),
        }
    }
}

impl TextureInfoExtensions {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.texture_transform.is_none()
    }
}

impl MaterialExtensions {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.unlit.is_none()
            && self.pbr_specular_glossiness.is_none()
            && self.emissive_strength.is_none()
            && self.common_constant.is_none()
            && self.others.is_empty()
    }
}

impl CommonConstant {
    pub const TECHNIQUE: &'static str = "CONSTANT";
}

impl Default for CommonConstant {
    fn default() -> Self {
        Self {
            technique: Self::TECHNIQUE,
            ambient_factor: None,
            lightmap_texture: None,
            lightmap_factor: None,
        }
    }
}
