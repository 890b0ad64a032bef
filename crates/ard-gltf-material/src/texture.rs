use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::material::TextureHandle;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    Linear,
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AlphaPolicy {
    /// Keep alpha only if the source actually uses it.
    Auto,
    Always,
    Never,
}

/// How the encoder must rearrange channels when baking.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChannelConversion {
    None,
    /// Unpack an engine encoded normal map into plain RGB.
    NormalMap,
    /// Metallic (R) and smoothness (A) into metallic (B) and roughness (G).
    MetalGlossChannelSwap,
    /// Like `MetalGlossChannelSwap`, also moving occlusion (G) into R.
    MetalGlossOcclusionChannelSwap,
}

/// Linear remap of a channel from `[0, 1]` into `[min, max]` before conversion.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RemapRange {
    pub min: OrderedFloat<f32>,
    pub max: OrderedFloat<f32>,
}

/// Everything the texture encoder needs to bake a texture for a material slot.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureExportSettings {
    pub color_space: ColorSpace,
    pub alpha: AlphaPolicy,
    pub conversion: ChannelConversion,
    pub metallic_range: RemapRange,
    /// Applied to the smoothness channel of metallic-gloss sources.
    pub smoothness_range: RemapRange,
    /// Applied to the roughness channel of metallic-roughness sources.
    pub roughness_range: RemapRange,
    pub occlusion_range: RemapRange,
}

/// The role of a texture in a glTF material.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    BaseColor,
    Normal,
    MetallicRoughness,
    /// Metallic-gloss source that needs swizzling into metallic-roughness.
    MetallicGloss,
    Occlusion,
    Emissive,
    SpecularGlossiness,
    /// Generic linear data, such as light maps.
    Linear,
}

/// One texture the encoder has to produce. Its position in the registry is its glTF index.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub struct TextureExport {
    pub handle: TextureHandle,
    pub slot: TextureSlot,
    pub settings: TextureExportSettings,
}

/// Textures referenced by exported materials. Identical requests share an index.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: Vec<TextureExport>,
    lookup: FxHashMap<(TextureHandle, TextureExportSettings), u32>,
}

impl RemapRange {
    pub const IDENTITY: RemapRange = RemapRange {
        min: OrderedFloat(0.0),
        max: OrderedFloat(1.0),
    };

    #[inline]
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min: OrderedFloat(min),
            max: OrderedFloat(max),
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for RemapRange {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TextureExportSettings {
    #[inline]
    pub fn new(color_space: ColorSpace, alpha: AlphaPolicy, conversion: ChannelConversion) -> Self {
        Self {
            color_space,
            alpha,
            conversion,
            metallic_range: RemapRange::IDENTITY,
            smoothness_range: RemapRange::IDENTITY,
            roughness_range: RemapRange::IDENTITY,
            occlusion_range: RemapRange::IDENTITY,
        }
    }
}

impl TextureSlot {
    /// Default bake settings for textures used in this slot.
    pub fn default_settings(self) -> TextureExportSettings {
        use AlphaPolicy::*;
        use ChannelConversion as Conv;
        use ColorSpace::*;

        match self {
            TextureSlot::BaseColor => TextureExportSettings::new(Srgb, Auto, Conv::None),
            TextureSlot::Normal => TextureExportSettings::new(Linear, Never, Conv::NormalMap),
            TextureSlot::MetallicRoughness => TextureExportSettings::new(Linear, Never, Conv::None),
            TextureSlot::MetallicGloss => {
                TextureExportSettings::new(Linear, Never, Conv::MetalGlossChannelSwap)
            }
            TextureSlot::Occlusion => TextureExportSettings::new(Linear, Never, Conv::None),
            TextureSlot::Emissive => TextureExportSettings::new(Srgb, Never, Conv::None),
            TextureSlot::SpecularGlossiness => TextureExportSettings::new(Srgb, Auto, Conv::None),
            TextureSlot::Linear => TextureExportSettings::new(Linear, Auto, Conv::None),
        }
    }
}

impl TextureRegistry {
    /// Registers a texture with the default settings of its slot.
    #[inline]
    pub fn register(&mut self, handle: TextureHandle, slot: TextureSlot) -> u32 {
        self.register_with(handle, slot, slot.default_settings())
    }

    /// Registers a texture with explicit bake settings. Returns the glTF texture index.
    pub fn register_with(
        &mut self,
        handle: TextureHandle,
        slot: TextureSlot,
        settings: TextureExportSettings,
    ) -> u32 {
        let next = self.textures.len() as u32;
        *self.lookup.entry((handle, settings)).or_insert_with(|| {
            self.textures.push(TextureExport {
                handle,
                slot,
                settings,
            });
            next
        })
    }

    #[inline]
    pub fn get(&self, index: u32) -> Option<&TextureExport> {
        self.textures.get(index as usize)
    }

    #[inline]
    pub fn textures(&self) -> &[TextureExport] {
        &self.textures
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    #[inline]
    pub fn into_textures(self) -> Vec<TextureExport> {
        self.textures
    }
}
