//! Material translation.
//!
//! [`translate_material`] handles everything shared by all shading models (alpha, culling,
//! emission, normal and occlusion maps) and hands the base color model to the translator
//! picked by [`classify`].

pub mod common_constant;
pub mod metallic_roughness;
pub mod specular_glossiness;
pub mod unlit;

use ard_log::warn;
use ard_math::{color::ColorExt, Vec4};

use crate::{
    aliases,
    classify::{classify, ShadingModel},
    emissive::{decompose_hdr, HdrDecomposition},
    material::{PropertyType, TextureRef},
    quirks::{shader_quirks, ShaderQuirks},
    record::{
        AlphaMode, EmissiveStrength, MaterialRecord, NormalTextureInfo, OcclusionTextureInfo,
        TextureInfo, KHR_MATERIALS_EMISSIVE_STRENGTH, KHR_TEXTURE_TRANSFORM,
    },
    resolve::{PropertyResolver, Resolved},
    session::{Diagnostic, SessionState},
    settings::ExportSettings,
    texture::{AlphaPolicy, ChannelConversion, ColorSpace, TextureExportSettings, TextureSlot},
    transform::derive_texture_transform,
};

/// Everything a translator can see while translating one material.
pub struct TranslateContext<'a> {
    pub resolver: PropertyResolver<'a>,
    pub settings: &'a ExportSettings,
    pub state: &'a mut SessionState,
}

/// Roughness from smoothness.
#[inline]
pub fn derive_roughness(smoothness: f32) -> f32 {
    1.0 - smoothness
}

/// Smoothness from roughness.
#[inline]
pub fn derive_smoothness_from_roughness(roughness: f32) -> f32 {
    1.0 - roughness
}

pub(crate) fn translate_material(cx: &mut TranslateContext) -> MaterialRecord {
    let material = cx.resolver.material();
    let quirks = shader_quirks(material.shader_name());
    let model = classify(&cx.resolver);

    let name = cx.settings.export_names.then(|| material.name().to_owned());
    let mut record = MaterialRecord::new(name, model);

    alpha(cx, &mut record);

    let cull_off = cx
        .resolver
        .resolve(&aliases::CULL_MODE)
        .map_or(false, |hit| hit.value == aliases::CULL_OFF);
    record.double_sided = cull_off || quirks.contains(ShaderQuirks::DOUBLE_SIDED);

    emission(cx, &mut record);
    normal(cx, &mut record, quirks);

    match model {
        ShadingModel::Unlit => unlit::translate(cx, &mut record),
        ShadingModel::MetallicRoughness => metallic_roughness::translate(cx, &mut record, quirks),
        ShadingModel::SpecularGlossiness => specular_glossiness::translate(cx, &mut record),
        ShadingModel::CommonConstant => common_constant::translate(cx, &mut record),
        ShadingModel::Fallback => metallic_roughness::translate_fallback(cx, &mut record),
    }

    occlusion(cx, &mut record);

    record
}

fn alpha(cx: &TranslateContext, record: &mut MaterialRecord) {
    let resolver = cx.resolver;
    let material = resolver.material();

    let mode = match material.render_type() {
        Some("TransparentCutout") => AlphaMode::Mask,
        Some("Transparent") | Some("Fade") => AlphaMode::Blend,
        _ => {
            if resolver.keyword(cx.settings.alpha_test_keyword())
                || material.render_queue() == aliases::ALPHA_TEST_RENDER_QUEUE
            {
                AlphaMode::Mask
            } else {
                AlphaMode::Opaque
            }
        }
    };

    record.alpha_mode = mode;
    if mode == AlphaMode::Mask {
        record.alpha_cutoff = resolver.resolve(&aliases::ALPHA_CUTOFF).map(|hit| hit.value);
    }
}

/// Emission colors are written as stored. Unlike base color they are not converted to linear.
fn emission(cx: &mut TranslateContext, record: &mut MaterialRecord) {
    let resolver = cx.resolver;
    let texture = resolver.resolve(&aliases::EMISSIVE_TEXTURE);

    if !resolver.any_keyword(aliases::EMISSION_KEYWORDS) && texture.is_none() {
        return;
    }

    let hdr = if resolver.has_any(aliases::USE_EMISSIVE_INTENSITY) {
        if resolver.float(aliases::USE_EMISSIVE_INTENSITY) == Some(1.0) {
            let color = resolver
                .color(aliases::EMISSIVE_COLOR_LDR)
                .unwrap_or(Vec4::ZERO);
            Some(HdrDecomposition {
                color: color.truncate(),
                intensity: resolver.float(aliases::EMISSIVE_INTENSITY).unwrap_or(1.0),
            })
        } else {
            let color = resolver
                .color(aliases::EMISSIVE_COLOR_HDR)
                .unwrap_or(Vec4::ZERO);
            Some(decompose_hdr(color.truncate()))
        }
    } else {
        resolver
            .resolve(&aliases::EMISSION_COLOR)
            .map(|hit| decompose_hdr(hit.value.truncate()))
    };

    if let Some(hdr) = hdr {
        let emission = hdr.into_emission(cx.settings.emissive_strength);
        record.emissive_factor = emission.factor;

        if let Some(strength) = emission.strength {
            record.extensions.emissive_strength = Some(EmissiveStrength {
                emissive_strength: strength,
            });
            cx.state
                .extensions
                .declare(KHR_MATERIALS_EMISSIVE_STRENGTH, false);
        }
    }

    if let Some(Resolved {
        value: Some(texture),
        name,
    }) = texture
    {
        record.emissive_texture = cx.texture_info(name, texture, TextureSlot::Emissive);
    }
}

fn normal(cx: &mut TranslateContext, record: &mut MaterialRecord, quirks: ShaderQuirks) {
    let resolver = cx.resolver;

    let uses_bump_map = resolver.has_any(aliases::NORMAL_MAP)
        && (resolver.any_keyword(aliases::NORMAL_MAP_KEYWORDS)
            || quirks.contains(ShaderQuirks::IMPLICIT_NORMAL_MAP));

    let found = if uses_bump_map {
        resolver
            .texture(aliases::NORMAL_MAP)
            .map(|texture| (aliases::NORMAL_MAP, texture))
    } else {
        resolver.assigned_texture(&aliases::NORMAL_TEXTURE)
    };

    let Some((name, texture)) = found else {
        return;
    };

    let plain_xyz = resolver.has(aliases::NORMAL_MAP_FORMAT_XYZ, PropertyType::Float)
        && resolver
            .float(aliases::NORMAL_MAP_FORMAT_XYZ)
            .map_or(false, |format| format >= 1.0);
    let settings = if plain_xyz {
        TextureExportSettings::new(
            ColorSpace::Linear,
            AlphaPolicy::Never,
            ChannelConversion::None,
        )
    } else {
        TextureSlot::Normal.default_settings()
    };

    if let Some(info) = cx.texture_info_with(name, texture, TextureSlot::Normal, settings) {
        record.normal_texture = Some(NormalTextureInfo {
            info,
            scale: resolver.resolve_or(&aliases::NORMAL_SCALE, 1.0),
        });
    }
}

fn occlusion(cx: &mut TranslateContext, record: &mut MaterialRecord) {
    let resolver = cx.resolver;
    let Some((name, texture)) = resolver.assigned_texture(&aliases::OCCLUSION_TEXTURE) else {
        return;
    };

    if !texture.is_2d() {
        cx.unsupported(texture, TextureSlot::Occlusion);
        return;
    }

    // Occlusion packed into the metallic-roughness texture reuses its index.
    let material = resolver.material().id();
    let shared = record
        .metallic_roughness_index()
        .filter(|_| cx.state.occlusion_baked.contains(&material));
    let index = match shared {
        Some(index) => index,
        None => cx
            .state
            .textures
            .register(texture.handle, TextureSlot::Occlusion),
    };

    let mut info = TextureInfo::new(index);
    cx.apply_transform(&mut info, name);
    info.tex_coord = resolver
        .resolve(&aliases::OCCLUSION_TEX_COORD)
        .map_or(0, |hit| hit.value.round().max(0.0) as u32);

    record.occlusion_texture = Some(OcclusionTextureInfo {
        info,
        strength: resolver.resolve_or(&aliases::OCCLUSION_STRENGTH, 1.0),
    });
}

/// Linear base color factor from the base color group. White when missing.
pub(crate) fn base_color_factor(resolver: &PropertyResolver) -> [f32; 4] {
    resolver
        .resolve_or(&aliases::BASE_COLOR, Vec4::ONE)
        .to_linear()
        .to_array()
}

/// Base color texture with its transform and UV channel.
pub(crate) fn base_color_texture(cx: &mut TranslateContext) -> Option<TextureInfo> {
    let (name, texture) = cx.resolver.assigned_texture(&aliases::BASE_COLOR_TEXTURE)?;

    let mut info = cx.texture_info(name, texture, TextureSlot::BaseColor)?;
    if let Some(tex_coord) = cx.resolver.tex_coord(name) {
        info.tex_coord = tex_coord;
    }
    Some(info)
}

impl<'a> TranslateContext<'a> {
    /// Registers the texture assigned to `property` with the default settings of `slot`.
    #[inline]
    pub fn texture_info(
        &mut self,
        property: &str,
        texture: TextureRef,
        slot: TextureSlot,
    ) -> Option<TextureInfo> {
        self.texture_info_with(property, texture, slot, slot.default_settings())
    }

    /// Registers the texture assigned to `property` and attaches its UV transform. Returns
    /// `None` for textures that aren't 2D.
    pub fn texture_info_with(
        &mut self,
        property: &str,
        texture: TextureRef,
        slot: TextureSlot,
        settings: TextureExportSettings,
    ) -> Option<TextureInfo> {
        if !texture.is_2d() {
            self.unsupported(texture, slot);
            return None;
        }

        let index = self
            .state
            .textures
            .register_with(texture.handle, slot, settings);
        let mut info = TextureInfo::new(index);
        self.apply_transform(&mut info, property);
        Some(info)
    }

    /// Attaches `KHR_texture_transform` for `property` if it does anything.
    pub fn apply_transform(&mut self, info: &mut TextureInfo, property: &str) {
        if !self.settings.texture_transform {
            return;
        }

        if let Some(transform) = derive_texture_transform(&self.resolver, property) {
            info.extensions.texture_transform = Some(transform);
            self.state.extensions.declare(KHR_TEXTURE_TRANSFORM, false);
        }
    }

    fn unsupported(&mut self, texture: TextureRef, slot: TextureSlot) {
        let material = self.resolver.material().name();
        warn!(
            "material `{}` uses a {:?} texture for {:?}. Only 2D textures can be exported.",
            material, texture.dimension, slot
        );

        self.state.diagnostics.push(Diagnostic::UnsupportedTexture {
            material: material.to_owned(),
            slot,
            dimension: texture.dimension,
        });
    }
}
