use ard_math::{color::ColorExt, Vec4};

use crate::{
    aliases,
    material::{PropertyType, TextureRef},
    quirks::ShaderQuirks,
    record::{MaterialRecord, PbrMetallicRoughness},
    resolve::PropertyResolver,
    texture::{ChannelConversion, RemapRange, TextureSlot},
};

use super::{
    base_color_factor, base_color_texture, derive_roughness, derive_smoothness_from_roughness,
    TranslateContext,
};

pub(crate) fn translate(
    cx: &mut TranslateContext,
    record: &mut MaterialRecord,
    quirks: ShaderQuirks,
) {
    let resolver = cx.resolver;
    let gltf_shader = quirks.contains(ShaderQuirks::GLTF_PBR);

    let mut pbr = PbrMetallicRoughness::dielectric();
    pbr.base_color_factor = tinted_base_color(&resolver);
    pbr.base_color_texture = base_color_texture(cx);

    // Packed metallic maps replace the metallic factor in the engine's standard shaders.
    let ignore_metallic = (resolver.keyword(aliases::METALLIC_GLOSS_MAP_KEYWORD)
        || resolver.keyword(aliases::METALLIC_SPEC_GLOSS_MAP_KEYWORD))
        && !gltf_shader;
    if !ignore_metallic {
        if let Some(hit) = resolver.resolve(&aliases::METALLIC_FACTOR) {
            pbr.metallic_factor = hit.value;
        }
    }

    let combined = resolver.assigned_texture(&aliases::METALLIC_ROUGHNESS_TEXTURE);
    let metallic_gloss = resolver.assigned_texture(&aliases::METALLIC_GLOSS_TEXTURE);

    // Roughness multiplier that has to be baked into the packed texture.
    let mut roughness_bake = None;
    if let Some(hit) = resolver.resolve(&aliases::ROUGHNESS_FACTOR) {
        pbr.roughness_factor = hit.value;
    } else if let Some(hit) = resolver.resolve(&aliases::SMOOTHNESS_FACTOR) {
        let mut smoothness = hit.value;
        if quirks.contains(ShaderQuirks::INVERTED_GLOSSINESS) {
            smoothness = derive_smoothness_from_roughness(smoothness);
        }

        // The gloss map scale takes over once the packed map is active.
        if metallic_gloss.is_some()
            && resolver.keyword(aliases::METALLIC_GLOSS_MAP_KEYWORD)
            && resolver.has(aliases::GLOSS_MAP_SCALE, PropertyType::Float)
        {
            smoothness = resolver
                .float(aliases::GLOSS_MAP_SCALE)
                .unwrap_or(smoothness);
        }

        if combined.is_some() || metallic_gloss.is_some() {
            pbr.roughness_factor = 1.0;
            roughness_bake = Some(derive_roughness(smoothness));
        } else {
            pbr.roughness_factor = derive_roughness(smoothness);
        }
    }

    if let Some((name, texture)) = combined {
        let mut settings = TextureSlot::MetallicRoughness.default_settings();
        if let Some(multiplier) = roughness_bake {
            settings.roughness_range = RemapRange::new(0.0, multiplier);
        }

        let info = cx.texture_info_with(name, texture, TextureSlot::MetallicRoughness, settings);
        if info.is_some() && occlusion_packed(&resolver, texture) {
            cx.state.occlusion_baked.insert(resolver.material().id());
        }
        pbr.metallic_roughness_texture = info;
    } else if let Some((name, texture)) = metallic_gloss {
        // glTF shaders already store metallic-roughness in this slot.
        let slot = if gltf_shader {
            TextureSlot::MetallicRoughness
        } else {
            TextureSlot::MetallicGloss
        };
        let mut settings = slot.default_settings();
        if let Some(multiplier) = roughness_bake {
            settings.smoothness_range =
                RemapRange::new(0.0, derive_smoothness_from_roughness(multiplier));
        }

        let packed = occlusion_packed(&resolver, texture);
        if packed {
            settings.conversion = ChannelConversion::MetalGlossOcclusionChannelSwap;
        }

        if let Some(info) = cx.texture_info_with(name, texture, slot, settings) {
            if packed {
                cx.state.occlusion_baked.insert(resolver.material().id());
            }
            if ignore_metallic {
                pbr.metallic_factor = 1.0;
            }
            pbr.metallic_roughness_texture = Some(info);
        }
    } else if let Some((name, texture)) = resolver.assigned_texture(&aliases::MASK_TEXTURE) {
        let mut settings = TextureSlot::MetallicGloss.default_settings();
        settings.metallic_range = remap_range(&resolver, aliases::MASK_METALLIC_REMAP);
        settings.smoothness_range = remap_range(&resolver, aliases::MASK_SMOOTHNESS_REMAP);
        settings.occlusion_range = remap_range(&resolver, aliases::MASK_OCCLUSION_REMAP);
        settings.conversion = ChannelConversion::MetalGlossOcclusionChannelSwap;

        if let Some(info) = cx.texture_info_with(name, texture, TextureSlot::MetallicGloss, settings)
        {
            cx.state.occlusion_baked.insert(resolver.material().id());
            // Both are baked into the texture.
            pbr.metallic_factor = 1.0;
            pbr.roughness_factor = 1.0;
            pbr.metallic_roughness_texture = Some(info);
        }
    }

    record.pbr_metallic_roughness = Some(pbr);
}

/// Minimal export for materials that match no known shading model.
pub(crate) fn translate_fallback(cx: &mut TranslateContext, record: &mut MaterialRecord) {
    let mut pbr = PbrMetallicRoughness::dielectric();
    pbr.base_color_factor = base_color_factor(&cx.resolver);
    pbr.base_color_texture = base_color_texture(cx);
    record.pbr_metallic_roughness = Some(pbr);

    if cx.resolver.has_any(aliases::MAIN_TEXTURE) {
        record.double_sided = true;
    }
}

/// Base color, replaced by the tint color on particle shaders.
fn tinted_base_color(resolver: &PropertyResolver) -> [f32; 4] {
    if !resolver.has_any(aliases::TINT_COLOR) {
        return base_color_factor(resolver);
    }

    let whiteness = resolver
        .color(aliases::TINT_WHITENESS_COLOR)
        .map_or(1.0, |color| color.rgb_mean());
    let tint = resolver.color(aliases::TINT_COLOR).unwrap_or(Vec4::ONE);

    (tint * whiteness).to_linear().to_array()
}

/// If the occlusion slot holds the same texture as `texture`.
fn occlusion_packed(resolver: &PropertyResolver, texture: TextureRef) -> bool {
    resolver
        .assigned_texture(&aliases::OCCLUSION_TEXTURE)
        .map_or(false, |(_, occlusion)| occlusion.handle == texture.handle)
}

fn remap_range(resolver: &PropertyResolver, (min, max): (&str, &str)) -> RemapRange {
    RemapRange::new(
        resolver.float(min).unwrap_or(0.0),
        resolver.float(max).unwrap_or(1.0),
    )
}
