use ard_math::color::ColorExt;

use crate::{
    aliases,
    record::{MaterialRecord, PbrSpecularGlossiness, KHR_MATERIALS_PBR_SPECULAR_GLOSSINESS},
    texture::TextureSlot,
};

use super::{base_color_factor, base_color_texture, TranslateContext};

pub(crate) fn translate(cx: &mut TranslateContext, record: &mut MaterialRecord) {
    let resolver = cx.resolver;
    cx.state
        .extensions
        .declare(KHR_MATERIALS_PBR_SPECULAR_GLOSSINESS, false);

    let spec_gloss_map = resolver.assigned_texture(&aliases::SPECULAR_GLOSSINESS_TEXTURE);

    // With a map the factor is left at its default and acts as a plain multiplier.
    let specular_factor = if spec_gloss_map.is_some() {
        None
    } else {
        resolver
            .resolve(&aliases::SPECULAR_COLOR)
            .map(|hit| hit.value.truncate().to_linear().to_array())
    };

    let diffuse_texture = base_color_texture(cx);
    let specular_glossiness_texture = spec_gloss_map
        .and_then(|(name, texture)| cx.texture_info(name, texture, TextureSlot::SpecularGlossiness));

    record.extensions.pbr_specular_glossiness = Some(PbrSpecularGlossiness {
        diffuse_factor: base_color_factor(&resolver),
        diffuse_texture,
        specular_factor,
        // `_Glossiness` classifies a material as metallic-roughness, so it never gets here.
        glossiness_factor: None,
        specular_glossiness_texture,
    });
}
