use crate::{
    aliases,
    record::{CommonConstant, MaterialRecord, KHR_MATERIALS_COMMON},
    texture::TextureSlot,
};

use super::TranslateContext;

/// Legacy light mapped materials. Colors are written as stored, without color space
/// conversion.
pub(crate) fn translate(cx: &mut TranslateContext, record: &mut MaterialRecord) {
    let resolver = cx.resolver;
    cx.state.extensions.declare(KHR_MATERIALS_COMMON, false);

    let lightmap_texture = resolver
        .assigned_texture(&aliases::LIGHTMAP_TEXTURE)
        .and_then(|(name, texture)| cx.texture_info(name, texture, TextureSlot::Linear));

    record.extensions.common_constant = Some(CommonConstant {
        ambient_factor: resolver
            .resolve(&aliases::AMBIENT_FACTOR)
            .map(|hit| hit.value.to_array()),
        lightmap_texture,
        lightmap_factor: resolver
            .resolve(&aliases::LIGHTMAP_FACTOR)
            .map(|hit| hit.value.to_array()),
        ..Default::default()
    });
}
