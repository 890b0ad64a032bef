use crate::record::{MaterialRecord, PbrMetallicRoughness, Unlit, KHR_MATERIALS_UNLIT};

use super::{base_color_factor, base_color_texture, TranslateContext};

/// Unlit materials only carry a base color. The extension is declared as required.
pub(crate) fn translate(cx: &mut TranslateContext, record: &mut MaterialRecord) {
    cx.state.extensions.declare(KHR_MATERIALS_UNLIT, true);
    record.extensions.unlit = Some(Unlit {});

    let mut pbr = PbrMetallicRoughness::dielectric();
    pbr.base_color_factor = base_color_factor(&cx.resolver);
    pbr.base_color_texture = base_color_texture(cx);
    record.pbr_metallic_roughness = Some(pbr);
}
