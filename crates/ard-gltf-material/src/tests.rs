use crate::{
    prelude::*,
    record::{AlphaMode, KHR_MATERIALS_EMISSIVE_STRENGTH, KHR_TEXTURE_TRANSFORM},
    texture::{ChannelConversion, ColorSpace, RemapRange},
};
use ard_math::{color::srgb_to_linear, Vec2, Vec4};
use approx::assert_relative_eq;

fn tex(handle: u64) -> Option<TextureRef> {
    Some(TextureRef {
        handle: TextureHandle(handle),
        dimension: TextureDimension::Tex2D,
    })
}

fn cube(handle: u64) -> Option<TextureRef> {
    Some(TextureRef {
        handle: TextureHandle(handle),
        dimension: TextureDimension::Cube,
    })
}

fn export_with(settings: ExportSettings, material: &PropertyMaterial) -> ExportOutput {
    let mut session = ExportSession::new(settings);
    session.export_material(material);
    session.finish()
}

fn export(material: &PropertyMaterial) -> ExportOutput {
    export_with(ExportSettings::default(), material)
}

#[test]
fn fallback_material() {
    let material = PropertyMaterial::new(1, "crate", "Legacy Shaders/Diffuse")
        .with_texture("_MainTex", tex(1))
        .with_color("_Color", Vec4::new(0.5, 0.5, 0.5, 1.0));
    let output = export(&material);

    let record = &output.materials[0];
    assert_eq!(record.model, ShadingModel::Fallback);
    assert!(record.double_sided);

    let pbr = record.pbr_metallic_roughness.as_ref().unwrap();
    assert_eq!(pbr.metallic_factor, 0.0);
    assert_eq!(pbr.roughness_factor, 1.0);
    assert_eq!(pbr.base_color_texture.as_ref().map(|info| info.index), Some(0));
    assert_relative_eq!(pbr.base_color_factor[0], srgb_to_linear(0.5));
    assert_eq!(pbr.base_color_factor[3], 1.0);
    assert!(output.extensions_used.is_empty());
}

#[test]
fn unlit_by_shader_name() {
    let material = PropertyMaterial::new(1, "fx", "Custom/MyUnlitFX")
        .with_float("_Metallic", 1.0)
        .with_texture("_MainTex", tex(1));
    let output = export(&material);

    let record = &output.materials[0];
    assert_eq!(record.model, ShadingModel::Unlit);
    assert!(record.extensions.unlit.is_some());
    assert_eq!(
        record.pbr_metallic_roughness.as_ref().unwrap().metallic_factor,
        0.0
    );
    assert_eq!(output.extensions_used, ["KHR_materials_unlit"]);
    assert_eq!(output.extensions_required, ["KHR_materials_unlit"]);
}

#[test]
fn extensions_declared_once() {
    let a = PropertyMaterial::new(1, "a", "Unlit/Color");
    let b = PropertyMaterial::new(2, "b", "Unlit/Texture");

    let mut session = ExportSession::new(ExportSettings::default());
    session.export_material(&a);
    session.export_material(&b);
    let output = session.finish();

    assert_eq!(output.materials.len(), 2);
    assert_eq!(output.extensions_used, ["KHR_materials_unlit"]);
    assert_eq!(output.extensions_required, ["KHR_materials_unlit"]);
}

#[test]
fn memoized_by_identity() {
    let rock = PropertyMaterial::new(1, "rock", "Standard").with_float("_Metallic", 0.0);
    let moss = PropertyMaterial::new(2, "moss", "Standard").with_float("_Metallic", 0.0);

    let mut session = ExportSession::new(ExportSettings::default());
    let first = session.export_material(&rock);
    let second = session.export(Some(&rock as &dyn SourceMaterial));
    let other = session.export_material(&moss);
    let default = session.export(None);

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(default, 2);
    assert_eq!(session.materials().len(), 3);
}

#[test]
fn names_can_be_omitted() {
    let settings = ExportSettings {
        export_names: false,
        ..Default::default()
    };
    let output = export_with(settings, &PropertyMaterial::new(1, "rock", "Standard"));
    assert_eq!(output.materials[0].name, None);

    let output = export(&PropertyMaterial::new(1, "rock", "Standard"));
    assert_eq!(output.materials[0].name.as_deref(), Some("rock"));
}

#[test]
fn metallic_gloss_map_shares_occlusion() {
    let material = PropertyMaterial::new(1, "metal", "Standard")
        .with_float("_Metallic", 0.0)
        .with_float("_Glossiness", 0.5)
        .with_float("_GlossMapScale", 0.8)
        .with_texture("_MetallicGlossMap", tex(5))
        .with_texture("_OcclusionMap", tex(5))
        .with_keyword("_METALLICGLOSSMAP");
    let output = export(&material);

    let record = &output.materials[0];
    let pbr = record.pbr_metallic_roughness.as_ref().unwrap();
    assert_eq!(pbr.metallic_factor, 1.0);
    assert_eq!(pbr.roughness_factor, 1.0);

    let mr_index = record.metallic_roughness_index().unwrap();
    let occlusion = record.occlusion_texture.as_ref().unwrap();
    assert_eq!(occlusion.info.index, mr_index);
    assert_eq!(output.textures.len(), 1);

    let baked = &output.textures[mr_index as usize];
    assert_eq!(baked.slot, TextureSlot::MetallicGloss);
    assert_eq!(
        baked.settings.conversion,
        ChannelConversion::MetalGlossOcclusionChannelSwap
    );
    assert_relative_eq!(baked.settings.smoothness_range.max.0, 0.8, epsilon = 1e-6);
}

#[test]
fn separate_occlusion_map_is_not_shared() {
    let material = PropertyMaterial::new(1, "metal", "Standard")
        .with_float("_Metallic", 0.0)
        .with_texture("_MetallicGlossMap", tex(5))
        .with_texture("_OcclusionMap", tex(6))
        .with_float("_OcclusionStrength", 0.5);
    let output = export(&material);

    let record = &output.materials[0];
    let occlusion = record.occlusion_texture.as_ref().unwrap();
    assert_ne!(Some(occlusion.info.index), record.metallic_roughness_index());
    assert_eq!(occlusion.strength, 0.5);
    assert_eq!(output.textures.len(), 2);
    assert_eq!(
        output.textures[0].settings.conversion,
        ChannelConversion::MetalGlossChannelSwap
    );
}

#[test]
fn mask_map_bakes_remap_ranges() {
    let material = PropertyMaterial::new(1, "hdrp", "HDRP/Lit")
        .with_float("_Metallic", 0.3)
        .with_float("_Smoothness", 0.5)
        .with_texture("_MaskMap", tex(7))
        .with_float("_MetallicRemapMin", 0.1)
        .with_float("_MetallicRemapMax", 0.9)
        .with_float("_SmoothnessRemapMin", 0.0)
        .with_float("_SmoothnessRemapMax", 0.5)
        .with_float("_AORemapMin", 0.2)
        .with_float("_AORemapMax", 1.0);
    let output = export(&material);

    let record = &output.materials[0];
    let pbr = record.pbr_metallic_roughness.as_ref().unwrap();
    assert_eq!(pbr.metallic_factor, 1.0);
    assert_eq!(pbr.roughness_factor, 1.0);

    // The mask map is also the occlusion texture.
    let mr_index = record.metallic_roughness_index().unwrap();
    assert_eq!(
        record.occlusion_texture.as_ref().map(|occlusion| occlusion.info.index),
        Some(mr_index)
    );
    assert_eq!(output.textures.len(), 1);

    let settings = output.textures[0].settings;
    assert_eq!(settings.metallic_range, RemapRange::new(0.1, 0.9));
    assert_eq!(settings.smoothness_range, RemapRange::new(0.0, 0.5));
    assert_eq!(settings.occlusion_range, RemapRange::new(0.2, 1.0));
    assert_eq!(
        settings.conversion,
        ChannelConversion::MetalGlossOcclusionChannelSwap
    );
}

#[test]
fn combined_texture_bakes_roughness() {
    let material = PropertyMaterial::new(1, "mat", "Custom/PBR")
        .with_float("_Metallic", 0.5)
        .with_float("_Smoothness", 0.25)
        .with_texture("_MetallicRoughnessTexture", tex(2));
    let output = export(&material);

    let pbr = output.materials[0].pbr_metallic_roughness.as_ref().unwrap();
    assert_eq!(pbr.metallic_factor, 0.5);
    assert_eq!(pbr.roughness_factor, 1.0);

    let baked = &output.textures[0];
    assert_eq!(baked.slot, TextureSlot::MetallicRoughness);
    assert_eq!(baked.settings.conversion, ChannelConversion::None);
    assert_relative_eq!(baked.settings.roughness_range.max.0, 0.75);
}

#[test]
fn combined_texture_shares_occlusion() {
    let material = PropertyMaterial::new(1, "mat", "Custom/PBR")
        .with_float("_Metallic", 0.0)
        .with_float("_Smoothness", 0.5)
        .with_texture("_MetallicRoughnessTexture", tex(5))
        .with_texture("_OcclusionTexture", tex(5));
    let output = export(&material);

    let record = &output.materials[0];
    let mr = record.metallic_roughness_index();
    let occlusion = record.occlusion_texture.as_ref().map(|occ| occ.info.index);
    assert!(mr.is_some());
    assert_eq!(occlusion, mr);
    assert_eq!(output.textures.len(), 1);
    assert_relative_eq!(output.textures[0].settings.roughness_range.max.0, 0.5);
}

#[test]
fn roughness_from_smoothness() {
    let material = PropertyMaterial::new(1, "mat", "Standard")
        .with_float("_Metallic", 0.2)
        .with_float("_Glossiness", 0.7);
    let output = export(&material);

    let pbr = output.materials[0].pbr_metallic_roughness.as_ref().unwrap();
    assert_eq!(pbr.metallic_factor, 0.2);
    assert_relative_eq!(pbr.roughness_factor, 0.3, epsilon = 1e-6);
}

#[test]
fn explicit_roughness_wins() {
    let material = PropertyMaterial::new(1, "mat", "Custom/PBR")
        .with_float("_Roughness", 0.4)
        .with_float("_Smoothness", 0.9);
    let output = export(&material);

    let pbr = output.materials[0].pbr_metallic_roughness.as_ref().unwrap();
    assert_eq!(pbr.roughness_factor, 0.4);
}

#[test]
fn inverted_glossiness_shader() {
    let material = PropertyMaterial::new(1, "mat", "GLTF/PbrMetallicRoughness")
        .with_float("_Metallic", 0.6)
        .with_float("_Glossiness", 0.2)
        .with_keyword("_METALLICGLOSSMAP");
    let output = export(&material);

    let pbr = output.materials[0].pbr_metallic_roughness.as_ref().unwrap();
    // glTF shaders keep their metallic factor with a packed map enabled.
    assert_eq!(pbr.metallic_factor, 0.6);
    assert_relative_eq!(pbr.roughness_factor, 0.2, epsilon = 1e-6);
}

#[test]
fn packed_map_keyword_suppresses_metallic() {
    let material = PropertyMaterial::new(1, "mat", "Standard")
        .with_float("_Metallic", 0.6)
        .with_texture("_MetallicGlossMap", None)
        .with_keyword("_METALLICGLOSSMAP");
    let output = export(&material);

    let pbr = output.materials[0].pbr_metallic_roughness.as_ref().unwrap();
    assert_eq!(pbr.metallic_factor, 0.0);
    assert_eq!(pbr.metallic_roughness_texture, None);
}

#[test]
fn tint_color_overrides_base_color() {
    let material = PropertyMaterial::new(1, "smoke", "Particles/Standard Surface")
        .with_float("_Metallic", 0.0)
        .with_color("_TintColor", Vec4::new(1.0, 0.5, 0.0, 1.0))
        .with_color("_Color", Vec4::new(1.0, 0.5, 0.0, 1.0));
    let output = export(&material);

    // Tint scaled by the mean of `_Color`, which is 0.5.
    let color = output.materials[0]
        .pbr_metallic_roughness
        .as_ref()
        .unwrap()
        .base_color_factor;
    assert_relative_eq!(color[0], srgb_to_linear(0.5));
    assert_relative_eq!(color[1], srgb_to_linear(0.25));
    assert_eq!(color[2], 0.0);
    assert_relative_eq!(color[3], 0.5);
}

#[test]
fn specular_glossiness_factors() {
    let material = PropertyMaterial::new(1, "mat", "Legacy Shaders/Specular")
        .with_color("_SpecColor", Vec4::new(0.5, 0.5, 0.5, 1.0))
        .with_texture("_SpecGlossMap", None)
        .with_texture("_MainTex", tex(1));
    let output = export(&material);

    let record = &output.materials[0];
    assert_eq!(record.model, ShadingModel::SpecularGlossiness);
    assert!(record.pbr_metallic_roughness.is_none());

    let ext = record.extensions.pbr_specular_glossiness.as_ref().unwrap();
    let specular = ext.specular_factor.unwrap();
    assert_relative_eq!(specular[0], srgb_to_linear(0.5));
    assert_eq!(ext.glossiness_factor, None);
    assert_eq!(ext.diffuse_texture.as_ref().map(|info| info.index), Some(0));
    assert!(ext.specular_glossiness_texture.is_none());
    assert_eq!(output.extensions_used, ["KHR_materials_pbrSpecularGlossiness"]);
}

#[test]
fn specular_glossiness_map_suppresses_factors() {
    let material = PropertyMaterial::new(1, "mat", "Legacy Shaders/Specular")
        .with_color("_SpecColor", Vec4::new(0.5, 0.5, 0.5, 1.0))
        .with_texture("_SpecGlossMap", tex(4));
    let output = export(&material);

    let ext = output.materials[0]
        .extensions
        .pbr_specular_glossiness
        .as_ref()
        .unwrap();
    assert_eq!(ext.specular_factor, None);
    assert_eq!(ext.glossiness_factor, None);
    assert_eq!(
        ext.specular_glossiness_texture.as_ref().map(|info| info.index),
        Some(0)
    );
    assert_eq!(output.textures[0].slot, TextureSlot::SpecularGlossiness);
}

#[test]
fn common_constant_block() {
    let material = PropertyMaterial::new(1, "mat", "Legacy/Lightmapped")
        .with_color("_AmbientFactor", Vec4::new(0.1, 0.2, 0.3, 1.0))
        .with_texture("_LightMap", tex(3))
        .with_color("_LightFactor", Vec4::ONE);
    let output = export(&material);

    let record = &output.materials[0];
    assert_eq!(record.model, ShadingModel::CommonConstant);

    let constant = record.extensions.common_constant.as_ref().unwrap();
    assert_eq!(constant.technique, "CONSTANT");
    // Written without color space conversion.
    assert_eq!(constant.ambient_factor, Some([0.1, 0.2, 0.3, 1.0]));
    assert_eq!(constant.lightmap_factor, Some([1.0; 4]));
    assert_eq!(
        constant.lightmap_texture.as_ref().map(|info| info.index),
        Some(0)
    );
    assert_eq!(output.textures[0].settings.color_space, ColorSpace::Linear);
    assert_eq!(output.extensions_used, ["KHR_materials_common"]);
}

#[test]
fn alpha_modes() {
    let base = || PropertyMaterial::new(1, "mat", "Standard").with_float("_Cutoff", 0.4);
    let mode = |material: PropertyMaterial, settings: ExportSettings| {
        let output = export_with(settings, &material);
        (output.materials[0].alpha_mode, output.materials[0].alpha_cutoff)
    };
    let builtin = ExportSettings::default();
    let scriptable = ExportSettings {
        render_pipeline: RenderPipeline::Scriptable,
        ..Default::default()
    };

    assert_eq!(
        mode(base().with_render_type("TransparentCutout"), builtin.clone()),
        (AlphaMode::Mask, Some(0.4))
    );
    assert_eq!(
        mode(base().with_render_type("Transparent"), builtin.clone()),
        (AlphaMode::Blend, None)
    );
    assert_eq!(
        mode(base().with_render_type("Fade"), builtin.clone()),
        (AlphaMode::Blend, None)
    );
    assert_eq!(
        mode(base().with_keyword("_BUILTIN_ALPHATEST_ON"), builtin.clone()),
        (AlphaMode::Mask, Some(0.4))
    );
    assert_eq!(
        mode(base().with_keyword("_ALPHATEST_ON"), builtin.clone()),
        (AlphaMode::Opaque, None)
    );
    assert_eq!(
        mode(base().with_keyword("_ALPHATEST_ON"), scriptable),
        (AlphaMode::Mask, Some(0.4))
    );
    assert_eq!(
        mode(base().with_render_queue(2450), builtin.clone()),
        (AlphaMode::Mask, Some(0.4))
    );
    assert_eq!(mode(base(), builtin), (AlphaMode::Opaque, None));
}

#[test]
fn double_sided() {
    let lit = |shader: &str| PropertyMaterial::new(1, "mat", shader).with_float("_Metallic", 0.0);

    let output = export(&lit("Standard").with_float("_Cull", 0.0));
    assert!(output.materials[0].double_sided);

    let output = export(&lit("Standard").with_int("_CullMode", 2));
    assert!(!output.materials[0].double_sided);

    let output = export(&lit("Custom/Leaves-Double"));
    assert!(output.materials[0].double_sided);

    let output = export(&lit("Standard"));
    assert!(!output.materials[0].double_sided);
}

#[test]
fn non_2d_textures_are_reported() {
    let material = PropertyMaterial::new(1, "sky", "Standard")
        .with_float("_Metallic", 0.0)
        .with_texture("_MainTex", cube(1));
    let output = export(&material);

    let pbr = output.materials[0].pbr_metallic_roughness.as_ref().unwrap();
    assert!(pbr.base_color_texture.is_none());
    assert!(output.textures.is_empty());
    assert_eq!(
        output.diagnostics,
        vec![Diagnostic::UnsupportedTexture {
            material: "sky".to_owned(),
            slot: TextureSlot::BaseColor,
            dimension: TextureDimension::Cube,
        }]
    );
}

#[test]
fn hdr_emission_uses_strength_extension() {
    let material = PropertyMaterial::new(1, "lamp", "Standard")
        .with_float("_Metallic", 0.0)
        .with_color("_EmissionColor", Vec4::new(2.0, 0.0, 0.0, 1.0))
        .with_keyword("_EMISSION");

    let output = export(&material);
    let record = &output.materials[0];
    assert_relative_eq!(record.emissive_factor[0], 191.0 / 255.0);
    assert_eq!(record.emissive_factor[1], 0.0);
    assert_relative_eq!(
        record.extensions.emissive_strength.unwrap().emissive_strength,
        510.0 / 191.0,
        epsilon = 1e-5
    );
    assert_eq!(output.extensions_used, [KHR_MATERIALS_EMISSIVE_STRENGTH]);

    let settings = ExportSettings {
        emissive_strength: false,
        ..Default::default()
    };
    let output = export_with(settings, &material);
    let record = &output.materials[0];
    assert_relative_eq!(record.emissive_factor[0], 1.0);
    assert!(record.extensions.emissive_strength.is_none());
    assert!(output.extensions_used.is_empty());
}

#[test]
fn emission_needs_keyword_or_texture() {
    let material = PropertyMaterial::new(1, "lamp", "Standard")
        .with_float("_Metallic", 0.0)
        .with_color("_EmissionColor", Vec4::new(0.5, 0.5, 0.5, 1.0));
    let output = export(&material);
    assert_eq!(output.materials[0].emissive_factor, [0.0; 3]);

    let material = material.with_texture("_EmissionMap", tex(9));
    let output = export(&material);
    let record = &output.materials[0];
    assert_relative_eq!(record.emissive_factor[0], 0.5, epsilon = 1e-6);
    assert_eq!(record.emissive_texture.as_ref().map(|info| info.index), Some(0));
    assert_eq!(output.textures[0].slot, TextureSlot::Emissive);
}

#[test]
fn hdrp_emissive_intensity() {
    let material = PropertyMaterial::new(1, "lamp", "HDRP/Lit")
        .with_float("_Metallic", 0.0)
        .with_texture("_EmissiveColorMap", None)
        .with_float("_UseEmissiveIntensity", 1.0)
        .with_color("_EmissiveColorLDR", Vec4::new(1.0, 0.5, 0.0, 1.0))
        .with_float("_EmissiveIntensity", 3.0);
    let output = export(&material);

    let record = &output.materials[0];
    assert_eq!(record.emissive_factor, [1.0, 0.5, 0.0]);
    assert_eq!(
        record.extensions.emissive_strength.map(|ext| ext.emissive_strength),
        Some(3.0)
    );
}

#[test]
fn hdrp_emissive_color_is_decomposed() {
    let material = PropertyMaterial::new(1, "lamp", "HDRP/Lit")
        .with_float("_Metallic", 0.0)
        .with_texture("_EmissiveColorMap", None)
        .with_float("_UseEmissiveIntensity", 0.0)
        .with_color("_EmissiveColor", Vec4::new(2.0, 0.0, 0.0, 1.0));
    let output = export(&material);

    let record = &output.materials[0];
    assert_relative_eq!(record.emissive_factor[0], 191.0 / 255.0);
    assert_eq!(record.emissive_factor[1], 0.0);
    assert_eq!(record.emissive_factor[2], 0.0);
    let strength = record.extensions.emissive_strength.map(|ext| ext.emissive_strength);
    assert_relative_eq!(strength.unwrap(), 510.0 / 191.0, epsilon = 1e-5);
    assert_eq!(output.extensions_used, [KHR_MATERIALS_EMISSIVE_STRENGTH]);
}

#[test]
fn normal_map_keyword_selects_bump_map() {
    let material = PropertyMaterial::new(1, "mat", "Custom/Lit")
        .with_float("_Metallic", 0.0)
        .with_texture("_NormalMap", tex(3))
        .with_texture("_BumpMap", tex(2))
        .with_float("_BumpScale", 0.5);

    let output = export(&material);
    let normal = output.materials[0].normal_texture.as_ref().unwrap();
    assert_eq!(output.textures[normal.info.index as usize].handle, TextureHandle(3));
    assert_eq!(normal.scale, 0.5);

    let output = export(&material.with_keyword("_NORMALMAP"));
    let normal = output.materials[0].normal_texture.as_ref().unwrap();
    let baked = &output.textures[normal.info.index as usize];
    assert_eq!(baked.handle, TextureHandle(2));
    assert_eq!(baked.settings.conversion, ChannelConversion::NormalMap);
}

#[test]
fn plain_xyz_normal_map() {
    let material = PropertyMaterial::new(1, "mat", "glTF/PbrMetallicRoughness")
        .with_float("_Metallic", 0.0)
        .with_texture("_BumpMap", tex(2))
        .with_float("_NormalMapFormatXYZ", 1.0);
    let output = export(&material);

    // glTF shaders use `_BumpMap` without a keyword.
    assert!(output.materials[0].normal_texture.is_some());
    let settings = output.textures[0].settings;
    assert_eq!(settings.conversion, ChannelConversion::None);
    assert_eq!(settings.color_space, ColorSpace::Linear);
}

#[test]
fn texture_transform_on_base_color() {
    let material = PropertyMaterial::new(1, "mat", "Standard")
        .with_float("_Metallic", 0.0)
        .with_tiled_texture(
            "_MainTex",
            tex(1),
            TextureTiling {
                scale: Vec2::new(2.0, 2.0),
                offset: Vec2::ZERO,
            },
        );

    let output = export(&material);
    let info = output.materials[0]
        .pbr_metallic_roughness
        .as_ref()
        .unwrap()
        .base_color_texture
        .clone()
        .unwrap();
    let transform = info.extensions.texture_transform.unwrap();
    assert_eq!(transform.scale, [2.0, 2.0]);
    assert_eq!(transform.offset, [0.0, -1.0]);
    assert_eq!(output.extensions_used, [KHR_TEXTURE_TRANSFORM]);

    let settings = ExportSettings {
        texture_transform: false,
        ..Default::default()
    };
    let output = export_with(settings, &material);
    let info = output.materials[0]
        .pbr_metallic_roughness
        .as_ref()
        .unwrap()
        .base_color_texture
        .clone()
        .unwrap();
    assert!(info.extensions.texture_transform.is_none());
    assert!(output.extensions_used.is_empty());
}

#[test]
fn occlusion_uv_channel() {
    let material = PropertyMaterial::new(1, "mat", "Standard")
        .with_float("_Metallic", 0.0)
        .with_texture("_OcclusionMap", tex(4))
        .with_float("_OcclusionTextureTexCoord", 1.0);
    let output = export(&material);

    let occlusion = output.materials[0].occlusion_texture.as_ref().unwrap();
    assert_eq!(occlusion.info.tex_coord, 1);
    assert_eq!(occlusion.strength, 1.0);
}

#[test]
fn textures_shared_between_materials() {
    let a = PropertyMaterial::new(1, "a", "Standard")
        .with_float("_Metallic", 0.0)
        .with_texture("_MainTex", tex(1));
    let b = PropertyMaterial::new(2, "b", "Legacy Shaders/Diffuse").with_texture("_MainTex", tex(1));

    let mut session = ExportSession::new(ExportSettings::default());
    session.export_material(&a);
    session.export_material(&b);
    let output = session.finish();

    assert_eq!(output.textures.len(), 1);
    for record in &output.materials {
        let pbr = record.pbr_metallic_roughness.as_ref().unwrap();
        assert_eq!(pbr.base_color_texture.as_ref().map(|info| info.index), Some(0));
    }
}
