use serde::{Deserialize, Serialize};

use crate::{
    aliases,
    quirks::{shader_quirks, ShaderQuirks},
    resolve::PropertyResolver,
};

/// Which translator a material goes through.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShadingModel {
    Unlit,
    MetallicRoughness,
    SpecularGlossiness,
    CommonConstant,
    /// Nothing recognizable. Exported as a minimal metallic-roughness material.
    Fallback,
}

/// Picks the shading model of a material. Checks run in priority order and the first match
/// wins, so a material that looks like several models gets the earliest one.
pub fn classify(resolver: &PropertyResolver) -> ShadingModel {
    let quirks = shader_quirks(resolver.material().shader_name());

    if quirks.contains(ShaderQuirks::UNLIT) {
        ShadingModel::Unlit
    } else if resolver.exists(&aliases::PBR_METALLIC_ROUGHNESS) {
        ShadingModel::MetallicRoughness
    } else if resolver.exists(&aliases::PBR_SPECULAR_GLOSSINESS) {
        ShadingModel::SpecularGlossiness
    } else if resolver.exists(&aliases::COMMON_CONSTANT) {
        ShadingModel::CommonConstant
    } else {
        ShadingModel::Fallback
    }
}
