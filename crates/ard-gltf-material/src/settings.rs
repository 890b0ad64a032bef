use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Render pipeline the source materials were authored for. Decides which alpha test keyword
/// is honored.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RenderPipeline {
    #[default]
    BuiltIn,
    Scriptable,
}

/// Options for an export session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExportSettings {
    /// Write material names into the document.
    pub export_names: bool,
    /// Allow `KHR_materials_emissive_strength` for emission brighter than 1.
    pub emissive_strength: bool,
    /// Allow `KHR_texture_transform` on texture infos.
    pub texture_transform: bool,
    pub render_pipeline: RenderPipeline,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            export_names: true,
            emissive_strength: true,
            texture_transform: true,
            render_pipeline: RenderPipeline::BuiltIn,
        }
    }
}

impl ExportSettings {
    pub fn from_ron(src: &str) -> Result<Self, ExportError> {
        Ok(ron::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_ron(&src)
    }

    /// The alpha test keyword of the configured pipeline.
    #[inline]
    pub fn alpha_test_keyword(&self) -> &'static str {
        match self.render_pipeline {
            RenderPipeline::BuiltIn => crate::aliases::BUILTIN_ALPHA_TEST_KEYWORD,
            RenderPipeline::Scriptable => crate::aliases::ALPHA_TEST_KEYWORD,
        }
    }
}
