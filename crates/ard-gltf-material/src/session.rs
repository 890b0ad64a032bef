use ard_log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::{
    classify::ShadingModel,
    material::{MaterialId, SourceMaterial, TextureDimension},
    record::{MaterialRecord, PbrMetallicRoughness},
    resolve::{CompanionNames, PropertyResolver, SuffixCompanions},
    settings::ExportSettings,
    texture::{TextureExport, TextureRegistry, TextureSlot},
    translate::{self, TranslateContext},
};

/// Name of the record written for a missing material.
pub const DEFAULT_MATERIAL_NAME: &str = "default";

/// Extensions a document uses, in first-use order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtensionUsage {
    used: Vec<String>,
    required: Vec<String>,
}

impl ExtensionUsage {
    /// Records that an extension was emitted. Declaring the same extension again does nothing,
    /// except that a later required declaration promotes it to required.
    pub fn declare(&mut self, name: &str, required: bool) {
        if !self.used.iter().any(|used| used == name) {
            self.used.push(name.to_owned());
        }

        if required && !self.required.iter().any(|req| req == name) {
            self.required.push(name.to_owned());
        }
    }

    #[inline]
    pub fn is_used(&self, name: &str) -> bool {
        self.used.iter().any(|used| used == name)
    }

    #[inline]
    pub fn used(&self) -> &[String] {
        &self.used
    }

    #[inline]
    pub fn required(&self) -> &[String] {
        &self.required
    }
}

/// Something that was dropped from the output.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Only 2D textures can be referenced by glTF materials.
    UnsupportedTexture {
        material: String,
        slot: TextureSlot,
        dimension: TextureDimension,
    },
}

/// Mutable state shared by every material of a session.
#[derive(Debug, Default)]
pub struct SessionState {
    pub extensions: ExtensionUsage,
    /// Materials whose occlusion was packed into their metallic-roughness texture.
    pub occlusion_baked: FxHashSet<MaterialId>,
    pub textures: TextureRegistry,
    pub diagnostics: Vec<Diagnostic>,
}

/// Exports materials into glTF material records.
///
/// A session corresponds to one output document. Material indices returned by the session are
/// positions in [`ExportOutput::materials`] and texture indices inside the records are
/// positions in [`ExportOutput::textures`].
pub struct ExportSession {
    settings: ExportSettings,
    companions: Box<dyn CompanionNames>,
    state: SessionState,
    materials: Vec<MaterialRecord>,
    /// `None` is the key of the default material.
    exported: FxHashMap<Option<MaterialId>, u32>,
}

/// Everything a session produced.
#[derive(Debug)]
pub struct ExportOutput {
    pub materials: Vec<MaterialRecord>,
    /// Bake plan for the texture encoder. Position is the glTF texture index.
    pub textures: Vec<TextureExport>,
    pub extensions_used: Vec<String>,
    pub extensions_required: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExportSession {
    pub fn new(settings: ExportSettings) -> Self {
        Self::with_companions(settings, SuffixCompanions)
    }

    /// Creates a session that finds texture companion properties through `companions`.
    pub fn with_companions(
        settings: ExportSettings,
        companions: impl CompanionNames + 'static,
    ) -> Self {
        Self {
            settings,
            companions: Box::new(companions),
            state: SessionState::default(),
            materials: Vec::default(),
            exported: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    #[inline]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[inline]
    pub fn materials(&self) -> &[MaterialRecord] {
        &self.materials
    }

    #[inline]
    pub fn material(&self, index: u32) -> Option<&MaterialRecord> {
        self.materials.get(index as usize)
    }

    /// Exports a material, or the default material for `None`.
    #[inline]
    pub fn export(&mut self, material: Option<&dyn SourceMaterial>) -> u32 {
        match material {
            Some(material) => self.export_material(material),
            None => self.export_default_material(),
        }
    }

    /// Exports a material and returns its index. Materials already exported by this session
    /// return their existing index.
    pub fn export_material(&mut self, material: &dyn SourceMaterial) -> u32 {
        let key = Some(material.id());
        if let Some(&index) = self.exported.get(&key) {
            return index;
        }

        let resolver = PropertyResolver::new(material, &*self.companions);
        let mut cx = TranslateContext {
            resolver,
            settings: &self.settings,
            state: &mut self.state,
        };
        let record = translate::translate_material(&mut cx);

        debug!(
            "material `{}` ({}) exported as {:?}",
            material.name(),
            material.shader_name(),
            record.model
        );

        self.push(key, record)
    }

    /// Exports the material used for geometry without a material.
    pub fn export_default_material(&mut self) -> u32 {
        if let Some(&index) = self.exported.get(&None) {
            return index;
        }

        let name = self
            .settings
            .export_names
            .then(|| DEFAULT_MATERIAL_NAME.to_owned());
        let mut record = MaterialRecord::new(name, ShadingModel::Fallback);
        record.pbr_metallic_roughness = Some(PbrMetallicRoughness::dielectric());

        self.push(None, record)
    }

    pub fn finish(self) -> ExportOutput {
        let ExtensionUsage { used, required } = self.state.extensions;
        ExportOutput {
            materials: self.materials,
            textures: self.state.textures.into_textures(),
            extensions_used: used,
            extensions_required: required,
            diagnostics: self.state.diagnostics,
        }
    }

    fn push(&mut self, key: Option<MaterialId>, record: MaterialRecord) -> u32 {
        let index = self.materials.len() as u32;
        self.materials.push(record);
        self.exported.insert(key, index);
        index
    }
}
