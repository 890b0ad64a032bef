//! Translates shader driven engine materials into glTF 2.0 materials.
//!
//! Materials are read through [`SourceMaterial`](material::SourceMaterial), a name based view
//! of shader properties and keywords. An [`ExportSession`](session::ExportSession) classifies
//! each material, runs the matching translator and collects the resulting records together
//! with the textures they reference and the extensions they use.

pub mod aliases;
pub mod classify;
pub mod document;
pub mod emissive;
pub mod error;
pub mod material;
pub mod property_bag;
pub mod quirks;
pub mod record;
pub mod resolve;
pub mod session;
pub mod settings;
pub mod texture;
pub mod transform;
pub mod translate;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::classify::{classify, ShadingModel};
    pub use crate::error::ExportError;
    pub use crate::material::{
        MaterialId, PropertyType, SourceMaterial, TextureDimension, TextureHandle, TextureRef,
        TextureTiling,
    };
    pub use crate::property_bag::{PropertyMaterial, PropertyValue};
    pub use crate::record::MaterialRecord;
    pub use crate::resolve::{CompanionNames, PropertyResolver, SuffixCompanions};
    pub use crate::session::{Diagnostic, ExportOutput, ExportSession};
    pub use crate::settings::{ExportSettings, RenderPipeline};
    pub use crate::texture::{TextureExport, TextureExportSettings, TextureSlot};
}
