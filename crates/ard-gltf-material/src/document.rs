use gltf::json as gj;

use crate::{error::ExportError, session::ExportOutput, texture::TextureExport};

impl ExportOutput {
    /// Appends the exported materials and the extension declarations to a glTF document.
    /// Returns the index of the first appended material.
    ///
    /// Texture indices inside the materials are positions in [`ExportOutput::textures`], so the
    /// document must not already contain textures unless they are rebased by the caller.
    pub fn write_into(&self, root: &mut gj::Root) -> Result<u32, ExportError> {
        let first = root.materials.len() as u32;

        for record in &self.materials {
            let material: gj::Material = serde_json::from_value(serde_json::to_value(record)?)?;
            root.materials.push(material);
        }

        for name in &self.extensions_used {
            if !root.extensions_used.contains(name) {
                root.extensions_used.push(name.clone());
            }
        }

        for name in &self.extensions_required {
            if !root.extensions_required.contains(name) {
                root.extensions_required.push(name.clone());
            }
        }

        Ok(first)
    }

    /// Appends one texture and one image per entry of the bake plan. `uri` names the file the
    /// encoder writes for a texture.
    pub fn write_textures_into(
        &self,
        root: &mut gj::Root,
        uri: impl Fn(u32, &TextureExport) -> String,
    ) -> Result<(), ExportError> {
        for (index, texture) in self.textures.iter().enumerate() {
            let source = root.images.len();
            let image: gj::Image =
                serde_json::from_value(serde_json::json!({ "uri": uri(index as u32, texture) }))?;
            let texture: gj::Texture =
                serde_json::from_value(serde_json::json!({ "source": source }))?;
            root.images.push(image);
            root.textures.push(texture);
        }

        Ok(())
    }
}
