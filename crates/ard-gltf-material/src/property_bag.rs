use std::collections::{BTreeMap, BTreeSet};

use ard_math::Vec4;
use serde::{Deserialize, Serialize};

use crate::{
    error::ExportError,
    material::{MaterialId, PropertyType, SourceMaterial, TextureRef, TextureTiling},
};

/// Render queue of ordinary opaque geometry.
pub const DEFAULT_RENDER_QUEUE: i32 = 2000;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum PropertyValue {
    Float(f32),
    Color(Vec4),
    Int(i32),
    Texture(TextureProperty),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct TextureProperty {
    #[serde(default)]
    pub texture: Option<TextureRef>,
    /// `None` when the shader declares the texture without a tiling property.
    #[serde(default)]
    pub tiling: Option<TextureTiling>,
}

/// An in-memory material described by plain property values.
///
/// This is what the oven reads from disk and what tests build materials with. Engines with
/// their own material objects implement [`SourceMaterial`] directly instead.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PropertyMaterial {
    pub id: MaterialId,
    pub name: String,
    pub shader: String,
    #[serde(default = "default_render_queue")]
    pub render_queue: i32,
    #[serde(default)]
    pub render_type: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    #[serde(default)]
    pub keywords: BTreeSet<String>,
}

fn default_render_queue() -> i32 {
    DEFAULT_RENDER_QUEUE
}

impl PropertyMaterial {
    pub fn new(id: u64, name: impl Into<String>, shader: impl Into<String>) -> Self {
        Self {
            id: MaterialId(id),
            name: name.into(),
            shader: shader.into(),
            render_queue: DEFAULT_RENDER_QUEUE,
            render_type: None,
            properties: BTreeMap::default(),
            keywords: BTreeSet::default(),
        }
    }

    /// Parses a list of materials from RON.
    pub fn list_from_ron(src: &str) -> Result<Vec<Self>, ExportError> {
        Ok(ron::from_str(src)?)
    }

    pub fn with_float(mut self, name: impl Into<String>, value: f32) -> Self {
        self.properties
            .insert(name.into(), PropertyValue::Float(value));
        self
    }

    pub fn with_color(mut self, name: impl Into<String>, value: Vec4) -> Self {
        self.properties
            .insert(name.into(), PropertyValue::Color(value));
        self
    }

    pub fn with_int(mut self, name: impl Into<String>, value: i32) -> Self {
        self.properties.insert(name.into(), PropertyValue::Int(value));
        self
    }

    /// Declares a texture slot without a tiling property.
    pub fn with_texture(mut self, name: impl Into<String>, texture: Option<TextureRef>) -> Self {
        self.properties.insert(
            name.into(),
            PropertyValue::Texture(TextureProperty {
                texture,
                tiling: None,
            }),
        );
        self
    }

    /// Declares a texture slot with its native tiling.
    pub fn with_tiled_texture(
        mut self,
        name: impl Into<String>,
        texture: Option<TextureRef>,
        tiling: TextureTiling,
    ) -> Self {
        self.properties.insert(
            name.into(),
            PropertyValue::Texture(TextureProperty {
                texture,
                tiling: Some(tiling),
            }),
        );
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }

    pub fn with_render_type(mut self, tag: impl Into<String>) -> Self {
        self.render_type = Some(tag.into());
        self
    }

    pub fn with_render_queue(mut self, queue: i32) -> Self {
        self.render_queue = queue;
        self
    }
}

impl SourceMaterial for PropertyMaterial {
    #[inline]
    fn id(&self) -> MaterialId {
        self.id
    }

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn shader_name(&self) -> &str {
        &self.shader
    }

    #[inline]
    fn render_queue(&self) -> i32 {
        self.render_queue
    }

    #[inline]
    fn render_type(&self) -> Option<&str> {
        self.render_type.as_deref()
    }

    fn property_type(&self, name: &str) -> Option<PropertyType> {
        self.properties.get(name).map(|value| match value {
            PropertyValue::Float(_) => PropertyType::Float,
            PropertyValue::Color(_) => PropertyType::Color,
            PropertyValue::Int(_) => PropertyType::Int,
            PropertyValue::Texture(_) => PropertyType::Texture,
        })
    }

    fn float(&self, name: &str) -> Option<f32> {
        match self.properties.get(name)? {
            PropertyValue::Float(value) => Some(*value),
            PropertyValue::Int(value) => Some(*value as f32),
            _ => None,
        }
    }

    fn color(&self, name: &str) -> Option<Vec4> {
        match self.properties.get(name)? {
            PropertyValue::Color(value) => Some(*value),
            _ => None,
        }
    }

    fn int(&self, name: &str) -> Option<i32> {
        match self.properties.get(name)? {
            PropertyValue::Int(value) => Some(*value),
            PropertyValue::Float(value) => Some(value.round() as i32),
            _ => None,
        }
    }

    fn texture(&self, name: &str) -> Option<TextureRef> {
        match self.properties.get(name)? {
            PropertyValue::Texture(tex) => tex.texture,
            _ => None,
        }
    }

    fn texture_tiling(&self, name: &str) -> Option<TextureTiling> {
        match self.properties.get(name)? {
            PropertyValue::Texture(tex) => tex.tiling,
            _ => None,
        }
    }

    #[inline]
    fn is_keyword_enabled(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{TextureDimension, TextureHandle};

    #[test]
    fn property_queries() {
        let tex = TextureRef {
            handle: TextureHandle(7),
            dimension: TextureDimension::Tex2D,
        };
        let material = PropertyMaterial::new(1, "mat", "Standard")
            .with_float("_Cull", 2.0)
            .with_texture("_MainTex", Some(tex))
            .with_texture("_BumpMap", None)
            .with_keyword("_NORMALMAP");

        assert_eq!(material.property_type("_Cull"), Some(PropertyType::Float));
        assert_eq!(material.int("_Cull"), Some(2));
        assert!(material.has_property("_BumpMap", PropertyType::Texture));
        assert_eq!(material.texture("_BumpMap"), None);
        assert_eq!(material.texture("_MainTex"), Some(tex));
        assert_eq!(material.texture_tiling("_MainTex"), None);
        assert!(material.is_keyword_enabled("_NORMALMAP"));
        assert!(!material.is_keyword_enabled("_EMISSION"));
    }

    #[test]
    fn materials_from_ron() {
        let src = r#"[
            (
                id: (3),
                name: "rock",
                shader: "Standard",
                render_type: Some("Opaque"),
                properties: {
                    "_Metallic": Float(0.25),
                    "_MainTex": Texture((
                        texture: Some((handle: (9), dimension: Tex2D)),
                    )),
                },
                keywords: ["_NORMALMAP"],
            ),
        ]"#;

        let materials = PropertyMaterial::list_from_ron(src).unwrap();
        assert_eq!(materials.len(), 1);

        let rock = &materials[0];
        assert_eq!(rock.id(), MaterialId(3));
        assert_eq!(rock.render_queue(), DEFAULT_RENDER_QUEUE);
        assert_eq!(rock.render_type(), Some("Opaque"));
        assert_eq!(rock.float("_Metallic"), Some(0.25));
        assert_eq!(rock.texture("_MainTex").map(|t| t.handle), Some(TextureHandle(9)));
        assert!(rock.is_keyword_enabled("_NORMALMAP"));
    }
}
