use ard_math::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Stable identity of a source material. Used as the memoization key for a session.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaterialId(pub u64);

/// Identity of a source texture. The texture encoder resolves handles on its own.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureHandle(pub u64);

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextureDimension {
    Tex2D,
    Tex2DArray,
    Tex3D,
    Cube,
    CubeArray,
}

/// A texture assigned to a material slot.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureRef {
    pub handle: TextureHandle,
    pub dimension: TextureDimension,
}

/// Native per-texture tiling of the engine (bottom-left UV origin).
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq)]
pub struct TextureTiling {
    pub scale: Vec2,
    pub offset: Vec2,
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyType {
    Float,
    Color,
    Int,
    Texture,
}

/// A shader-driven material as exposed by the engine.
///
/// Everything is name based. A material only answers what its shader declares, so most
/// queries return `None` for the majority of names asked about during export.
pub trait SourceMaterial {
    fn id(&self) -> MaterialId;

    fn name(&self) -> &str;

    fn shader_name(&self) -> &str;

    fn render_queue(&self) -> i32;

    /// The `RenderType` tag of the shader, if any.
    fn render_type(&self) -> Option<&str>;

    /// Type of the property with the given name, or `None` if the shader doesn't declare it.
    fn property_type(&self, name: &str) -> Option<PropertyType>;

    fn float(&self, name: &str) -> Option<f32>;

    fn color(&self, name: &str) -> Option<Vec4>;

    fn int(&self, name: &str) -> Option<i32>;

    /// The texture assigned to a texture property. `None` when the property is missing or
    /// nothing is assigned.
    fn texture(&self, name: &str) -> Option<TextureRef>;

    /// Scale and offset of a texture property. `None` when the texture has no tiling property.
    fn texture_tiling(&self, name: &str) -> Option<TextureTiling>;

    fn is_keyword_enabled(&self, keyword: &str) -> bool;

    #[inline]
    fn has_property(&self, name: &str, ty: PropertyType) -> bool {
        self.property_type(name) == Some(ty)
    }

    #[inline]
    fn has_any_property(&self, name: &str) -> bool {
        self.property_type(name).is_some()
    }
}

impl TextureRef {
    #[inline]
    pub fn is_2d(&self) -> bool {
        self.dimension == TextureDimension::Tex2D
    }
}

impl TextureTiling {
    pub const IDENTITY: TextureTiling = TextureTiling {
        scale: Vec2::ONE,
        offset: Vec2::ZERO,
    };
}

impl Default for TextureTiling {
    fn default() -> Self {
        Self::IDENTITY
    }
}
