use ard_math::Vec2;

use crate::{
    aliases,
    material::{PropertyType, TextureTiling},
    record::TextureTransform,
    resolve::PropertyResolver,
};

/// UV transform of a texture property in engine conventions (bottom-left origin).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UvTransform {
    pub scale: Vec2,
    pub offset: Vec2,
    pub rotation: f32,
    pub tex_coord: u32,
}

impl UvTransform {
    pub const IDENTITY: UvTransform = UvTransform {
        scale: Vec2::ONE,
        offset: Vec2::ZERO,
        rotation: 0.0,
        tex_coord: 0,
    };

    /// If scale, offset and rotation do nothing. The UV channel is not considered.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.scale == Vec2::ONE && self.offset == Vec2::ZERO && self.rotation == 0.0
    }

    /// Converts into `KHR_texture_transform` form. glTF puts the UV origin at the top-left so
    /// the vertical offset is flipped.
    pub fn to_gltf(&self) -> TextureTransform {
        TextureTransform {
            offset: [self.offset.x, 1.0 - self.offset.y - self.scale.y],
            rotation: self.rotation,
            scale: [self.scale.x, self.scale.y],
            tex_coord: if self.tex_coord != 0 {
                Some(self.tex_coord)
            } else {
                None
            },
        }
    }
}

/// Finds the UV transform of the texture property `texture`.
///
/// Returns `None` when there is nothing worth exporting: the transform is the identity on UV
/// channel 0, or the shader has texture transforms switched off.
pub fn derive_texture_transform(
    resolver: &PropertyResolver,
    texture: &str,
) -> Option<TextureTransform> {
    if resolver.has_any(aliases::TEXTURE_TRANSFORM_TOGGLE)
        && !resolver.keyword(aliases::TEXTURE_TRANSFORM_KEYWORD)
    {
        return None;
    }

    let own_tiling = resolver.tiling(texture);
    let tiling = own_tiling.unwrap_or(TextureTiling::IDENTITY);
    let mut transform = UvTransform {
        scale: tiling.scale,
        offset: tiling.offset,
        rotation: resolver.rotation(texture).unwrap_or(0.0),
        tex_coord: resolver.tex_coord(texture).unwrap_or(0),
    };

    // Textures without their own tiling follow the base color texture.
    if transform.is_identity() && own_tiling.is_none() {
        if let Some((tiling, rotation)) = base_color_tiling(resolver) {
            transform.scale = tiling.scale;
            transform.offset = tiling.offset;
            transform.rotation = rotation;
        }
    }

    if transform.is_identity() && transform.tex_coord == 0 {
        return None;
    }

    Some(transform.to_gltf())
}

fn base_color_tiling(resolver: &PropertyResolver) -> Option<(TextureTiling, f32)> {
    aliases::BASE_COLOR_TEXTURE.names().iter().find_map(|&name| {
        if !resolver.has(name, PropertyType::Texture) {
            return None;
        }
        let tiling = resolver.tiling(name)?;
        Some((tiling, resolver.rotation(name).unwrap_or(0.0)))
    })
}
