use ard_math::Vec4;

use crate::{
    aliases::{AliasGroup, PropertyKind, TextureProperty},
    material::{PropertyType, SourceMaterial, TextureRef, TextureTiling},
};

/// A hit from an alias group.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    /// The alias that matched. Companion properties are looked up from this name.
    pub name: &'static str,
}

/// Names of the properties that accompany a texture property.
pub trait CompanionNames {
    /// Property holding the UV channel a texture samples from.
    fn tex_coord(&self, texture: &str) -> String;

    /// Property holding the UV rotation of a texture.
    fn rotation(&self, texture: &str) -> String;
}

/// The `<texture>TexCoord` / `<texture>Rotation` naming convention.
#[derive(Debug, Default, Copy, Clone)]
pub struct SuffixCompanions;

impl CompanionNames for SuffixCompanions {
    #[inline]
    fn tex_coord(&self, texture: &str) -> String {
        format!("{texture}TexCoord")
    }

    #[inline]
    fn rotation(&self, texture: &str) -> String {
        format!("{texture}Rotation")
    }
}

/// Answers property questions about one material.
#[derive(Copy, Clone)]
pub struct PropertyResolver<'a> {
    material: &'a dyn SourceMaterial,
    companions: &'a dyn CompanionNames,
}

impl<'a> PropertyResolver<'a> {
    pub fn new(material: &'a dyn SourceMaterial, companions: &'a dyn CompanionNames) -> Self {
        Self {
            material,
            companions,
        }
    }

    #[inline]
    pub fn material(&self) -> &'a dyn SourceMaterial {
        self.material
    }

    /// Returns the value of the first alias the material declares with a matching kind. Later
    /// aliases are never looked at, even if they exist too.
    pub fn resolve<K: PropertyKind>(&self, group: &AliasGroup<K>) -> Option<Resolved<K::Value>> {
        group.names().iter().find_map(|&name| {
            let ty = self.material.property_type(name)?;
            if !K::accepts(ty) {
                return None;
            }

            K::read(self.material, name).map(|value| Resolved { value, name })
        })
    }

    /// Value of the first alias, or `default` when none exist.
    #[inline]
    pub fn resolve_or<K: PropertyKind>(&self, group: &AliasGroup<K>, default: K::Value) -> K::Value {
        self.resolve(group).map(|hit| hit.value).unwrap_or(default)
    }

    /// If any alias of the group is declared.
    #[inline]
    pub fn exists<K: PropertyKind>(&self, group: &AliasGroup<K>) -> bool {
        self.resolve(group).is_some()
    }

    /// The first texture alias the material declares, if something is assigned to it. An
    /// empty slot hides later aliases.
    pub fn assigned_texture(
        &self,
        group: &AliasGroup<TextureProperty>,
    ) -> Option<(&'static str, TextureRef)> {
        let hit = self.resolve(group)?;
        hit.value.map(|texture| (hit.name, texture))
    }

    #[inline]
    pub fn has(&self, name: &str, ty: PropertyType) -> bool {
        self.material.has_property(name, ty)
    }

    #[inline]
    pub fn has_any(&self, name: &str) -> bool {
        self.material.has_any_property(name)
    }

    #[inline]
    pub fn float(&self, name: &str) -> Option<f32> {
        self.material.float(name)
    }

    #[inline]
    pub fn color(&self, name: &str) -> Option<Vec4> {
        self.material.color(name)
    }

    #[inline]
    pub fn texture(&self, name: &str) -> Option<TextureRef> {
        self.material.texture(name)
    }

    #[inline]
    pub fn keyword(&self, keyword: &str) -> bool {
        self.material.is_keyword_enabled(keyword)
    }

    #[inline]
    pub fn any_keyword(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.keyword(keyword))
    }

    /// UV channel of a texture property.
    pub fn tex_coord(&self, texture: &str) -> Option<u32> {
        let name = self.companions.tex_coord(texture);
        let channel = match self.material.property_type(&name)? {
            PropertyType::Float => self.material.float(&name)?.round() as i32,
            PropertyType::Int => self.material.int(&name)?,
            _ => return None,
        };
        Some(channel.max(0) as u32)
    }

    /// UV rotation of a texture property.
    pub fn rotation(&self, texture: &str) -> Option<f32> {
        let name = self.companions.rotation(texture);
        if !self.material.has_property(&name, PropertyType::Float) {
            return None;
        }
        self.material.float(&name)
    }

    /// Native tiling of a texture property.
    #[inline]
    pub fn tiling(&self, texture: &str) -> Option<TextureTiling> {
        self.material.texture_tiling(texture)
    }

    #[inline]
    pub fn has_tiling(&self, texture: &str) -> bool {
        self.tiling(texture).is_some()
    }
}
