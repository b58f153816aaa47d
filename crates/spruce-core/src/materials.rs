use glam::Vec3;

use crate::particle::OrnamentClass;

/// Named ornament colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Swatch {
    Gold,
    DarkGoldenrod,
    Goldenrod,
    DarkGold,
    Platinum,
    RacingGreen,
    DeepRed,
    /// Only used by light ornaments; not part of [`PALETTE`].
    White,
}

/// Palette heavy and medium ornaments draw from uniformly.
pub const PALETTE: [Swatch; 7] = [
    Swatch::Gold,
    Swatch::DarkGoldenrod,
    Swatch::Goldenrod,
    Swatch::DarkGold,
    Swatch::Platinum,
    Swatch::RacingGreen,
    Swatch::DeepRed,
];

/// Probability that a light ornament is gold rather than white.
pub const LIGHT_GOLD_CHANCE: f32 = 0.7;

impl Swatch {
    pub fn code(self) -> u32 {
        match self {
            Swatch::Gold => 0xFFD700,
            Swatch::DarkGoldenrod => 0xC5A028,
            Swatch::Goldenrod => 0xDAA520,
            Swatch::DarkGold => 0xB8860B,
            Swatch::Platinum => 0xE5E4E2,
            Swatch::RacingGreen => 0x004225,
            Swatch::DeepRed => 0x3B0000,
            Swatch::White => 0xFFFFFF,
        }
    }

    /// `#RRGGBB`, as CSS and three.js take it.
    pub fn hex(self) -> String {
        format!("#{:06X}", self.code())
    }

    /// 0..1 RGB.
    pub fn rgb(self) -> Vec3 {
        let code = self.code();
        Vec3::new(
            ((code >> 16) & 0xFF) as f32 / 255.0,
            ((code >> 8) & 0xFF) as f32 / 255.0,
            (code & 0xFF) as f32 / 255.0,
        )
    }

    /// Pick the swatch for an ornament of `class` from one uniform draw.
    pub fn for_class(class: OrnamentClass, draw: f32) -> Swatch {
        match class {
            OrnamentClass::Light => {
                if draw < LIGHT_GOLD_CHANCE {
                    Swatch::Gold
                } else {
                    Swatch::White
                }
            }
            OrnamentClass::Heavy | OrnamentClass::Medium => {
                let index = ((draw * PALETTE.len() as f32) as usize).min(PALETTE.len() - 1);
                PALETTE[index]
            }
        }
    }
}

/// Instance mesh each class is drawn with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MeshKind {
    Box,
    Sphere,
    Octahedron,
}

/// Surface look for one ornament class, handed to the renderer as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialPreset {
    pub mesh: MeshKind,
    pub roughness: f32,
    pub metalness: f32,
    pub env_map_intensity: f32,
    pub emissive_intensity: f32,
    /// Stars skip tone mapping so they blow out under bloom.
    pub tone_mapped: bool,
}

impl MaterialPreset {
    /// Reflective gift box.
    pub const HEAVY: Self = Self {
        mesh: MeshKind::Box,
        roughness: 0.15,
        metalness: 0.9,
        env_map_intensity: 2.0,
        emissive_intensity: 0.0,
        tone_mapped: true,
    };

    /// Highly polished bauble.
    pub const MEDIUM: Self = Self {
        mesh: MeshKind::Sphere,
        roughness: 0.05,
        metalness: 1.0,
        env_map_intensity: 3.0,
        emissive_intensity: 0.0,
        tone_mapped: true,
    };

    /// Self-illuminated star.
    pub const LIGHT: Self = Self {
        mesh: MeshKind::Octahedron,
        roughness: 0.4,
        metalness: 1.0,
        env_map_intensity: 1.0,
        emissive_intensity: 2.0,
        tone_mapped: false,
    };

    pub fn for_class(class: OrnamentClass) -> Self {
        match class {
            OrnamentClass::Heavy => Self::HEAVY,
            OrnamentClass::Medium => Self::MEDIUM,
            OrnamentClass::Light => Self::LIGHT,
        }
    }
}
