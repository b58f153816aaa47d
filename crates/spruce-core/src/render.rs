//! Presentation adapter and CPU-side instance buffers.
//!
//! [`present`] copies the engine's current frame into any [`Renderer`]
//! without touching or caching morph state. [`InstanceBuffers`] is the
//! stock renderer: tightly packed `#[repr(C)]` records a GPU backend can
//! upload as-is, plus dirty flags.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::engine::MorphEngine;
use crate::particle::OrnamentClass;

/// A buffer the renderer uploads independently.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BufferChannel {
    Foliage,
    Ornaments(OrnamentClass),
}

impl BufferChannel {
    pub const ALL: [BufferChannel; 4] = [
        BufferChannel::Foliage,
        BufferChannel::Ornaments(OrnamentClass::Heavy),
        BufferChannel::Ornaments(OrnamentClass::Medium),
        BufferChannel::Ornaments(OrnamentClass::Light),
    ];

    pub fn index(self) -> usize {
        match self {
            BufferChannel::Foliage => 0,
            BufferChannel::Ornaments(class) => 1 + class.index(),
        }
    }

    /// Inverse of [`index`](Self::index). `None` outside `0..4`.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Per-instance sink the adapter writes into.
pub trait Renderer {
    fn write_foliage(&mut self, index: usize, position: Vec3, color: Vec3, alpha: f32, size: f32);
    fn write_ornament(&mut self, class: OrnamentClass, slot: usize, transform: Mat4, color: Vec3);
    /// Flag a buffer for re-upload.
    fn mark_dirty(&mut self, channel: BufferChannel);
}

/// Write the engine's current frame into `renderer` and flag every buffer dirty.
pub fn present<R: Renderer + ?Sized>(engine: &MorphEngine, renderer: &mut R) {
    let frame = engine.frame();

    for (i, sample) in frame.foliage.iter().enumerate() {
        renderer.write_foliage(i, sample.position, sample.color, sample.alpha, sample.size);
    }
    renderer.mark_dirty(BufferChannel::Foliage);

    let ornaments = engine.ornaments();
    let records = ornaments.records();
    for class in OrnamentClass::ALL {
        let poses = frame.ornaments(class);
        for (slot, (pose, &id)) in poses.iter().zip(ornaments.slots(class)).enumerate() {
            renderer.write_ornament(class, slot, pose.matrix(), records[id as usize].color);
        }
        renderer.mark_dirty(BufferChannel::Ornaments(class));
    }
}

/// GPU-compatible foliage point: 32 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FoliageVertex {
    pub position: [f32; 3], // 12 bytes
    pub alpha: f32,         //  4 bytes
    pub color: [f32; 3],    // 12 bytes
    pub size: f32,          //  4 bytes
}

/// GPU-compatible ornament instance: 80 bytes, column-major transform.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct OrnamentInstance {
    pub transform: [f32; 16], // 64 bytes
    pub color: [f32; 3],      // 12 bytes
    pub _pad: f32,            //  4 bytes
}

impl Default for OrnamentInstance {
    fn default() -> Self {
        Self {
            transform: Mat4::IDENTITY.to_cols_array(),
            color: [1.0; 3],
            _pad: 0.0,
        }
    }
}

/// CPU copies of every per-instance buffer, with dirty tracking.
pub struct InstanceBuffers {
    foliage: Vec<FoliageVertex>,
    ornaments: [Vec<OrnamentInstance>; 3],
    dirty: [bool; 4],
}

impl InstanceBuffers {
    pub fn new(foliage_count: usize, class_counts: [usize; 3]) -> Self {
        Self {
            foliage: vec![FoliageVertex::default(); foliage_count],
            ornaments: class_counts.map(|n| vec![OrnamentInstance::default(); n]),
            dirty: [false; 4],
        }
    }

    /// Buffers sized for `engine`'s populations.
    pub fn for_engine(engine: &MorphEngine) -> Self {
        let ornaments = engine.ornaments();
        Self::new(
            engine.foliage().count,
            OrnamentClass::ALL.map(|class| ornaments.class_count(class)),
        )
    }

    pub fn foliage(&self) -> &[FoliageVertex] {
        &self.foliage
    }

    pub fn ornaments(&self, class: OrnamentClass) -> &[OrnamentInstance] {
        &self.ornaments[class.index()]
    }

    pub fn foliage_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.foliage)
    }

    pub fn ornament_bytes(&self, class: OrnamentClass) -> &[u8] {
        bytemuck::cast_slice(&self.ornaments[class.index()])
    }

    pub fn is_dirty(&self, channel: BufferChannel) -> bool {
        self.dirty[channel.index()]
    }

    /// Read and clear the dirty flag, for the uploader.
    pub fn take_dirty(&mut self, channel: BufferChannel) -> bool {
        std::mem::take(&mut self.dirty[channel.index()])
    }
}

impl Renderer for InstanceBuffers {
    fn write_foliage(&mut self, index: usize, position: Vec3, color: Vec3, alpha: f32, size: f32) {
        self.foliage[index] = FoliageVertex {
            position: position.to_array(),
            alpha,
            color: color.to_array(),
            size,
        };
    }

    fn write_ornament(&mut self, class: OrnamentClass, slot: usize, transform: Mat4, color: Vec3) {
        self.ornaments[class.index()][slot] = OrnamentInstance {
            transform: transform.to_cols_array(),
            color: color.to_array(),
            _pad: 0.0,
        };
    }

    fn mark_dirty(&mut self, channel: BufferChannel) {
        self.dirty[channel.index()] = true;
    }
}
