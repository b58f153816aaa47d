use glam::Vec3;

use crate::materials::Swatch;

/// Weight class of an ornament. Fixed at generation; selects both the
/// material and the damping profile.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum OrnamentClass {
    Heavy  = 0, // Gift boxes: slow, solid
    Medium = 1, // Baubles
    Light  = 2, // Stars: fast, twinkling
}

impl OrnamentClass {
    pub const ALL: [OrnamentClass; 3] = [
        OrnamentClass::Heavy,
        OrnamentClass::Medium,
        OrnamentClass::Light,
    ];

    /// Dense index, usable for per-class arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index). `None` outside `0..3`.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Map a uniform draw to a class: top 15% heavy, next 35% light, rest medium.
    pub fn classify(draw: f32) -> Self {
        if draw > 0.85 {
            OrnamentClass::Heavy
        } else if draw > 0.5 {
            OrnamentClass::Light
        } else {
            OrnamentClass::Medium
        }
    }
}

/// SoA storage for foliage particles. Immutable once generated.
pub struct FoliageSet {
    pub count: usize,
    pub tree_position: Vec<Vec3>,
    pub scatter_position: Vec<Vec3>,
    /// Per-particle random phase in [0,1), staggers arrival and sparkle.
    pub phase: Vec<f32>,
}

impl FoliageSet {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            count: 0,
            tree_position: Vec::with_capacity(count),
            scatter_position: Vec::with_capacity(count),
            phase: Vec::with_capacity(count),
        }
    }

    pub fn push(&mut self, tree: Vec3, scatter: Vec3, phase: f32) {
        self.tree_position.push(tree);
        self.scatter_position.push(scatter);
        self.phase.push(phase);
        self.count += 1;
    }
}

/// One discrete ornament. Everything but the engine-owned progress.
#[derive(Clone, Debug, PartialEq)]
pub struct OrnamentRecord {
    pub id: u32,
    pub class: OrnamentClass,
    pub swatch: Swatch,
    pub color: Vec3,
    pub tree_position: Vec3,
    pub scatter_position: Vec3,
    /// Base Euler angles (XYZ), each in [0, pi).
    pub rotation: Vec3,
    pub scale: f32,
}

/// The ornament population, partitioned by class once at generation.
pub struct OrnamentSet {
    records: Vec<OrnamentRecord>,
    slots: [Vec<u32>; 3],
}

impl OrnamentSet {
    /// Build from records whose ids are `0..records.len()` in order.
    ///
    /// Panics if the ids are not dense and ordered.
    pub fn new(records: Vec<OrnamentRecord>) -> Self {
        let mut slots: [Vec<u32>; 3] = Default::default();
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id as usize, i, "ornament ids must be dense and ordered");
            slots[record.class.index()].push(record.id);
        }
        Self { records, slots }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest id, or `None` for an empty set.
    pub fn max_id(&self) -> Option<u32> {
        self.records.last().map(|r| r.id)
    }

    pub fn records(&self) -> &[OrnamentRecord] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&OrnamentRecord> {
        self.records.get(id as usize)
    }

    /// Ids of one class, in instance-slot order.
    pub fn slots(&self, class: OrnamentClass) -> &[u32] {
        &self.slots[class.index()]
    }

    pub fn class_count(&self, class: OrnamentClass) -> usize {
        self.slots[class.index()].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, class: OrnamentClass) -> OrnamentRecord {
        OrnamentRecord {
            id,
            class,
            swatch: Swatch::Gold,
            color: Swatch::Gold.rgb(),
            tree_position: Vec3::ZERO,
            scatter_position: Vec3::ONE,
            rotation: Vec3::ZERO,
            scale: 0.3,
        }
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(OrnamentClass::classify(0.0), OrnamentClass::Medium);
        assert_eq!(OrnamentClass::classify(0.5), OrnamentClass::Medium);
        assert_eq!(OrnamentClass::classify(0.51), OrnamentClass::Light);
        assert_eq!(OrnamentClass::classify(0.85), OrnamentClass::Light);
        assert_eq!(OrnamentClass::classify(0.86), OrnamentClass::Heavy);
        assert_eq!(OrnamentClass::classify(0.999), OrnamentClass::Heavy);
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        for class in OrnamentClass::ALL {
            assert_eq!(OrnamentClass::from_index(class.index() as u8), Some(class));
        }
        assert_eq!(OrnamentClass::from_index(3), None);
        assert_eq!(OrnamentClass::from_index(200), None);
    }

    #[test]
    fn test_partition_preserves_order() {
        let set = OrnamentSet::new(vec![
            record(0, OrnamentClass::Light),
            record(1, OrnamentClass::Heavy),
            record(2, OrnamentClass::Light),
            record(3, OrnamentClass::Medium),
        ]);
        assert_eq!(set.slots(OrnamentClass::Light), &[0, 2]);
        assert_eq!(set.slots(OrnamentClass::Heavy), &[1]);
        assert_eq!(set.slots(OrnamentClass::Medium), &[3]);
        assert_eq!(set.max_id(), Some(3));
    }

    #[test]
    #[should_panic(expected = "dense")]
    fn test_sparse_ids_rejected() {
        OrnamentSet::new(vec![record(0, OrnamentClass::Heavy), record(5, OrnamentClass::Heavy)]);
    }
}
