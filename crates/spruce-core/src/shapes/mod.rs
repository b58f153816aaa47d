//! Procedural placement of the two target configurations.
//!
//! `primitives` holds the cone and sphere samplers; `foliage` and
//! `ornaments` build the full populations from a [`crate::random::RandomSource`].

pub mod primitives;
pub mod foliage;
pub mod ornaments;

pub use foliage::generate_foliage;
pub use ornaments::generate_ornaments;
