//! FreeD frame encoding.
//!
//! Pure functions only: no I/O, no allocation, no shared state. Safe to call from any
//! number of threads.

mod builder;
mod checksum;
mod field;

pub use builder::build_frame;
pub use checksum::{CHECKSUM_SEED, freed_checksum};
pub use field::{
    FieldValue, POSITION_SCALE, ROTATION_SCALE, encode_integer, encode_position, encode_rotation,
};
