//! Core module: Fixed-Capacity Byte Buffer
//!
//! Prinsip desain:
//! - No-Allocation: Storage dialokasi sekali saat `new`, tidak pernah tumbuh
//! - Big-Endian: Semua integer multi-byte MSB first, satu decode path
//! - Dual positioning: Absolute offset dan cursor di atas storage yang sama

mod byte_buffer;
mod endian;

pub use byte_buffer::ByteBuffer;
