//! wirebuf - Fixed-Capacity Big-Endian Byte Buffer
//!
//! Arsitektur:
//! - Zero-Growth: Storage dialokasi sekali, tidak pernah realloc
//! - Big-Endian: Format wire untuk semua integer multi-byte
//! - Staging cycle: write → `flip()` → read → `reset()`
//!
//! ```
//! use wirebuf::ByteBuffer;
//!
//! let mut buf = ByteBuffer::new(16)?;
//! buf.write_u16(0x0102);
//! buf.write_i32(-7);
//! buf.flip();
//!
//! assert_eq!(buf.as_bytes(), &[0x01, 0x02, 0xFF, 0xFF, 0xFF, 0xF9]);
//! assert_eq!(buf.read_u16(), 0x0102);
//! assert_eq!(buf.read_i32(), -7);
//! # Ok::<(), wirebuf::BufferError>(())
//! ```

pub mod core;
pub mod error;

pub use crate::core::ByteBuffer;
pub use error::{BufferError, BufferResult};
