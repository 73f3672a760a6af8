//! # bitslot
//!
//! A library for reading and writing scalar numeric fields embedded at
//! arbitrary bit positions inside byte buffers.
//!
//! Describe a field once by its start bit, width in bits and data type, then
//! compile it into an [accessor](accessor::Accessor) that holds precomputed
//! offsets and masks. The accessor borrows a buffer only for the duration of
//! a single read or write, so one accessor serves any number of buffers.
//! Typical callers are binary-protocol and telemetry-frame decoders pulling
//! heterogeneous fields out of densely packed records.
//!
//! ## Example
//!
//! ```
//! use bitslot::accessor::Accessor;
//! use bitslot::field::{DataType, Field};
//!
//! let field = Field::new(8, 16, DataType::UnsignedIntegerLittleEndian);
//! let accessor = Accessor::compile(&field).unwrap();
//!
//! let mut data = [0u8; 4];
//! accessor.write_u64(0x1234, &mut data).unwrap();
//! assert_eq!(data, [0x00, 0x34, 0x12, 0x00]);
//! assert_eq!(accessor.read_u64(&data).unwrap(), 0x1234);
//! ```

pub mod accessor;
pub mod codec;
pub mod endian;
pub mod errors;
pub mod field;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;
