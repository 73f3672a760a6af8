//! JSON-deserializable field descriptions.
//!
//! Mirror types for [crate::field::Field]. They are intended to be
//! constructed from JSON (for example a frame layout shipped with your
//! application) and then converted into core `bitslot` types, either via
//! `Field::from` or directly into an accessor with
//! `Accessor::try_from(field_def)`.

use serde::{Deserialize, Serialize};

/// Interpretation of a field's bits, by name.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub enum DataTypeDef {
    SignedIntegerLittleEndian,
    UnsignedIntegerLittleEndian,
    SignedIntegerBigEndian,
    UnsignedIntegerBigEndian,
    FloatLittleEndian,
    FloatBigEndian,
}

/// Description of a single field inside a byte buffer.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct FieldDef {
    /// First bit of the field, counted from the start of the buffer.
    pub start_bit: u32,
    /// Width of the field in bits.
    pub width_bits: u32,
    /// How the field's bits are interpreted.
    pub data_type: DataTypeDef,
}
