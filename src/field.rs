//! Definition of the field specification handed to the accessor factory.

/// How a field's bits are interpreted: integer signedness or floating point,
/// and byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    SignedIntegerLittleEndian,
    UnsignedIntegerLittleEndian,
    SignedIntegerBigEndian,
    UnsignedIntegerBigEndian,
    FloatLittleEndian,
    FloatBigEndian,
}

impl DataType {
    /// Whether the field's bytes are stored most-significant first.
    pub fn is_big_endian(self) -> bool {
        matches!(
            self,
            DataType::SignedIntegerBigEndian
                | DataType::UnsignedIntegerBigEndian
                | DataType::FloatBigEndian
        )
    }

    /// Whether the field holds a two's-complement signed integer.
    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            DataType::SignedIntegerLittleEndian | DataType::SignedIntegerBigEndian
        )
    }

    /// Whether the field holds an IEEE 754 value.
    pub fn is_float(self) -> bool {
        matches!(self, DataType::FloatLittleEndian | DataType::FloatBigEndian)
    }
}

/// A single field inside a byte buffer: a contiguous run of `width_bits`
/// bits starting at `start_bit`. Bits are addressed LSB-first: bit 0 is the
/// least significant bit of the first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// First bit of the field, counted from the start of the buffer.
    pub start_bit: u32,
    /// Width of the field in bits (0..=64).
    pub width_bits: u32,
    /// Interpretation of the field's bits.
    pub data_type: DataType,
}

impl Field {
    pub fn new(start_bit: u32, width_bits: u32, data_type: DataType) -> Self {
        Field {
            start_bit,
            width_bits,
            data_type,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::DataTypeDef> for DataType {
    fn from(value: crate::serde::DataTypeDef) -> Self {
        match value {
            crate::serde::DataTypeDef::SignedIntegerLittleEndian => {
                DataType::SignedIntegerLittleEndian
            }
            crate::serde::DataTypeDef::UnsignedIntegerLittleEndian => {
                DataType::UnsignedIntegerLittleEndian
            }
            crate::serde::DataTypeDef::SignedIntegerBigEndian => DataType::SignedIntegerBigEndian,
            crate::serde::DataTypeDef::UnsignedIntegerBigEndian => {
                DataType::UnsignedIntegerBigEndian
            }
            crate::serde::DataTypeDef::FloatLittleEndian => DataType::FloatLittleEndian,
            crate::serde::DataTypeDef::FloatBigEndian => DataType::FloatBigEndian,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            start_bit: value.start_bit,
            width_bits: value.width_bits,
            data_type: value.data_type.into(),
        }
    }
}
