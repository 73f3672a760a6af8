//! The public accessor: the compiled form of a [Field] with typed read and
//! write operations.

use crate::{
    codec::Codec,
    errors::{AccessError, CompileError},
    field::Field,
    value::Value,
};

/// A compiled field accessor. Use [Accessor::compile] to build one from a
/// [Field], then read from or write into any buffer that contains the field.
///
/// Accessors hold only precomputed constants: they keep no reference to any
/// buffer and may be reused against any number of buffers in turn. Every
/// read and write checks that the field lies inside the supplied buffer and
/// fails with [AccessError::BufferTooSmall] otherwise; width-0 fields touch
/// no bytes and skip the check.
#[derive(Debug, Clone)]
pub struct Accessor {
    codec: Codec,
}

impl Accessor {
    /// Compiles `field` into an accessor. Fails if the combination of width
    /// and data type cannot be realized.
    pub fn compile(field: &Field) -> Result<Self, CompileError> {
        Ok(Accessor {
            codec: Codec::compile(field)?,
        })
    }

    /// Reads the field at its natural width and interpretation.
    pub fn read(&self, data: &[u8]) -> Result<Value, AccessError> {
        self.codec.read(data)
    }

    /// Writes `value` converted to the field's natural interpretation.
    ///
    /// Aligned fields overwrite their whole slot. Unaligned fields merge
    /// with bitwise OR and cannot clear bits that are already set in the
    /// slot; zero the slot first for replace semantics.
    pub fn write(&self, value: Value, data: &mut [u8]) -> Result<(), AccessError> {
        self.codec.write(value, data)
    }

    /// Reads the field widened to `u64`. Signed fields widen by sign
    /// extension, unsigned fields by zero extension.
    pub fn read_u64(&self, data: &[u8]) -> Result<u64, AccessError> {
        Ok(self.read(data)?.as_u64())
    }

    /// Reads the field widened to `i64`.
    pub fn read_i64(&self, data: &[u8]) -> Result<i64, AccessError> {
        Ok(self.read(data)?.as_i64())
    }

    /// Reads the field as `u32`, truncating wider fields by
    /// two's-complement wrap.
    pub fn read_u32(&self, data: &[u8]) -> Result<u32, AccessError> {
        Ok(self.read(data)?.as_u32())
    }

    pub fn read_i32(&self, data: &[u8]) -> Result<i32, AccessError> {
        Ok(self.read(data)?.as_i32())
    }

    /// Reads the field as `f32`. Integer fields convert numerically, float
    /// fields keep their IEEE 754 value.
    pub fn read_f32(&self, data: &[u8]) -> Result<f32, AccessError> {
        Ok(self.read(data)?.as_f32())
    }

    pub fn read_f64(&self, data: &[u8]) -> Result<f64, AccessError> {
        Ok(self.read(data)?.as_f64())
    }

    /// Reads the field as a boolean: true iff its value is non-zero.
    pub fn read_bool(&self, data: &[u8]) -> Result<bool, AccessError> {
        Ok(self.read(data)?.as_bool())
    }

    /// Writes an unsigned integer, truncated to the field's width by
    /// two's-complement wrap.
    pub fn write_u64(&self, value: u64, data: &mut [u8]) -> Result<(), AccessError> {
        self.write(Value::U64(value), data)
    }

    pub fn write_i64(&self, value: i64, data: &mut [u8]) -> Result<(), AccessError> {
        self.write(Value::I64(value), data)
    }

    pub fn write_u32(&self, value: u32, data: &mut [u8]) -> Result<(), AccessError> {
        self.write(Value::U64(value.into()), data)
    }

    pub fn write_i32(&self, value: i32, data: &mut [u8]) -> Result<(), AccessError> {
        self.write(Value::I64(value.into()), data)
    }

    /// Writes a float. Integer fields receive the value truncated toward
    /// zero, float fields the IEEE 754 bit pattern.
    pub fn write_f32(&self, value: f32, data: &mut [u8]) -> Result<(), AccessError> {
        self.write(Value::F32(value), data)
    }

    pub fn write_f64(&self, value: f64, data: &mut [u8]) -> Result<(), AccessError> {
        self.write(Value::F64(value), data)
    }

    /// Writes a boolean as the field's 1/0 representation.
    pub fn write_bool(&self, value: bool, data: &mut [u8]) -> Result<(), AccessError> {
        self.write(Value::Bool(value), data)
    }
}

impl TryFrom<&Field> for Accessor {
    type Error = CompileError;

    fn try_from(field: &Field) -> Result<Self, Self::Error> {
        Accessor::compile(field)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::FieldDef> for Accessor {
    type Error = CompileError;

    fn try_from(def: crate::serde::FieldDef) -> Result<Self, Self::Error> {
        Accessor::compile(&def.into())
    }
}
