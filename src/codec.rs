//! Per-shape codecs selected when a field is compiled.
//!
//! Four codecs cover every legal field shape. Widths 0 and 1 get dedicated
//! codecs; byte-aligned fields of width 8/16/32/64 are a single word
//! load/store with an optional byte swap; everything else goes through the
//! generic staging-word pipeline.

use crate::{
    endian::{swap16, swap32, swap64},
    errors::{AccessError, CompileError},
    field::{DataType, Field},
    value::Value,
};

/// A compiled field codec: the dispatch target behind
/// [crate::accessor::Accessor]. Built once by [Codec::compile], then used
/// for any number of reads and writes.
#[derive(Debug, Clone)]
pub enum Codec {
    /// Width 0: reads yield zero, writes do nothing.
    Zero,
    /// Width 1: masked single-byte access.
    Bit(BitCodec),
    /// Byte-aligned 8/16/32/64-bit fields: whole-word load/store.
    Aligned(AlignedCodec),
    /// Everything else: copy into a staging word, swap, shift, mask, extend.
    Generic(GenericCodec),
}

impl Codec {
    /// Selects and builds the codec for `field`. The first matching shape
    /// wins: zero width, single bit, aligned word, generic. Fails with
    /// [CompileError::UnsupportedFieldShape] when the combination of width
    /// and data type cannot be realized.
    pub fn compile(field: &Field) -> Result<Self, CompileError> {
        let unsupported = || CompileError::UnsupportedFieldShape {
            width_bits: field.width_bits,
            data_type: field.data_type,
        };

        if field.width_bits == 0 {
            return Ok(Codec::Zero);
        }
        if field.width_bits == 1 {
            return Ok(Codec::Bit(BitCodec::new(
                field.start_bit,
                field.data_type.is_signed_integer(),
            )));
        }
        if field.width_bits > 64 {
            return Err(unsupported());
        }
        if field.data_type.is_float() && field.width_bits != 32 && field.width_bits != 64 {
            return Err(unsupported());
        }

        let bit_offset = field.start_bit % 8;
        if bit_offset == 0 && matches!(field.width_bits, 8 | 16 | 32 | 64) {
            return Ok(Codec::Aligned(AlignedCodec::new(field)?));
        }
        // An unaligned run longer than the widest staging word cannot be
        // copied in one piece.
        if field.width_bits + bit_offset > 64 {
            return Err(unsupported());
        }
        Ok(Codec::Generic(GenericCodec::new(field)))
    }

    pub fn read(&self, data: &[u8]) -> Result<Value, AccessError> {
        match self {
            Codec::Zero => Ok(Value::U64(0)),
            Codec::Bit(codec) => codec.read(data),
            Codec::Aligned(codec) => codec.read(data),
            Codec::Generic(codec) => codec.read(data),
        }
    }

    pub fn write(&self, value: Value, data: &mut [u8]) -> Result<(), AccessError> {
        match self {
            Codec::Zero => Ok(()),
            Codec::Bit(codec) => codec.write(value, data),
            Codec::Aligned(codec) => codec.write(value, data),
            Codec::Generic(codec) => codec.write(value, data),
        }
    }
}

/// Masked read-modify-write access to a single bit.
#[derive(Debug, Clone)]
pub struct BitCodec {
    byte_offset: usize,
    read_mask: u8,
    clear_mask: u8,
    signed: bool,
}

impl BitCodec {
    fn new(start_bit: u32, signed: bool) -> Self {
        let read_mask = 1u8 << (start_bit % 8);
        BitCodec {
            byte_offset: (start_bit / 8) as usize,
            read_mask,
            clear_mask: !read_mask,
            signed,
        }
    }

    /// A set bit reads as 1 under the unsigned and float tags and as -1
    /// under the signed integer tags.
    fn read(&self, data: &[u8]) -> Result<Value, AccessError> {
        let byte = *data
            .get(self.byte_offset)
            .ok_or(AccessError::BufferTooSmall)?;
        let set = byte & self.read_mask != 0;
        if self.signed {
            Ok(Value::I64(if set { -1 } else { 0 }))
        } else {
            Ok(Value::U64(set as u64))
        }
    }

    fn write(&self, value: Value, data: &mut [u8]) -> Result<(), AccessError> {
        let byte = data
            .get_mut(self.byte_offset)
            .ok_or(AccessError::BufferTooSmall)?;
        if value.as_bool() {
            *byte |= self.read_mask;
        } else {
            *byte &= self.clear_mask;
        }
        Ok(())
    }
}

/// Enumerated (type, size) arms of the aligned codec.
#[derive(Debug, Clone, Copy)]
enum AlignedKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl AlignedKind {
    fn byte_width(self) -> usize {
        match self {
            AlignedKind::U8 | AlignedKind::I8 => 1,
            AlignedKind::U16 | AlignedKind::I16 => 2,
            AlignedKind::U32 | AlignedKind::I32 | AlignedKind::F32 => 4,
            AlignedKind::U64 | AlignedKind::I64 | AlignedKind::F64 => 8,
        }
    }

    /// Byte swap at the arm's own width. The 8-bit swap is an identity.
    fn swap(self, raw: u64) -> u64 {
        match self.byte_width() {
            1 => raw,
            2 => swap16(raw as u16) as u64,
            4 => swap32(raw as u32) as u64,
            _ => swap64(raw),
        }
    }
}

/// One machine-word load or store for byte-aligned power-of-two widths.
#[derive(Debug, Clone)]
pub struct AlignedCodec {
    byte_offset: usize,
    kind: AlignedKind,
    swap: bool,
}

impl AlignedCodec {
    fn new(field: &Field) -> Result<Self, CompileError> {
        let signed = field.data_type.is_signed_integer();
        let kind = match (field.data_type.is_float(), signed, field.width_bits) {
            (false, false, 8) => AlignedKind::U8,
            (false, false, 16) => AlignedKind::U16,
            (false, false, 32) => AlignedKind::U32,
            (false, false, 64) => AlignedKind::U64,
            (false, true, 8) => AlignedKind::I8,
            (false, true, 16) => AlignedKind::I16,
            (false, true, 32) => AlignedKind::I32,
            (false, true, 64) => AlignedKind::I64,
            (true, _, 32) => AlignedKind::F32,
            (true, _, 64) => AlignedKind::F64,
            _ => {
                return Err(CompileError::UnsupportedFieldShape {
                    width_bits: field.width_bits,
                    data_type: field.data_type,
                })
            }
        };
        Ok(AlignedCodec {
            byte_offset: (field.start_bit / 8) as usize,
            kind,
            swap: field.data_type.is_big_endian(),
        })
    }

    fn read(&self, data: &[u8]) -> Result<Value, AccessError> {
        let width = self.kind.byte_width();
        let slot = data
            .get(self.byte_offset..self.byte_offset + width)
            .ok_or(AccessError::BufferTooSmall)?;
        let mut bytes = [0u8; 8];
        bytes[..width].copy_from_slice(slot);
        let mut raw = u64::from_le_bytes(bytes);
        if self.swap {
            raw = self.kind.swap(raw);
        }
        Ok(match self.kind {
            AlignedKind::U8 | AlignedKind::U16 | AlignedKind::U32 | AlignedKind::U64 => {
                Value::U64(raw)
            }
            AlignedKind::I8 => Value::I64(raw as i8 as i64),
            AlignedKind::I16 => Value::I64(raw as i16 as i64),
            AlignedKind::I32 => Value::I64(raw as i32 as i64),
            AlignedKind::I64 => Value::I64(raw as i64),
            AlignedKind::F32 => Value::F32(f32::from_bits(raw as u32)),
            AlignedKind::F64 => Value::F64(f64::from_bits(raw)),
        })
    }

    /// Stores the value's bit pattern over all `width/8` bytes of the slot,
    /// unlike the merging generic write.
    fn write(&self, value: Value, data: &mut [u8]) -> Result<(), AccessError> {
        let width = self.kind.byte_width();
        let slot = data
            .get_mut(self.byte_offset..self.byte_offset + width)
            .ok_or(AccessError::BufferTooSmall)?;
        let mut raw = match self.kind {
            AlignedKind::F32 => value.as_f32().to_bits() as u64,
            AlignedKind::F64 => value.as_f64().to_bits(),
            _ => value.as_i64() as u64,
        };
        if self.swap {
            raw = self.kind.swap(raw);
        }
        slot.copy_from_slice(&raw.to_le_bytes()[..width]);
        Ok(())
    }
}

/// Staging word selector for the generic codec. The copied bytes are staged
/// in a 32-bit word when the field's span allows it, in a 64-bit word
/// otherwise; the selector routes the swap to the primitive of that width.
#[derive(Debug, Clone, Copy)]
enum Staging {
    Word32,
    Word64,
}

impl Staging {
    fn byte_width(self) -> usize {
        match self {
            Staging::Word32 => 4,
            Staging::Word64 => 8,
        }
    }

    fn swap(self, staged: u64) -> u64 {
        match self {
            Staging::Word32 => swap32(staged as u32) as u64,
            Staging::Word64 => swap64(staged),
        }
    }
}

/// Sign extension strategy, fixed when the field is compiled.
#[derive(Debug, Clone, Copy)]
enum SignExtension {
    None,
    /// `mask` holds ones at and above the field's sign bit.
    Extend { mask: u64 },
}

impl SignExtension {
    fn new(field: &Field) -> Self {
        if field.data_type.is_signed_integer() {
            SignExtension::Extend {
                mask: (!0u64) << (field.width_bits - 1),
            }
        } else {
            SignExtension::None
        }
    }

    /// Sets every bit above the sign bit when the sign bit is set. The sign
    /// bit itself is already one, so OR-ing the whole mask is enough.
    fn extend(self, value: u64) -> u64 {
        match self {
            SignExtension::None => value,
            SignExtension::Extend { mask } => {
                if value & mask != 0 {
                    value | mask
                } else {
                    value
                }
            }
        }
    }
}

/// How staged field bits become a typed value. A 64-bit float can never
/// reach the generic path: at width 64 any field that fits the staging word
/// is byte-aligned.
#[derive(Debug, Clone, Copy)]
enum Interpretation {
    Unsigned,
    Signed,
    Float32,
}

impl Interpretation {
    fn new(field: &Field) -> Self {
        if field.data_type.is_float() {
            Interpretation::Float32
        } else if field.data_type.is_signed_integer() {
            Interpretation::Signed
        } else {
            Interpretation::Unsigned
        }
    }
}

/// The slowest path, valid for any start bit and any width whose span fits
/// a staging word: copy the covered bytes, then swap, shift, mask and
/// sign-extend.
#[derive(Debug, Clone)]
pub struct GenericCodec {
    byte_offset: usize,
    bytes_to_copy: usize,
    shift: u32,
    mask: u64,
    staging: Staging,
    swap: bool,
    extend: SignExtension,
    interp: Interpretation,
}

/// Mask with ones in the low `width` bits.
fn low_bits(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

impl GenericCodec {
    fn new(field: &Field) -> Self {
        let bit_offset = field.start_bit % 8;
        let span = field.width_bits + bit_offset;
        let staging = if span <= 32 {
            Staging::Word32
        } else {
            Staging::Word64
        };
        let bytes_to_copy = ((span + 7) / 8) as usize;
        let swap = field.data_type.is_big_endian();
        // Swapping the whole staging word parks the field's least
        // significant bit (staging - copied) * 8 positions higher than in
        // the little-endian layout.
        let shift = if swap {
            (staging.byte_width() - bytes_to_copy) as u32 * 8 + bit_offset
        } else {
            bit_offset
        };
        GenericCodec {
            byte_offset: (field.start_bit / 8) as usize,
            bytes_to_copy,
            shift,
            mask: low_bits(field.width_bits),
            staging,
            swap,
            extend: SignExtension::new(field),
            interp: Interpretation::new(field),
        }
    }

    fn read(&self, data: &[u8]) -> Result<Value, AccessError> {
        let slot = data
            .get(self.byte_offset..self.byte_offset + self.bytes_to_copy)
            .ok_or(AccessError::BufferTooSmall)?;
        let mut bytes = [0u8; 8];
        bytes[..self.bytes_to_copy].copy_from_slice(slot);
        let mut staged = u64::from_le_bytes(bytes);
        if self.swap {
            staged = self.staging.swap(staged);
        }
        staged = (staged >> self.shift) & self.mask;
        staged = self.extend.extend(staged);
        Ok(match self.interp {
            Interpretation::Unsigned => Value::U64(staged),
            Interpretation::Signed => Value::I64(staged as i64),
            Interpretation::Float32 => Value::F32(f32::from_bits(staged as u32)),
        })
    }

    /// Merges the field into place with bitwise OR: bits already set inside
    /// the slot stay set. Callers that need replace semantics must clear the
    /// slot first.
    fn write(&self, value: Value, data: &mut [u8]) -> Result<(), AccessError> {
        let slot = data
            .get_mut(self.byte_offset..self.byte_offset + self.bytes_to_copy)
            .ok_or(AccessError::BufferTooSmall)?;
        let raw = match self.interp {
            Interpretation::Unsigned | Interpretation::Signed => value.as_i64() as u64,
            Interpretation::Float32 => value.as_f32().to_bits() as u64,
        };
        let mut staged = (raw & self.mask) << self.shift;
        if self.swap {
            staged = self.staging.swap(staged);
        }
        for (dst, src) in slot.iter_mut().zip(staged.to_le_bytes()) {
            *dst |= src;
        }
        Ok(())
    }
}
