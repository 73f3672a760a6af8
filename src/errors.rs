use crate::field::DataType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    UnsupportedFieldShape {
        width_bits: u32,
        data_type: DataType,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    BufferTooSmall,
}
