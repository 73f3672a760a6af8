use bitslot::accessor::Accessor;
use bitslot::field::{DataType, Field};
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_frame(len: usize) -> Vec<u8> {
    // Deterministic but non-trivial pattern
    (0..len).map(|i| (i * 31 % 256) as u8).collect()
}

fn bench_field_access(c: &mut Criterion) {
    let frame = gen_frame(64);

    let aligned32 = Accessor::compile(&Field::new(
        32,
        32,
        DataType::UnsignedIntegerLittleEndian,
    ))
    .unwrap();
    c.bench_function("read_aligned_u32", |b| {
        b.iter(|| aligned32.read_u64(&frame).unwrap())
    });

    let aligned64_be = Accessor::compile(&Field::new(64, 64, DataType::UnsignedIntegerBigEndian))
        .unwrap();
    c.bench_function("read_aligned_u64_big_endian", |b| {
        b.iter(|| aligned64_be.read_u64(&frame).unwrap())
    });

    let unaligned = Accessor::compile(&Field::new(13, 23, DataType::SignedIntegerLittleEndian))
        .unwrap();
    c.bench_function("read_generic_unaligned", |b| {
        b.iter(|| unaligned.read_i64(&frame).unwrap())
    });

    let bit = Accessor::compile(&Field::new(42, 1, DataType::UnsignedIntegerLittleEndian))
        .unwrap();
    c.bench_function("read_bit", |b| b.iter(|| bit.read_bool(&frame).unwrap()));

    let mut scratch = gen_frame(64);
    c.bench_function("write_aligned_u32", |b| {
        b.iter(|| aligned32.write_u64(0xDEADBEEF, &mut scratch).unwrap())
    });
    c.bench_function("write_generic_unaligned", |b| {
        b.iter(|| unaligned.write_i64(-12345, &mut scratch).unwrap())
    });
}

criterion_group!(benches, bench_field_access);
criterion_main!(benches);
