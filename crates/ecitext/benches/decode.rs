//! Decode throughput across representative charset families.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use ecitext::{CharacterSet, decode};

fn payload_latin1(len: usize) -> Vec<u8> {
    (0..len).map(|i| u8::try_from(i % 256).unwrap()).collect()
}

fn payload_shift_jis(len: usize) -> Vec<u8> {
    // Alternating ASCII and two-byte kana, truncated to whole characters.
    let unit: &[u8] = &[b'a', 0x83, 0x65, 0xB1];
    unit.iter().copied().cycle().take(len & !3).collect()
}

fn payload_utf16be(len: usize) -> Vec<u8> {
    (0..len / 2).flat_map(|i| u16::try_from(0x3040 + (i % 0x60)).unwrap().to_be_bytes()).collect()
}

fn bench_decode(c: &mut Criterion) {
    const LEN: usize = 4096;

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(LEN as u64));

    let cases: &[(&str, Vec<u8>, CharacterSet)] = &[
        ("binary", payload_latin1(LEN), CharacterSet::Binary),
        ("latin1", payload_latin1(LEN), CharacterSet::Iso8859_1),
        ("cp437", payload_latin1(LEN), CharacterSet::Cp437),
        ("iso8859_5", payload_latin1(LEN), CharacterSet::Iso8859_5),
        ("shift_jis", payload_shift_jis(LEN), CharacterSet::ShiftJis),
        ("gb18030", payload_shift_jis(LEN), CharacterSet::Gb18030),
        ("utf16be", payload_utf16be(LEN), CharacterSet::Utf16Be),
    ];

    for (name, bytes, charset) in cases {
        group.bench_function(*name, |b| {
            b.iter(|| decode(black_box(bytes), black_box(*charset)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
