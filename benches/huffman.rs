use ascii_huffman::huffman::{analyze_reader, build_tree, generate_codes, rebuild_tree};
use ascii_huffman::stream::{decode, encode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let input = (0..65536)
        .map(|_| rng.gen_range(b' '..=b'~'))
        .collect::<Vec<u8>>();
    let report = analyze_reader(&input[..]).unwrap();
    let table = generate_codes(&build_tree(&report.frequencies));
    let tree = rebuild_tree(&table).unwrap();
    let mut packed = Vec::new();
    encode(&input[..], &mut packed, &table).unwrap();

    c.bench_function("build code table", |b| {
        b.iter(|| generate_codes(&build_tree(black_box(&report.frequencies))))
    });
    c.bench_function("huffman encode 64k", |b| {
        b.iter(|| encode(black_box(&input[..]), Vec::new(), &table).unwrap())
    });
    c.bench_function("huffman decode 64k", |b| {
        b.iter(|| decode(black_box(&packed[..]), Vec::new(), &tree).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
