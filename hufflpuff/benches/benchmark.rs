extern crate criterion;

use self::criterion::*;
use common::bench_data::gen_text;
use bitstream::BitWriter;
use common::count_simple;
use hufflpuff::build_tree;
use hufflpuff::compress_symbols;
use hufflpuff::tree_to_table;

fn compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression");
    let all_bytes = (0..=u8::MAX).cycle().take(64_000).collect::<Vec<u8>>();
    let inputs = vec![gen_text(1_000), gen_text(34_000), gen_text(65_000), all_bytes];
    for input in inputs.iter() {
        let input_bytes = input.len() as u64;
        group.throughput(Throughput::Bytes(input_bytes));
        group.bench_with_input(
            BenchmarkId::new("build_huf_tree", input_bytes),
            &input,
            |b, i| {
                let counts = count_simple(i);
                b.iter(|| build_tree(&counts).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("build_huf_tree_complete", input_bytes),
            &input,
            |b, i| {
                b.iter(|| {
                    let counts = count_simple(i);
                    let tree = build_tree(&counts).unwrap().unwrap();
                    tree_to_table(&tree).unwrap()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("compress_symbols", input_bytes),
            &input,
            |b, i| {
                let counts = count_simple(i);
                let tree = build_tree(&counts).unwrap().unwrap();
                let table = tree_to_table(&tree).unwrap();
                b.iter(|| {
                    let mut writer = BitWriter::new(Vec::with_capacity(i.len()));
                    compress_symbols(&table, i, &mut writer).unwrap();
                    writer.finish().unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, compression);
criterion_main!(benches);
