//! Benchmark for locating each header directive in the fixture charts.

use criterion::{BenchmarkId, Criterion, Throughput};
use sm_rs::{FieldName, sm::lex::find_directive};

const CHARTS: [(&str, &str); 2] = [
    ("simple.sm", include_str!("../tests/files/simple.sm")),
    ("multi_bpm.ssc", include_str!("../tests/files/multi_bpm.ssc")),
];

fn bench_find_directive(c: &mut Criterion) {
    for (chart, source) in CHARTS {
        let mut group = c.benchmark_group(format!("find_directive/{chart}"));
        group.throughput(Throughput::Bytes(source.len() as u64));
        for name in FieldName::GUARANTEED {
            group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, &name| {
                b.iter(|| find_directive(std::hint::black_box(source), name));
            });
        }
        group.finish();
    }
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    bench_find_directive(&mut criterion);
    criterion.final_summary();
}
