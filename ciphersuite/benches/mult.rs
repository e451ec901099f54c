//! Scalar multiplication and decoding benchmarks

use ciphersuite::{Element, Group, Identifier, Scalar};
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};

fn operands(suite: &dyn Group) -> (Scalar, Element) {
    let scalar = suite.hash_to_scalar(b"scalar", None).unwrap();
    let element = suite.hash_to_group(b"element", None).unwrap();
    (scalar, element)
}

fn bench_mult<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, suite: &dyn Group) {
    let (s, p) = operands(suite);
    group.bench_function("mult", |b| b.iter(|| p.mult(&s)));
}

fn bench_mult_bytes<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, suite: &dyn Group) {
    let (s, p) = operands(suite);
    let (s, p) = (s.encode(), p.encode());
    group.bench_function("mult_bytes", |b| b.iter(|| suite.mult_bytes(&s, &p)));
}

fn bench_decode<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, suite: &dyn Group) {
    let (_, p) = operands(suite);
    let bytes = p.encode();
    let template = suite.new_element();
    group.bench_function("element decode", |b| b.iter(|| template.decode(&bytes)));
}

fn bench_invert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, suite: &dyn Group) {
    let (s, _) = operands(suite);
    group.bench_function("scalar invert", |b| b.iter(|| s.invert()));
}

fn bench_ops(c: &mut Criterion) {
    for id in Identifier::all() {
        let dst = id.make_dst("bench", "1").unwrap();
        let suite = id.get(&dst).unwrap();

        let mut group = c.benchmark_group(id.to_string());
        bench_mult(&mut group, suite.as_ref());
        bench_mult_bytes(&mut group, suite.as_ref());
        bench_decode(&mut group, suite.as_ref());
        bench_invert(&mut group, suite.as_ref());
        group.finish();
    }
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
