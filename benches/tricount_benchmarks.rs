use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tricount::algebra::SparseMatrix;
use tricount::{Adjacency, Method, TriangleCounter};

fn random_graph(n: usize, avg_degree: usize, seed: u64) -> Adjacency {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a = SparseMatrix::new(n, n).unwrap();
    for _ in 0..(n * avg_degree / 2) {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            a.set_element(1u32, u, v).unwrap();
            a.set_element(1u32, v, u).unwrap();
        }
    }
    a.wait().unwrap();
    a
}

fn complete_graph(k: usize) -> Adjacency {
    let mut a = SparseMatrix::new(k, k).unwrap();
    for i in 0..k {
        for j in 0..k {
            if i != j {
                a.set_element(1u32, i, j).unwrap();
            }
        }
    }
    a.wait().unwrap();
    a
}

/// Benchmark every method on sparse random graphs
fn bench_random_graphs(c: &mut Criterion) {
    let counter = TriangleCounter::default();

    for size in [1_000, 10_000].iter() {
        let a = random_graph(*size, 16, 42);
        let mut group = c.benchmark_group(format!("random_{}", size));

        for method in Method::ALL {
            group.bench_with_input(BenchmarkId::from_parameter(method), &method, |b, &method| {
                b.iter(|| counter.count(&a, method).unwrap());
            });
        }
        group.finish();
    }
}

/// Benchmark every method on a dense clique
fn bench_complete_graph(c: &mut Criterion) {
    let counter = TriangleCounter::default();
    let a = complete_graph(200);
    let mut group = c.benchmark_group("complete_200");

    for method in Method::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(method), &method, |b, &method| {
            b.iter(|| counter.count(&a, method).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_graphs, bench_complete_graph);
criterion_main!(benches);
