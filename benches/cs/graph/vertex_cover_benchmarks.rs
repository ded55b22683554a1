use cover::cs::approx::CoverHeuristic;
use cover::cs::graph::{max_independent_set, minimum_vertex_cover};
use cover::cs::randomized::random_graph;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_vertex_cover");
    let mut rng = StdRng::seed_from_u64(42);

    for nodes in [8, 10, 12, 14] {
        let graph = random_graph(nodes, nodes * 2, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("mvc", nodes), &graph, |b, g| {
            b.iter(|| minimum_vertex_cover(black_box(g)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("mis", nodes), &graph, |b, g| {
            b.iter(|| max_independent_set(black_box(g)).unwrap())
        });
    }

    group.finish();
}

fn bench_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("approx_vertex_cover");
    let mut rng = StdRng::seed_from_u64(7);

    for nodes in [50, 200, 500] {
        let graph = random_graph(nodes, nodes * 3, &mut rng).unwrap();
        for heuristic in CoverHeuristic::ALL {
            group.bench_with_input(BenchmarkId::new(heuristic.name(), nodes), &graph, |b, g| {
                let mut rng = StdRng::seed_from_u64(1);
                b.iter(|| heuristic.cover(black_box(g), &mut rng).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_exact, bench_heuristics);
criterion_main!(benches);
