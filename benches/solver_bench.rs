use criterion::{criterion_group, criterion_main, Criterion};
use grid_dijkstra::{
    solver::{dijkstra::DijkstraSolver, heap::HeapSolver, GridSolver},
    Category, Graph, Point, ValueGrid,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N_GRIDS: usize = 32;

fn random_graphs(size: usize) -> Vec<Graph> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..N_GRIDS)
        .map(|_| {
            let mut graph = Graph::new(size, size, Category::Empty);
            for x in 0..size as i32 {
                for y in 0..size as i32 {
                    if rng.gen_bool(0.3) {
                        graph.make_wall_block(Point::new(x, y)).unwrap();
                    }
                }
            }
            graph
        })
        .collect()
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    for size in [5, 16, 32] {
        let graphs = random_graphs(size);
        let goal = size * size - 1;
        c.bench_function(format!("{solver_name}, {size}x{size}").as_str(), |b| {
            b.iter(|| {
                for graph in &graphs {
                    black_box(solver.shortest_path(graph.adjacency(), graph.nodes(), 0, goal));
                }
            })
        });
    }
}

fn dijkstra_bench(c: &mut Criterion) {
    bench_solver(c, "Dijkstra (linear scan)", DijkstraSolver);
}

fn heap_bench(c: &mut Criterion) {
    bench_solver(c, "Dijkstra (binary heap)", HeapSolver);
}

criterion_group!(benches, dijkstra_bench, heap_bench);
criterion_main!(benches);
