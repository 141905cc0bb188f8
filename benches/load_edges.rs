use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dyngraph::container::ValueFacet;
use dyngraph::prelude::*;
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, vector_vertices, keyed_vertices);
criterion_main!(benches);

fn random_edges(vertex_size: usize, edge_size: usize) -> Vec<(u32, u32, u32)> {
    let mut rng = rand::thread_rng();
    let mut edges: Vec<_> = (0..edge_size)
        .map(|_| {
            (
                (rng.gen::<usize>() % vertex_size) as u32,
                (rng.gen::<usize>() % vertex_size) as u32,
                rng.gen::<u32>() % 1000,
            )
        })
        .collect();
    edges.sort_by_key(|e| e.0);
    edges
}

fn vector_vertices(c: &mut Criterion) {
    cases::<Vov<Value<u32>>>(c, "vov");
    cases::<Vofl<Value<u32>>>(c, "vofl");
    cases::<Vos<Value<u32>>>(c, "vos");
    cases::<Dov<Value<u32>>>(c, "dov");
}

fn keyed_vertices(c: &mut Criterion) {
    cases::<Mov<Value<u32>>>(c, "mov");
    cases::<Uov<Value<u32>>>(c, "uov");
}

fn cases<Tr>(c: &mut Criterion, prefix: &str)
where
    Tr: GraphTraits<VertexId = u32, EdgeValue = Value<u32>>,
    <Tr::GraphValue as ValueFacet>::Slot: Default,
{
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    let edges = random_edges(vertex_size, edge_size);

    c.bench_function(&(prefix.to_string() + "/from_edge_list"), |b| {
        b.iter(|| DynamicGraph::<Tr>::from_edge_list(black_box(edges.iter().copied())).unwrap())
    });
    c.bench_function(&(prefix.to_string() + "/with_vertex_count"), |b| {
        b.iter(|| {
            DynamicGraph::<Tr>::with_vertex_count(
                vertex_size,
                black_box(edges.iter().copied()),
                CopyableEdge::from,
                &[],
            )
            .unwrap()
        })
    });

    let g = DynamicGraph::<Tr>::from_edge_list(edges.iter().copied()).unwrap();
    c.bench_function(&(prefix.to_string() + "/iter_edges"), |b| {
        b.iter(|| iter_edges(&g))
    });
    c.bench_function(&(prefix.to_string() + "/find_vertex"), |b| {
        b.iter(|| find_vertices(&g, vertex_size))
    });
}

fn iter_edges<Tr>(g: &DynamicGraph<Tr>) -> u64
where
    Tr: GraphTraits<VertexId = u32, EdgeValue = Value<u32>>,
{
    let mut total = 0u64;
    for u in vertices(g) {
        for uv in edges(g, &u) {
            total += u64::from(*edge_value(g, &uv));
        }
    }
    total
}

fn find_vertices<Tr>(g: &DynamicGraph<Tr>, vertex_size: usize) -> usize
where
    Tr: GraphTraits<VertexId = u32, EdgeValue = Value<u32>>,
{
    (0..vertex_size as u32)
        .filter(|id| find_vertex(g, id).is_some())
        .count()
}
