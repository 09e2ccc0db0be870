//! Strategy builders for Kruskal property-based tests.
//!
//! Graphs come in two sizes: small ones that the exhaustive oracle can check
//! and medium ones for structural invariants only.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, GraphShape, TestEdge};

/// Upper bound on edges in graphs handed to the exhaustive oracle.
pub(super) const ORACLE_MAX_EDGES: usize = 12;

const SMALL_MAX_VERTICES: u16 = 7;
const MEDIUM_MAX_VERTICES: u16 = 40;

/// Generates graphs small enough for the brute-force oracle.
pub(super) fn small_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fixture = generate_fixture(shape, SMALL_MAX_VERTICES, &mut rng);
        fixture.edges.truncate(ORACLE_MAX_EDGES);
        fixture
    })
}

/// Generates medium graphs for structural properties.
pub(super) fn medium_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, MEDIUM_MAX_VERTICES, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(
    shape: GraphShape,
    max_vertices: u16,
    rng: &mut SmallRng,
) -> GraphFixture {
    let edges = match shape {
        GraphShape::Unique => generate_unique(max_vertices, rng),
        GraphShape::ManyIdentical => generate_identical(max_vertices, rng),
        GraphShape::Sparse => generate_sparse(max_vertices, rng),
        GraphShape::Disconnected => generate_disconnected(max_vertices, rng),
        GraphShape::Redundant => generate_redundant(max_vertices, rng),
    };
    GraphFixture { edges, shape }
}

fn vertex_count(max_vertices: u16, rng: &mut SmallRng) -> u16 {
    rng.gen_range(2..=max_vertices)
}

fn random_graph(
    vertices: u16,
    edge_probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> Vec<TestEdge> {
    let mut edges = Vec::new();
    for source in 0..vertices {
        for target in (source + 1)..vertices {
            if rng.gen_bool(edge_probability) {
                let w = weight(&mut *rng);
                edges.push(oriented(w, source, target, rng));
            }
        }
    }
    if edges.is_empty() {
        let w = weight(&mut *rng);
        edges.push(TestEdge::new(w, 0, 1));
    }
    shuffle(&mut edges, rng);
    edges
}

fn generate_unique(max_vertices: u16, rng: &mut SmallRng) -> Vec<TestEdge> {
    let vertices = vertex_count(max_vertices, rng);
    let mut next = 0_u32;
    random_graph(vertices, 0.5, rng, |r| {
        next += r.gen_range(1..=5);
        next
    })
}

fn generate_identical(max_vertices: u16, rng: &mut SmallRng) -> Vec<TestEdge> {
    let vertices = vertex_count(max_vertices, rng);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<u32> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    random_graph(vertices, 0.5, rng, move |r| {
        pool[r.gen_range(0..pool.len())]
    })
}

fn generate_sparse(max_vertices: u16, rng: &mut SmallRng) -> Vec<TestEdge> {
    let vertices = vertex_count(max_vertices, rng);
    let mut order: Vec<u16> = (0..vertices).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<TestEdge> = order
        .windows(2)
        .map(|pair| {
            let w = rng.gen_range(1..=100);
            oriented(w, pair[0], pair[1], rng)
        })
        .collect();

    let extra = rng.gen_range(0..=usize::from(vertices / 2));
    for _ in 0..extra {
        let source = rng.gen_range(0..vertices);
        let target = rng.gen_range(0..vertices);
        if source != target {
            let w = rng.gen_range(1..=100);
            edges.push(TestEdge::new(w, source, target));
        }
    }
    shuffle(&mut edges, rng);
    edges
}

fn generate_disconnected(max_vertices: u16, rng: &mut SmallRng) -> Vec<TestEdge> {
    let components = rng.gen_range(2..=3_u16);
    let mut offset = 0_u16;
    let mut edges = Vec::new();
    for _ in 0..components {
        let size = rng.gen_range(2..=(max_vertices / components).max(2));
        let component = random_graph(size, 0.6, rng, |r| r.gen_range(1..=20));
        edges.extend(component.into_iter().map(|edge| {
            let (w, source, target) = edge.into_parts();
            TestEdge::new(w, source + offset, target + offset)
        }));
        offset += size;
    }
    shuffle(&mut edges, rng);
    edges
}

fn generate_redundant(max_vertices: u16, rng: &mut SmallRng) -> Vec<TestEdge> {
    let vertices = vertex_count(max_vertices, rng);
    let mut edges = random_graph(vertices, 0.4, rng, |r| r.gen_range(1..=8));
    let copies = rng.gen_range(1..=3);
    for _ in 0..copies {
        let index = rng.gen_range(0..edges.len());
        let (w, source, target) = edges[index].clone().into_parts();
        edges.push(TestEdge::new(w, target, source));
        let looped = rng.gen_range(0..vertices);
        edges.push(TestEdge::new(rng.gen_range(0..=3), looped, looped));
    }
    shuffle(&mut edges, rng);
    edges
}

fn oriented(weight: u32, left: u16, right: u16, rng: &mut SmallRng) -> TestEdge {
    if rng.gen_bool(0.5) {
        TestEdge::new(weight, left, right)
    } else {
        TestEdge::new(weight, right, left)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
