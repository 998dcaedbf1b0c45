//! dijkstra-core: single-source shortest paths over a fixed-capacity graph.
//!
//! A pure Rust library that stores a weighted graph as adjacency lists over
//! vertex ids `1..=capacity` and runs Dijkstra's algorithm with an O(V²)
//! linear-scan selection (or, optionally, a binary heap). Results are plain
//! distance and parent vectors owned by the caller; reporting helpers turn
//! them into paths and distance tables.

mod config;
mod error;
mod graph;
mod report;
mod search;

pub use config::{BoundsPolicy, GraphConfig, CAPACITY_LIMIT, MAX_VERTICES, MAX_WEIGHT};
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, VertexId, Weight};
pub use report::{all_distances, reconstruct_path, DistanceRow};
pub use search::{
    shortest_paths, shortest_paths_with, NoopObserver, SearchObserver, Selection, ShortestPaths,
};
