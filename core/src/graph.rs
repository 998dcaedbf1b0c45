use tracing::debug;

use crate::config::{BoundsPolicy, GraphConfig, MAX_WEIGHT};
use crate::error::{GraphError, Result};

/// Vertex identifier. Valid ids are `1..=capacity`; 0 is never a vertex.
pub type VertexId = usize;

/// Edge weight. Insertion accepts `0..=MAX_WEIGHT`.
pub type Weight = i64;

/// A directed arc in the adjacency list. The source vertex is implied by
/// the list the edge is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

/// Fixed-capacity weighted graph stored as adjacency lists.
///
/// `adjacency[v - 1]` holds the outgoing edges of vertex `v`. Undirected
/// inserts store both arcs up front; nothing is mirrored lazily.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    directed: bool,
    config: GraphConfig,
}

impl Graph {
    /// Empty graph with the default capacity and the skip-on-out-of-range policy.
    pub fn new(directed: bool) -> Self {
        let config = GraphConfig::default();
        Self {
            adjacency: vec![Vec::new(); config.capacity],
            directed,
            config,
        }
    }

    pub fn with_config(directed: bool, config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            adjacency: vec![Vec::new(); config.capacity],
            directed,
            config,
        })
    }

    pub fn with_capacity(directed: bool, capacity: usize) -> Result<Self> {
        Self::with_config(directed, GraphConfig::new().capacity(capacity))
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether `v` is a valid vertex id for this graph.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v >= 1 && v <= self.config.capacity
    }

    /// Insert the arc `x -> y`, plus `y -> x` when `directed` is false.
    ///
    /// Returns `Ok(true)` when the edge was stored and `Ok(false)` when an
    /// out-of-range endpoint was skipped under [`BoundsPolicy::Ignore`].
    /// Both endpoints are checked before anything is stored, so a rejected
    /// undirected insert never leaves half an edge behind.
    pub fn insert_edge(
        &mut self,
        x: VertexId,
        y: VertexId,
        weight: Weight,
        directed: bool,
    ) -> Result<bool> {
        if weight < 0 {
            return Err(GraphError::NegativeWeight {
                from: x,
                to: y,
                weight,
            });
        }
        if weight > MAX_WEIGHT {
            return Err(GraphError::WeightTooLarge {
                from: x,
                to: y,
                weight,
                max: MAX_WEIGHT,
            });
        }

        for v in [x, y] {
            if self.contains_vertex(v) {
                continue;
            }
            match self.config.bounds {
                BoundsPolicy::Ignore => {
                    debug!(
                        from = x,
                        to = y,
                        vertex = v,
                        capacity = self.config.capacity,
                        "skipping edge with out-of-range vertex"
                    );
                    return Ok(false);
                }
                BoundsPolicy::Reject => {
                    return Err(GraphError::OutOfRange {
                        vertex: v,
                        capacity: self.config.capacity,
                    });
                }
            }
        }

        let arcs = if directed { 1 } else { 2 };
        for (from, to) in [(x, y), (y, x)].into_iter().take(arcs) {
            self.adjacency[from - 1].push(Edge { target: to, weight });
        }
        Ok(true)
    }

    /// Insert an edge using the graph's own directedness.
    pub fn add_edge(&mut self, x: VertexId, y: VertexId, weight: Weight) -> Result<bool> {
        self.insert_edge(x, y, weight, self.directed)
    }

    /// Bulk insert `(x, y, weight)` triples. Returns how many were stored;
    /// stops at the first error.
    pub fn load_edges<I>(&mut self, edges: I) -> Result<usize>
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let mut stored = 0;
        for (x, y, weight) in edges {
            if self.add_edge(x, y, weight)? {
                stored += 1;
            }
        }
        Ok(stored)
    }

    /// Outgoing edges of `v`. Empty for out-of-range ids.
    pub fn neighbors(&self, v: VertexId) -> &[Edge] {
        if self.contains_vertex(v) {
            &self.adjacency[v - 1]
        } else {
            &[]
        }
    }

    /// Number of stored arcs. An undirected insert stores two.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|v| v.len()).sum()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let slots = self.adjacency.capacity() * size_of::<Vec<Edge>>();
        let edges: usize = self
            .adjacency
            .iter()
            .map(|v| v.capacity() * size_of::<Edge>())
            .sum();

        slots + edges
    }
}
