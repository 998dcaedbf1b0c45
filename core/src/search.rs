use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};

/// How the engine picks the next vertex to finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Scan every vertex slot for the unfinalized minimum. O(V²) overall.
    #[default]
    LinearScan,
    /// Lazy-deletion binary heap. O((V + E) log V); tie order among equal
    /// distances differs from the linear scan, distances do not.
    BinaryHeap,
}

/// Hooks invoked while a search runs. All methods default to no-ops.
pub trait SearchObserver {
    /// Called once per vertex, in the order vertices are finalized.
    fn on_finalize(&mut self, _vertex: VertexId, _distance: Weight) {}

    /// Called for every successful relaxation, before the new value is stored.
    fn on_relax(&mut self, _v: VertexId, _via: VertexId, _old: Option<Weight>, _new: Weight) {}

    /// Called after each finalized vertex's edges are relaxed, with the full
    /// distance table (indexed by `vertex - 1`) as it stands at that point.
    fn on_round(&mut self, _distances: &[Option<Weight>]) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Distances and predecessors from a single start vertex.
///
/// Both vectors are indexed by `vertex - 1` and span the whole capacity of
/// the graph they were computed on. `None` means unreached (distance) or no
/// predecessor (parent); the start vertex has distance 0 and no parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub(crate) start: VertexId,
    pub(crate) distance: Vec<Option<Weight>>,
    pub(crate) parent: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    fn init(capacity: usize, start: VertexId) -> Self {
        let mut distance = vec![None; capacity];
        distance[start - 1] = Some(0);
        Self {
            start,
            distance,
            parent: vec![None; capacity],
        }
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn capacity(&self) -> usize {
        self.distance.len()
    }

    /// Shortest distance from the start to `v`, `None` if unreached or out of range.
    pub fn distance(&self, v: VertexId) -> Option<Weight> {
        v.checked_sub(1)
            .and_then(|i| self.distance.get(i))
            .copied()
            .flatten()
    }

    /// Predecessor of `v` on its shortest path.
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        v.checked_sub(1)
            .and_then(|i| self.parent.get(i))
            .copied()
            .flatten()
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_some()
    }

    /// Number of vertices reached, the start included.
    pub fn reachable_count(&self) -> usize {
        self.distance.iter().filter(|d| d.is_some()).count()
    }

    /// Raw distance slots, indexed by `vertex - 1`.
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.distance
    }

    /// Raw parent slots, indexed by `vertex - 1`.
    pub fn parents(&self) -> &[Option<VertexId>] {
        &self.parent
    }
}

/// Dijkstra from `start` using the linear-scan selection.
pub fn shortest_paths(graph: &Graph, start: VertexId) -> Result<ShortestPaths> {
    shortest_paths_with(graph, start, Selection::LinearScan, &mut NoopObserver)
}

/// Dijkstra from `start` with an explicit selection strategy and observer.
///
/// Edge weights are non-negative by construction of [`Graph`]. Fails only
/// when `start` is outside `1..=capacity`.
pub fn shortest_paths_with<O>(
    graph: &Graph,
    start: VertexId,
    selection: Selection,
    observer: &mut O,
) -> Result<ShortestPaths>
where
    O: SearchObserver + ?Sized,
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::InvalidVertex {
            vertex: start,
            capacity: graph.capacity(),
        });
    }

    let mut result = ShortestPaths::init(graph.capacity(), start);
    match selection {
        Selection::LinearScan => linear_scan(graph, &mut result, observer),
        Selection::BinaryHeap => binary_heap(graph, &mut result, observer),
    }

    debug!(
        start,
        reachable = result.reachable_count(),
        ?selection,
        "shortest paths computed"
    );
    Ok(result)
}

/// Finalize `current`, relax its edges, then rescan every slot for the
/// unfinalized vertex with the smallest finite distance. When the scan finds
/// nothing, `current` keeps its old value and the loop sees it finalized.
fn linear_scan<O>(graph: &Graph, result: &mut ShortestPaths, observer: &mut O)
where
    O: SearchObserver + ?Sized,
{
    let mut finalized = vec![false; graph.capacity()];
    let mut current = result.start;

    while !finalized[current - 1] {
        finalized[current - 1] = true;
        let Some(base) = result.distance[current - 1] else {
            break;
        };
        trace!(vertex = current, distance = base, "finalized");
        observer.on_finalize(current, base);

        relax(graph, current, base, result, observer, |_, _| {});
        observer.on_round(&result.distance);

        let mut smallest: Option<Weight> = None;
        for (i, dist) in result.distance.iter().enumerate() {
            if finalized[i] {
                continue;
            }
            if let Some(d) = *dist {
                if smallest.map_or(true, |s| d < s) {
                    current = i + 1;
                    smallest = Some(d);
                }
            }
        }
    }
}

fn binary_heap<O>(graph: &Graph, result: &mut ShortestPaths, observer: &mut O)
where
    O: SearchObserver + ?Sized,
{
    let mut finalized = vec![false; graph.capacity()];
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0, result.start)));

    while let Some(Reverse((base, current))) = heap.pop() {
        // Stale entries sort after the live one, so the first pop wins
        if finalized[current - 1] {
            continue;
        }
        finalized[current - 1] = true;
        trace!(vertex = current, distance = base, "finalized");
        observer.on_finalize(current, base);

        relax(graph, current, base, result, observer, |v, d| {
            heap.push(Reverse((d, v)));
        });
        observer.on_round(&result.distance);
    }
}

/// Strict-less relaxation of every outgoing edge of `current`.
///
/// Edge weights are capped at [`MAX_WEIGHT`](crate::MAX_WEIGHT) on insertion,
/// so a simple path across the whole capacity cannot overflow a `Weight`.
fn relax<O, F>(
    graph: &Graph,
    current: VertexId,
    base: Weight,
    result: &mut ShortestPaths,
    observer: &mut O,
    mut improved: F,
) where
    O: SearchObserver + ?Sized,
    F: FnMut(VertexId, Weight),
{
    for edge in graph.neighbors(current) {
        let candidate = base + edge.weight;
        let slot = edge.target - 1;
        let old = result.distance[slot];
        if old.map_or(true, |d| candidate < d) {
            observer.on_relax(edge.target, current, old, candidate);
            result.distance[slot] = Some(candidate);
            result.parent[slot] = Some(current);
            improved(edge.target, candidate);
        }
    }
}
