//! Graph searches that rely on decrease-key.

use crate::error::Error;
use crate::graph::WeightedGraph;
use crate::queue::IndexedPriorityQueue;
use crate::{Weight, V};
use log::debug;

const NO_VERT: V = !0u32;

/// Result of a single-source shortest path search.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: V,
    distance: Vec<Option<Weight>>,
    // predecessor on the shortest path from `source`, or NO_VERT
    prev: Vec<V>,
}

impl ShortestPaths {
    pub fn source(&self) -> V {
        self.source
    }

    /// Length of the shortest path from the source to `to`, or `None` if `to` is unreachable
    /// (or not a vertex).
    pub fn distance(&self, to: V) -> Option<Weight> {
        self.distance.get(to as usize).copied().flatten()
    }

    /// Vertices along a shortest path from the source to `to`, both included.
    pub fn path_to(&self, to: V) -> Option<Vec<V>> {
        self.distance(to)?;
        let mut path = vec![to];
        let mut v = to;
        while v != self.source {
            v = self.prev[v as usize];
            debug_assert_ne!(v, NO_VERT);
            path.push(v);
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm. Every edge weight must be non-negative.
///
/// Each vertex is in the queue at most once; finding a shorter path to a vertex that is
/// already queued lowers its priority in place.
pub fn shortest_paths(graph: &WeightedGraph, source: V) -> Result<ShortestPaths, Error> {
    let nv = graph.num_verts();
    if source as usize >= nv {
        return Err(Error::VertexOutOfRange {
            vert: source,
            num_verts: nv as u32,
        });
    }
    for (from, to, weight) in graph.iter_edges_flattened() {
        if !(weight >= 0.0) {
            return Err(Error::NegativeWeight { from, to });
        }
    }

    let mut distance: Vec<Option<Weight>> = vec![None; nv];
    let mut prev: Vec<V> = vec![NO_VERT; nv];
    let mut queue = IndexedPriorityQueue::min(nv as u32);
    queue.insert(source, 0.0)?;

    while let Some((v, d)) = queue.delete_top() {
        debug!("v{} settled at distance {}", v, d);
        distance[v as usize] = Some(d);
        for &(to, weight) in graph.edges_from(v) {
            if distance[to as usize].is_some() {
                continue;
            }
            let candidate = d + weight;
            match queue.get_priority(to) {
                None => {
                    queue.insert(to, candidate)?;
                    prev[to as usize] = v;
                }
                Some(current) if candidate < current => {
                    debug!("v{}: {} -> {} via v{}", to, current, candidate, v);
                    queue.change_priority(to, candidate)?;
                    prev[to as usize] = v;
                }
                Some(_) => {}
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distance,
        prev,
    })
}

/// Prim's algorithm, restarted from each vertex that no earlier tree reached, so a
/// disconnected graph yields one tree per component.
///
/// The graph should be undirected (see `WeightedGraph::from_edges`). Returns the chosen
/// edges as `(from, to, weight)`, where `from` is already in the tree when the edge is chosen.
pub fn minimum_spanning_forest(graph: &WeightedGraph) -> Result<Vec<(V, V, Weight)>, Error> {
    let nv = graph.num_verts();
    let mut in_tree: Vec<bool> = vec![false; nv];
    let mut link: Vec<V> = vec![NO_VERT; nv];
    let mut forest: Vec<(V, V, Weight)> = Vec::new();
    let mut queue = IndexedPriorityQueue::min(nv as u32);

    for root in 0..nv as V {
        if in_tree[root as usize] {
            continue;
        }
        debug!("growing tree from v{}", root);
        queue.insert(root, 0.0)?;
        while let Some((v, weight)) = queue.delete_top() {
            in_tree[v as usize] = true;
            let from = link[v as usize];
            if from != NO_VERT {
                forest.push((from, v, weight));
            }
            for &(to, weight) in graph.edges_from(v) {
                if in_tree[to as usize] {
                    continue;
                }
                match queue.get_priority(to) {
                    None => {
                        queue.insert(to, weight)?;
                        link[to as usize] = v;
                    }
                    Some(current) if weight < current => {
                        queue.change_priority(to, weight)?;
                        link[to as usize] = v;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    debug!("spanning forest has {} edges", forest.len());
    Ok(forest)
}
