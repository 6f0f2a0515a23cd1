use crate::error::Error;
use crate::{Weight, V};
use core::ops::Range;

/// A weighted graph in ramp form.
///
/// `index` has one entry per vertex plus one; the edges that leave vertex `v` are
/// `edges[index[v]..index[v + 1]]`, each stored as `(to, weight)`.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph {
    index: Vec<u32>,
    edges: Vec<(V, Weight)>,
}

impl WeightedGraph {
    /// Builds a graph on `num_verts` vertices from a list of `(from, to, weight)` edges.
    ///
    /// If `directed` is false, each edge is stored in both directions. Edges leaving the same
    /// vertex keep their relative order from `edges`.
    pub fn from_edges(
        num_verts: u32,
        edges: &[(V, V, Weight)],
        directed: bool,
    ) -> Result<Self, Error> {
        for &(from, to, _) in edges.iter() {
            for &v in [from, to].iter() {
                if v >= num_verts {
                    return Err(Error::VertexOutOfRange { vert: v, num_verts });
                }
            }
        }

        // Count the out-degree of every vertex into index[v + 1], then integrate.
        let mut index: Vec<u32> = vec![0; num_verts as usize + 1];
        for &(from, to, _) in edges.iter() {
            index[from as usize + 1] += 1;
            if !directed {
                index[to as usize + 1] += 1;
            }
        }
        let mut sum: u32 = 0;
        for ii in index.iter_mut() {
            sum += *ii;
            *ii = sum;
        }

        // Place each edge at the next free position for its source vertex.
        const PLACEHOLDER: (V, Weight) = (!0u32, 0.0);
        let mut next: Vec<u32> = index[..num_verts as usize].to_vec();
        let mut values: Vec<(V, Weight)> = vec![PLACEHOLDER; sum as usize];
        let mut place = |from: V, to: V, weight: Weight| {
            let pos = &mut next[from as usize];
            values[*pos as usize] = (to, weight);
            *pos += 1;
        };
        for &(from, to, weight) in edges.iter() {
            place(from, to, weight);
            if !directed {
                place(to, from, weight);
            }
        }
        debug_assert_eq!(&next[..], &index[1..]);

        Ok(Self {
            index,
            edges: values,
        })
    }

    pub fn num_verts(&self) -> usize {
        self.index.len() - 1
    }

    /// Number of stored (directed) edges. An undirected edge counts twice.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edges_range(&self, from: V) -> Range<usize> {
        self.index[from as usize] as usize..self.index[from as usize + 1] as usize
    }

    pub fn edges_from(&self, from: V) -> &[(V, Weight)] {
        &self.edges[self.edges_range(from)]
    }

    /// Iterates all stored edges as `(from, to, weight)`, grouped by `from`.
    pub fn iter_edges_flattened(&self) -> impl Iterator<Item = (V, V, Weight)> + '_ {
        (0..self.num_verts() as V).flat_map(move |from| {
            self.edges_from(from)
                .iter()
                .map(move |&(to, weight)| (from, to, weight))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed() {
        let g = WeightedGraph::from_edges(4, &[(0, 1, 1.0), (2, 3, 2.5), (0, 2, 4.0)], true)
            .unwrap();
        assert_eq!(g.num_verts(), 4);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.edges_from(0), &[(1, 1.0), (2, 4.0)]);
        assert!(g.edges_from(1).is_empty());
        assert_eq!(g.edges_from(2), &[(3, 2.5)]);
        assert!(g.edges_from(3).is_empty());
        let all: Vec<(V, V, Weight)> = g.iter_edges_flattened().collect();
        assert_eq!(all, vec![(0, 1, 1.0), (0, 2, 4.0), (2, 3, 2.5)]);
    }

    #[test]
    fn undirected() {
        let g = WeightedGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 2.0)], false).unwrap();
        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.edges_from(0), &[(1, 1.0)]);
        assert_eq!(g.edges_from(1), &[(0, 1.0), (2, 2.0)]);
        assert_eq!(g.edges_from(2), &[(1, 2.0)]);
    }

    #[test]
    fn empty_and_isolated() {
        let g = WeightedGraph::from_edges(0, &[], true).unwrap();
        assert_eq!(g.num_verts(), 0);
        assert_eq!(g.iter_edges_flattened().count(), 0);

        let g = WeightedGraph::from_edges(5, &[], false).unwrap();
        assert_eq!(g.num_verts(), 5);
        assert!(g.edges_from(4).is_empty());
    }

    #[test]
    fn out_of_range_vertex() {
        assert_eq!(
            WeightedGraph::from_edges(2, &[(0, 2, 1.0)], true),
            Err(Error::VertexOutOfRange { vert: 2, num_verts: 2 })
        );
    }
}
