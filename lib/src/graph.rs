//! # Bipartite graph store
//!
//! Vertices are addressed `1..=m` on the left (U) and `1..=n` on the right (V).
//! Index `0` is the `NIL` sentinel on both sides and never names a real vertex.
use crate::error::Error;
use std::convert::TryFrom;

/// The reserved "no vertex" index, shared by both partitions
pub const NIL: usize = 0;

/// The largest accepted partition size. Larger sizes fail with `InvalidSize`
/// instead of aborting on allocation.
pub const MAX_PARTITION_SIZE: usize = 1 << 30;

/// BipartiteGraph holds the two partition sizes and, for each left vertex,
/// its right neighbors in insertion order. Parallel edges are kept.
///
/// The graph carries no computation state, so a shared `&BipartiteGraph`
/// can serve any number of matching or independent set computations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BipartiteGraph {
    m: usize,
    n: usize,
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl BipartiteGraph {
    /// Returns an edgeless graph with `m` left and `n` right vertices.
    /// Fails if either size exceeds `MAX_PARTITION_SIZE` or the adjacency
    /// table cannot be allocated.
    pub fn new(m: usize, n: usize) -> Result<Self, Error> {
        let invalid = || Error::InvalidSize {
            m: signed(m),
            n: signed(n),
        };
        if m > MAX_PARTITION_SIZE || n > MAX_PARTITION_SIZE {
            return Err(invalid());
        }
        // One extra slot for NIL
        let mut adj = Vec::new();
        adj.try_reserve_exact(m + 1).map_err(|_| invalid())?;
        adj.resize_with(m + 1, Vec::new);
        Ok(Self {
            m,
            n,
            adj,
            edge_count: 0,
        })
    }

    /// Returns a graph from signed partition sizes, rejecting negatives
    pub fn from_signed(m: i64, n: i64) -> Result<Self, Error> {
        match (usize::try_from(m), usize::try_from(n)) {
            (Ok(m), Ok(n)) => Self::new(m, n),
            _ => Err(Error::InvalidSize { m, n }),
        }
    }

    /// Returns a graph with every edge of `edges` inserted in order
    pub fn from_edges<I>(m: usize, n: usize, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(m, n)?;
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Appends `v` to the neighbors of `u`.
    /// On error the graph is left untouched.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), Error> {
        if u == NIL || u > self.m || v == NIL || v > self.n {
            return Err(Error::InvalidVertexIndex {
                u: signed(u),
                v: signed(v),
            });
        }
        self.adj[u].push(v);
        self.edge_count += 1;
        Ok(())
    }

    /// The size of the left partition, U
    pub fn left_count(&self) -> usize {
        self.m
    }

    /// The size of the right partition, V
    pub fn right_count(&self) -> usize {
        self.n
    }

    pub fn vertex_count(&self) -> usize {
        self.m + self.n
    }

    /// The number of edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The right neighbors of `u` in insertion order.
    /// `NIL` and out of range vertices have no neighbors.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        match self.adj.get(u) {
            Some(vs) => vs,
            None => &[],
        }
    }

    /// All edges as `(u, v)` pairs, grouped by `u` and in insertion order per `u`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self
            .adj
            .iter()
            .enumerate()
            .flat_map(|(u, vs)| vs.iter().map(move |&v| (u, v)))
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).contains(&v)
    }
}

fn signed(x: usize) -> i64 {
    i64::try_from(x).unwrap_or(i64::MAX)
}

/// Builds a `BipartiteGraph` from sizes and a literal edge list,
/// panicking if any edge is out of range
///
/// ```
/// use konig::graph;
/// let g = graph!(2, 2; (1, 1), (2, 1));
/// assert_eq!(g.edge_count(), 2);
/// ```
#[macro_export]
macro_rules! graph {
    ($m:expr, $n:expr) => {
        $crate::graph::BipartiteGraph::new($m, $n)
            .unwrap_or_else(|e| panic!("Cannot build graph: {}", e))
    };
    ($m:expr, $n:expr; $(($u:expr, $v:expr)),* $(,)?) => {
        $crate::graph::BipartiteGraph::from_edges($m, $n, vec![$(($u, $v)),*])
            .unwrap_or_else(|e| panic!("Cannot build graph: {}", e))
    };
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::graph::*;

    #[test]
    fn new_graph_has_no_edges() {
        let g = graph!(3, 4);
        assert_eq!(g.left_count(), 3);
        assert_eq!(g.right_count(), 4);
        assert_eq!(g.vertex_count(), 7);
        assert_eq!(g.edge_count(), 0);
        for u in 0..=4 {
            assert!(g.neighbors(u).is_empty());
        }
    }

    #[test]
    fn empty_partitions_are_valid() {
        let g = graph!(0, 0);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn negative_sizes_are_rejected() {
        assert_eq!(
            BipartiteGraph::from_signed(-1, 3),
            Err(Error::InvalidSize { m: -1, n: 3 })
        );
        assert_eq!(
            BipartiteGraph::from_signed(2, -5),
            Err(Error::InvalidSize { m: 2, n: -5 })
        );
        assert!(BipartiteGraph::from_signed(2, 5).is_ok());
    }

    #[test]
    fn oversized_partitions_are_rejected() {
        assert!(BipartiteGraph::new(usize::MAX, 1).is_err());
        assert!(BipartiteGraph::new(1, usize::MAX).is_err());
        assert_eq!(
            BipartiteGraph::new(MAX_PARTITION_SIZE + 1, 0),
            Err(Error::InvalidSize {
                m: (MAX_PARTITION_SIZE + 1) as i64,
                n: 0
            })
        );
        assert_eq!(
            BipartiteGraph::from_signed(1, i64::MAX),
            Err(Error::InvalidSize { m: 1, n: i64::MAX })
        );
        assert_eq!(BipartiteGraph::new(0, MAX_PARTITION_SIZE).map(|g| g.right_count()), Ok(MAX_PARTITION_SIZE));
    }

    #[test]
    fn neighbors_keep_insertion_order_and_parallel_edges() {
        let g = graph!(2, 3; (1, 3), (1, 1), (1, 3), (2, 2));
        assert_eq!(g.neighbors(1), &[3, 1, 3]);
        assert_eq!(g.neighbors(2), &[2]);
        assert_eq!(g.edge_count(), 4);
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(1, 3), (1, 1), (1, 3), (2, 2)]);
        assert!(g.has_edge(1, 1));
        assert!(!g.has_edge(2, 1));
    }

    #[test]
    fn out_of_range_edges_fail_and_leave_graph_unmodified() {
        let mut g = graph!(2, 2; (1, 1));
        let before = g.clone();
        for &(u, v) in &[(0, 1), (3, 1), (1, 0), (1, 3), (0, 0)] {
            assert_eq!(
                g.add_edge(u, v),
                Err(Error::InvalidVertexIndex {
                    u: u as i64,
                    v: v as i64
                })
            );
            assert_eq!(g, before);
        }
    }

    #[test]
    fn from_edges_stops_at_first_bad_edge() {
        let r = BipartiteGraph::from_edges(1, 1, vec![(1, 1), (2, 1), (1, 1)]);
        assert_eq!(r, Err(Error::InvalidVertexIndex { u: 2, v: 1 }));
    }
}
