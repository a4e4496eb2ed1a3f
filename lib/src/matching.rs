//! # Maximum bipartite matching
//!
//! Hopcroft-Karp: each phase layers the graph with a breadth-first search from
//! every free left vertex, then augments along a maximal set of vertex-disjoint
//! shortest augmenting paths. At most O(sqrt(m + n)) phases run, for
//! O(E sqrt(m + n)) work overall.
//!
//! Both searches use explicit queues and stacks, so the depth of an augmenting
//! path is bounded by heap rather than call stack.

// Various resources
// - https://en.wikipedia.org/wiki/Hopcroft%E2%80%93Karp_algorithm
// - https://www.youtube.com/watch?v=HZLKDC9OSaQ
use crate::graph::{BipartiteGraph, NIL};
use std::collections::VecDeque;

const INF: usize = usize::MAX;

/// Matching pairs left and right vertices. Both vectors are indexed by vertex
/// with slot 0 reserved for `NIL`; an unmatched vertex maps to `NIL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
  pair_u: Vec<usize>,
  pair_v: Vec<usize>,
}

impl Matching {
  /// Returns the empty matching for `graph`
  pub fn empty(graph: &BipartiteGraph) -> Self {
    Self {
      pair_u: vec![NIL; graph.left_count() + 1],
      pair_v: vec![NIL; graph.right_count() + 1],
    }
  }

  /// The number of matched pairs
  pub fn len(&self) -> usize {
    self.pair_u.iter().skip(1).filter(|&&v| v != NIL).count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// The right vertex matched to `u`, if any
  pub fn partner_of_left(&self, u: usize) -> Option<usize> {
    match self.pair_u.get(u) {
      Some(&v) if u != NIL && v != NIL => Some(v),
      _ => None,
    }
  }

  /// The left vertex matched to `v`, if any
  pub fn partner_of_right(&self, v: usize) -> Option<usize> {
    match self.pair_v.get(v) {
      Some(&u) if v != NIL && u != NIL => Some(u),
      _ => None,
    }
  }

  /// Matched `(u, v)` pairs in ascending `u` order
  pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    self
      .pair_u
      .iter()
      .enumerate()
      .skip(1)
      .filter(|(_, &v)| v != NIL)
      .map(|(u, &v)| (u, v))
  }

  /// Raw left-to-right pairing, slot 0 is `NIL`
  pub fn pair_u(&self) -> &[usize] {
    &self.pair_u
  }

  /// Raw right-to-left pairing, slot 0 is `NIL`
  pub fn pair_v(&self) -> &[usize] {
    &self.pair_v
  }

  /// Returns true if this is a matching of `graph`: sized for it, symmetric,
  /// injective, and every pair is an edge of `graph`
  pub fn is_valid_for(&self, graph: &BipartiteGraph) -> bool {
    if self.pair_u.len() != graph.left_count() + 1 || self.pair_v.len() != graph.right_count() + 1 {
      return false;
    }
    if self.pair_u[NIL] != NIL || self.pair_v[NIL] != NIL {
      return false;
    }
    // Symmetry in both directions implies injectivity
    let left_ok = self.pairs().all(|(u, v)| {
      v < self.pair_v.len() && self.pair_v[v] == u && graph.has_edge(u, v)
    });
    let right_ok = self
      .pair_v
      .iter()
      .enumerate()
      .skip(1)
      .filter(|(_, &u)| u != NIL)
      .all(|(v, &u)| u < self.pair_u.len() && self.pair_u[u] == v);
    left_ok && right_ok
  }
}

/// Returns a maximum cardinality matching of `graph`.
/// The result is a pure function of the graph's edges and their insertion order.
pub fn maximum_matching(graph: &BipartiteGraph) -> Matching {
  let matching = extend_matching(graph, Matching::empty(graph));
  debug!(
    "maximum matching of size {} on {}x{} graph with {} edges",
    matching.len(),
    graph.left_count(),
    graph.right_count(),
    graph.edge_count()
  );
  matching
}

/// Grows `initial`, which must be a valid matching of `graph`, to maximum size
pub(crate) fn extend_matching(graph: &BipartiteGraph, initial: Matching) -> Matching {
  debug_assert!(initial.is_valid_for(graph));
  HopcroftKarp::new(graph, initial).run()
}

impl BipartiteGraph {
  /// See [`maximum_matching`]
  pub fn maximum_matching(&self) -> Matching {
    maximum_matching(self)
  }
}

/// One pending vertex of the augmenting search: `u` and how many of its
/// neighbors remain to try, walked from the back of the adjacency list
#[derive(Debug, Copy, Clone)]
struct Frame {
  u: usize,
  remaining: usize,
}

/// Per-call scratch state for a single Hopcroft-Karp run
struct HopcroftKarp<'a> {
  graph: &'a BipartiteGraph,
  pair_u: Vec<usize>,
  pair_v: Vec<usize>,
  dist: Vec<usize>,
  queue: VecDeque<usize>,
  stack: Vec<Frame>,
}

impl<'a> HopcroftKarp<'a> {
  fn new(graph: &'a BipartiteGraph, initial: Matching) -> Self {
    Self {
      graph,
      pair_u: initial.pair_u,
      pair_v: initial.pair_v,
      dist: vec![INF; graph.left_count() + 1],
      queue: VecDeque::with_capacity(graph.left_count()),
      stack: Vec::new(),
    }
  }

  fn run(mut self) -> Matching {
    let m = self.graph.left_count();
    let mut phase = 0;
    while self.layer() {
      phase += 1;
      let mut augmented = 0;
      for u in (1..=m).rev() {
        if self.pair_u[u] == NIL && self.augment(u) {
          augmented += 1;
        }
      }
      trace!(
        "phase {}: shortest augmenting path length {}, {} paths augmented",
        phase,
        2 * self.dist[NIL] - 1,
        augmented
      );
    }
    trace!("no augmenting path after {} phases", phase);
    Matching {
      pair_u: self.pair_u,
      pair_v: self.pair_v,
    }
  }

  /// Breadth-first layering from all free left vertices.
  /// Returns true if some free right vertex was reached, i.e. an augmenting path exists.
  fn layer(&mut self) -> bool {
    let graph = self.graph;
    self.queue.clear();
    for u in (1..=graph.left_count()).rev() {
      if self.pair_u[u] == NIL {
        self.dist[u] = 0;
        self.queue.push_back(u);
      } else {
        self.dist[u] = INF;
      }
    }
    self.dist[NIL] = INF;
    while let Some(u) = self.queue.pop_front() {
      if self.dist[u] >= self.dist[NIL] {
        continue;
      }
      for &v in graph.neighbors(u).iter().rev() {
        // pair_v[v] is NIL for a free v, which records the path length in dist[NIL]
        let next = self.pair_v[v];
        if self.dist[next] == INF {
          self.dist[next] = self.dist[u] + 1;
          if next != NIL {
            self.queue.push_back(next);
          }
        }
      }
    }
    self.dist[NIL] != INF
  }

  /// Depth-first search for an augmenting path from the free vertex `root`
  /// that follows the layering. On success the path is flipped into the
  /// matching. Every vertex the search gives up on is marked exhausted for
  /// the rest of the phase.
  fn augment(&mut self, root: usize) -> bool {
    let graph = self.graph;
    self.stack.clear();
    self.stack.push(Frame {
      u: root,
      remaining: graph.neighbors(root).len(),
    });
    while let Some(top) = self.stack.last_mut() {
      let u = top.u;
      if top.remaining == 0 {
        self.dist[u] = INF;
        self.stack.pop();
        continue;
      }
      top.remaining -= 1;
      let v = graph.neighbors(u)[top.remaining];
      let next = self.pair_v[v];
      if self.dist[next] != self.dist[u] + 1 {
        continue;
      }
      if next == NIL {
        // Each frame's `remaining` now indexes the edge it descended through
        for frame in self.stack.drain(..) {
          let v = graph.neighbors(frame.u)[frame.remaining];
          self.pair_u[frame.u] = v;
          self.pair_v[v] = frame.u;
        }
        return true;
      }
      self.stack.push(Frame {
        u: next,
        remaining: graph.neighbors(next).len(),
      });
    }
    false
  }
}
