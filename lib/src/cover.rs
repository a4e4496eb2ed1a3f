//! # Maximum independent set and minimum vertex cover
//!
//! By König's theorem the minimum vertex cover of a bipartite graph has as many
//! vertices as a maximum matching has edges. Starting from every free left
//! vertex, mark everything reachable along alternating paths (a non-matching
//! edge into V, then the matching edge back into U). Then
//!
//! - minimum vertex cover = unmarked U + marked V
//! - maximum independent set = marked U + unmarked V
//!
//! The reduction only runs on a matching this crate computed for the same
//! graph; it is not reachable with a caller-supplied matching.
//!
//! ```compile_fail
//! use konig::{cover, graph};
//! let g = graph!(3, 3; (1, 1));
//! let foreign = graph!(1, 1; (1, 1)).maximum_matching();
//! cover::independent_set_from_matching(&g, &foreign);
//! ```
use crate::graph::{BipartiteGraph, NIL};
use crate::matching::{maximum_matching, Matching};

/// Membership of each vertex in a maximum independent set.
/// Both vectors are indexed by vertex; slot 0 is `NIL` and always false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndependentSet {
  in_u: Vec<bool>,
  in_v: Vec<bool>,
  matching_size: usize,
}

/// Membership of each vertex in a minimum vertex cover, the complement of an
/// `IndependentSet`. Slot 0 is `NIL` and always false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexCover {
  in_u: Vec<bool>,
  in_v: Vec<bool>,
}

impl IndependentSet {
  pub fn contains_left(&self, u: usize) -> bool {
    self.in_u.get(u).copied().unwrap_or(false)
  }

  pub fn contains_right(&self, v: usize) -> bool {
    self.in_v.get(v).copied().unwrap_or(false)
  }

  /// Left members in ascending order
  pub fn left(&self) -> impl Iterator<Item = usize> + '_ {
    members(&self.in_u)
  }

  /// Right members in ascending order
  pub fn right(&self) -> impl Iterator<Item = usize> + '_ {
    members(&self.in_v)
  }

  pub fn len(&self) -> usize {
    self.left().count() + self.right().count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// The size of the maximum matching this set was derived from
  pub fn matching_size(&self) -> usize {
    self.matching_size
  }

  pub fn in_u(&self) -> &[bool] {
    &self.in_u
  }

  pub fn in_v(&self) -> &[bool] {
    &self.in_v
  }

  /// Returns true if no edge of `graph` joins two members
  pub fn is_independent_in(&self, graph: &BipartiteGraph) -> bool {
    graph
      .edges()
      .all(|(u, v)| !(self.contains_left(u) && self.contains_right(v)))
  }

  /// The complementary minimum vertex cover
  pub fn vertex_cover(&self) -> VertexCover {
    VertexCover {
      in_u: complement(&self.in_u),
      in_v: complement(&self.in_v),
    }
  }
}

impl VertexCover {
  pub fn contains_left(&self, u: usize) -> bool {
    self.in_u.get(u).copied().unwrap_or(false)
  }

  pub fn contains_right(&self, v: usize) -> bool {
    self.in_v.get(v).copied().unwrap_or(false)
  }

  pub fn left(&self) -> impl Iterator<Item = usize> + '_ {
    members(&self.in_u)
  }

  pub fn right(&self) -> impl Iterator<Item = usize> + '_ {
    members(&self.in_v)
  }

  pub fn len(&self) -> usize {
    self.left().count() + self.right().count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn in_u(&self) -> &[bool] {
    &self.in_u
  }

  pub fn in_v(&self) -> &[bool] {
    &self.in_v
  }

  /// Returns true if every edge of `graph` has an endpoint in the cover
  pub fn covers(&self, graph: &BipartiteGraph) -> bool {
    graph
      .edges()
      .all(|(u, v)| self.contains_left(u) || self.contains_right(v))
  }
}

fn members(flags: &[bool]) -> impl Iterator<Item = usize> + '_ {
  flags
    .iter()
    .enumerate()
    .skip(1)
    .filter(|(_, &f)| f)
    .map(|(i, _)| i)
}

fn complement(flags: &[bool]) -> Vec<bool> {
  flags
    .iter()
    .enumerate()
    .map(|(i, &f)| i != NIL && !f)
    .collect()
}

/// Returns a maximum independent set of `graph`
pub fn maximum_independent_set(graph: &BipartiteGraph) -> IndependentSet {
  let matching = maximum_matching(graph);
  let set = independent_set_from_matching(graph, &matching);
  debug!(
    "maximum independent set of size {} ({} left, {} right)",
    set.len(),
    set.left().count(),
    set.right().count()
  );
  set
}

/// Returns a minimum vertex cover of `graph`
pub fn minimum_vertex_cover(graph: &BipartiteGraph) -> VertexCover {
  maximum_independent_set(graph).vertex_cover()
}

/// Reduces `matching`, which must be a maximum matching of `graph`, to the
/// König partition. A matching that is not maximum yields a set that is
/// not independent.
pub(crate) fn independent_set_from_matching(graph: &BipartiteGraph, matching: &Matching) -> IndependentSet {
  let pair_u = matching.pair_u();
  let pair_v = matching.pair_v();
  let mut vis_u = vec![false; graph.left_count() + 1];
  let mut vis_v = vec![false; graph.right_count() + 1];
  // (u, neighbors left to scan), scanned from the back of the adjacency list
  let mut stack: Vec<(usize, usize)> = Vec::new();

  for root in (1..=graph.left_count()).rev() {
    if pair_u[root] != NIL {
      continue;
    }
    vis_u[root] = true;
    stack.push((root, graph.neighbors(root).len()));
    while let Some(top) = stack.last_mut() {
      let u = top.0;
      if top.1 == 0 {
        stack.pop();
        continue;
      }
      top.1 -= 1;
      let v = graph.neighbors(u)[top.1];
      if pair_u[u] == v || vis_v[v] {
        continue;
      }
      vis_v[v] = true;
      let next = pair_v[v];
      if next != NIL && !vis_u[next] {
        vis_u[next] = true;
        stack.push((next, graph.neighbors(next).len()));
      }
    }
  }

  vis_v[NIL] = true;
  IndependentSet {
    in_u: vis_u,
    in_v: vis_v.iter().map(|&visited| !visited).collect(),
    matching_size: matching.len(),
  }
}

impl BipartiteGraph {
  /// See [`maximum_independent_set`]
  pub fn maximum_independent_set(&self) -> IndependentSet {
    maximum_independent_set(self)
  }

  /// See [`minimum_vertex_cover`]
  pub fn minimum_vertex_cover(&self) -> VertexCover {
    minimum_vertex_cover(self)
  }
}
