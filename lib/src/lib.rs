//! # Bipartite matching library
//!
//! konig computes a maximum cardinality matching of a bipartite graph with the
//! Hopcroft-Karp algorithm, and reduces that matching to a maximum independent
//! set (equivalently a minimum vertex cover) using König's theorem.
//!
//! ```
//! use konig::graph;
//! let graph = graph!(3, 3; (1, 1), (1, 2), (2, 1), (3, 3));
//! assert_eq!(graph.maximum_matching().len(), 3);
//! assert_eq!(graph.maximum_independent_set().len(), 3);
//! ```
//!
//! Glob imports leave the crate name unambiguous:
//!
//! ```
//! use konig::*;
//! let g = BipartiteGraph::from_edges(2, 2, vec![(1, 1), (2, 1)]).unwrap();
//! assert_eq!(konig::maximum_matching(&g).len(), 1);
//! assert_eq!(konig::minimum_vertex_cover(&g).len(), 1);
//! ```

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate log;
extern crate wasm_bindgen;

pub mod error;
#[macro_use]
pub mod graph;
pub mod cover;
pub mod matching;
pub mod wasm;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::graph::{BipartiteGraph, MAX_PARTITION_SIZE, NIL};
pub use crate::cover::{maximum_independent_set, minimum_vertex_cover, IndependentSet, VertexCover};
pub use crate::matching::{maximum_matching, Matching};
pub use crate::wasm::run;
