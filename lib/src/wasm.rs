//! # JSON interface
//!
//! Defines a serde-friendly entry point for callers that hand over a whole
//! graph at once, such as JavaScript through `wasm-bindgen`.
use crate::error::Error;
use crate::graph::BipartiteGraph;
use crate::cover::independent_set_from_matching;
use crate::matching::maximum_matching;
use std::convert::TryFrom;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

/// Input format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Input {
    /// The number of left vertices, addressed 1..=m
    pub m: i64,
    /// The number of right vertices, addressed 1..=n
    pub n: i64,
    /// Edges as (u, v) pairs, in insertion order
    #[serde(default)]
    pub edges: Vec<(i64, i64)>,
}

/// Output format. Every vector is indexed by vertex with slot 0 reserved for NIL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub matching_size: usize,
    pub pair_u: Vec<usize>,
    pub pair_v: Vec<usize>,
    pub in_u: Vec<bool>,
    pub in_v: Vec<bool>,
    pub cover_u: Vec<bool>,
    pub cover_v: Vec<bool>,
}

/// Computes a maximum matching and maximum independent set for `input`
/// # Example
///
///  ```js
///  const input = { m: 2, n: 2, edges: [[1, 1], [2, 1]] };
///  const output = require('@mtgoncurve/konig').konig_run(input);
///  console.log(output.matching_size);
///  ```
#[wasm_bindgen]
pub fn konig_run(input: &JsValue) -> JsValue {
    let input: Input = match input.into_serde() {
        Err(e) => {
            return JsValue::from_str(&format!("Error deserializing graph input: {:#?}", e));
        }
        Ok(v) => v,
    };
    let result = match run(&input) {
        Err(e) => {
            return JsValue::from_str(&format!("Error running matching for input: {}", e));
        }
        Ok(v) => v,
    };
    JsValue::from_serde(&result).expect("this can't fail")
}

/// Validates `input` and runs both computations on the resulting graph
pub fn run(input: &Input) -> Result<Output, Error> {
    let graph = build_graph(input)?;
    let matching = maximum_matching(&graph);
    let set = independent_set_from_matching(&graph, &matching);
    let cover = set.vertex_cover();
    Ok(Output {
        matching_size: matching.len(),
        pair_u: matching.pair_u().to_vec(),
        pair_v: matching.pair_v().to_vec(),
        in_u: set.in_u().to_vec(),
        in_v: set.in_v().to_vec(),
        cover_u: cover.in_u().to_vec(),
        cover_v: cover.in_v().to_vec(),
    })
}

/// Like `run`, but reads and writes JSON text
pub fn run_json(input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let input: Input = serde_json::from_str(input)?;
    let output = run(&input)?;
    Ok(serde_json::to_string(&output)?)
}

fn build_graph(input: &Input) -> Result<BipartiteGraph, Error> {
    let mut graph = BipartiteGraph::from_signed(input.m, input.n)?;
    for &(u, v) in &input.edges {
        match (usize::try_from(u), usize::try_from(v)) {
            (Ok(uu), Ok(vv)) => graph.add_edge(uu, vv)?,
            _ => return Err(Error::InvalidVertexIndex { u, v }),
        }
    }
    Ok(graph)
}
