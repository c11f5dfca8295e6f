// Graph definitions for the Frontend
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// A pipeline as drawn in the editor, submitted for validation.
///
/// The frontend serializes more per node (position, type, form data) than the
/// validator needs; anything beyond the fields here is ignored on
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Pipeline {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Verdict returned to the frontend after parsing a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}
