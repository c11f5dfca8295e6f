// Check a submitted pipeline graph for acyclicity before reporting back to the editor
use crate::schemas::graph::{Pipeline, ValidationReport};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("edge references unknown node id `{0}`")]
    UnknownNode(String),
}

#[derive(Debug)]
pub struct GraphProcessor {
    pub graph: DiGraph<String, ()>,
    pub node_map: HashMap<String, NodeIndex>,
}

impl GraphProcessor {
    /// Builds the directed graph for a submitted pipeline.
    ///
    /// Duplicate node ids collapse onto one vertex; duplicate edges are kept
    /// as parallel edges. An edge endpoint that names an undeclared node id
    /// rejects the whole pipeline with [`GraphError::UnknownNode`].
    pub fn new(pipeline: &Pipeline) -> Result<Self, GraphError> {
        let mut graph = DiGraph::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        for node in &pipeline.nodes {
            node_map
                .entry(node.id.clone())
                .or_insert_with(|| graph.add_node(node.id.clone()));
        }

        for edge in &pipeline.edges {
            let src = node_map
                .get(&edge.source)
                .ok_or_else(|| GraphError::UnknownNode(edge.source.clone()))?;
            let target = node_map
                .get(&edge.target)
                .ok_or_else(|| GraphError::UnknownNode(edge.target.clone()))?;
            graph.add_edge(*src, *target, ());
        }

        Ok(Self { graph, node_map })
    }

    /// Topological sort succeeds exactly when the graph has no directed
    /// cycle; a self-loop counts as a cycle of length one.
    pub fn is_dag(&self) -> bool {
        toposort(&self.graph, None).is_ok()
    }

    /// Node and edge counts echo the submitted arrays as-is (duplicates
    /// included), matching what the editor displays.
    pub fn report(&self, pipeline: &Pipeline) -> ValidationReport {
        ValidationReport {
            num_nodes: pipeline.nodes.len(),
            num_edges: pipeline.edges.len(),
            is_dag: self.is_dag(),
        }
    }
}
