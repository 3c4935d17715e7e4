//! Diagram: the builder that owns every node and edge of one ERD

use super::edge::Edge;
use super::node::{Node, NodeId};
use crate::render::{self, Format, GraphvizEngine, LayoutEngine, RenderOptions, RenderOutput, Viewer};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building or rendering a diagram
#[derive(Debug, Error)]
pub enum ErdError {
    #[error("Duplicate node: {0}")]
    DuplicateNode(NodeId),

    #[error("Unknown node '{missing}' in edge {from} -> {to}")]
    UnknownNode {
        missing: NodeId,
        from: NodeId,
        to: NodeId,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Viewer error: {0}")]
    Viewer(String),
}

/// Result type for diagram operations
pub type ErdResult<T> = Result<T, ErdError>;

/// An entity-relationship diagram under construction
///
/// Nodes keep their insertion order, which is the order they are handed to
/// the layout engine. Edges may only reference nodes already registered.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    comment: Option<String>,
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Create an empty diagram
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment emitted at the top of the DOT source
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Register a node
    ///
    /// Fails with [`ErdError::DuplicateNode`] if the id is taken; the
    /// existing node is left as it was.
    pub fn add_node(&mut self, id: impl Into<NodeId>, label: impl Into<String>) -> ErdResult<&Node> {
        let node = Node::new(id, label);
        if self.index.contains_key(&node.id) {
            return Err(ErdError::DuplicateNode(node.id));
        }
        debug!(node = %node.id, lines = node.label_lines().count(), "registered node");
        let idx = self.nodes.len();
        self.index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        Ok(&self.nodes[idx])
    }

    /// Register a directed edge between two existing nodes
    ///
    /// The source endpoint is checked first. Parallel and opposing edges
    /// are both kept.
    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> ErdResult<&Edge> {
        let edge = Edge::new(from, to);
        for endpoint in [&edge.source, &edge.target] {
            if !self.index.contains_key(endpoint) {
                return Err(ErdError::UnknownNode {
                    missing: endpoint.clone(),
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                });
            }
        }
        debug!(source = %edge.source, target = %edge.target, "registered edge");
        self.edges.push(edge);
        Ok(&self.edges[self.edges.len() - 1])
    }

    /// Register each edge in order, stopping at the first failure
    pub fn add_edges<I, A, B>(&mut self, edges: I) -> ErdResult<()>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        for (from, to) in edges {
            self.add_edge(from, to)?;
        }
        Ok(())
    }

    /// Get a node by id
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Check if a node exists
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The diagram comment, if any
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Serialize to the DOT text handed to the layout engine
    pub fn to_dot(&self) -> String {
        render::to_dot(self)
    }

    /// Render with the system Graphviz installation
    pub fn render(
        &self,
        output_path: impl AsRef<Path>,
        format: Format,
        open_viewer: bool,
    ) -> ErdResult<RenderOutput> {
        let options = RenderOptions::new(output_path.as_ref())
            .with_format(format)
            .with_viewer(open_viewer);
        self.render_with(&GraphvizEngine::default(), &options)
    }

    /// Render through an explicit layout engine
    ///
    /// The image is written only after the engine succeeds.
    pub fn render_with(&self, engine: &dyn LayoutEngine, options: &RenderOptions) -> ErdResult<RenderOutput> {
        let dot = self.to_dot();
        let image = engine.layout(&dot, options.format)?;
        if image.is_empty() {
            return Err(ErdError::Render(format!(
                "{} produced no {} output",
                engine.name(),
                options.format
            )));
        }

        std::fs::write(&options.output, &image)?;
        info!(
            path = %options.output.display(),
            format = %options.format,
            bytes = image.len(),
            "rendered diagram"
        );

        let source = match options.source_path() {
            Some(path) => {
                std::fs::write(&path, dot.as_bytes())?;
                debug!(path = %path.display(), "wrote DOT source");
                Some(path)
            }
            None => None,
        };

        if options.open_viewer {
            Viewer::system().open(&options.output)?;
        }

        Ok(RenderOutput {
            image: options.output.clone(),
            source,
            bytes: image.len(),
        })
    }
}
