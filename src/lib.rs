//! portal-erd: Entity-Relationship Diagrams for the Online Job Portal
//!
//! Builds a directed graph of the portal's entities and hands it to
//! Graphviz for layout and drawing.
//!
//! # Core Concepts
//!
//! - **Nodes**: One per entity, labelled with the entity's columns
//! - **Edges**: Directed relationships between entities
//! - **Diagram**: The builder that owns both and renders them
//! - **Schema**: Typed entities and relationships a diagram is built from
//!
//! # Example
//!
//! ```
//! use portal_erd::Schema;
//!
//! let diagram = Schema::job_portal().to_diagram().unwrap();
//! assert_eq!(diagram.node_count(), 7);
//! assert!(diagram.to_dot().contains("\"User\" -> \"JobSeeker\""));
//! ```

mod graph;
pub mod render;
pub mod schema;

pub use graph::{Diagram, Edge, ErdError, ErdResult, Node, NodeId};
pub use render::{Format, GraphvizEngine, LayoutEngine, MockEngine, RenderOptions, RenderOutput, Viewer};
pub use schema::{Attribute, Entity, Relationship, Schema};

/// Image written when no output path is given
pub const DEFAULT_OUTPUT: &str = "online_job_portal_erd.png";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
