//! Core diagram data structures

mod diagram;
mod edge;
mod node;


pub use diagram::{Diagram, ErdError, ErdResult};
pub use edge::Edge;
pub use node::{Node, NodeId};
