pub use node::{Location, Node};
pub use traverser::Traverser;

mod node;
mod traverser;
