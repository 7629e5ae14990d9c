// Mon Feb 2 2026 - Alex

pub mod builder;
pub mod filetable;
pub mod node;
pub mod pipeline;
pub mod selector;

pub use builder::TreeBuilder;
pub use filetable::FileTable;
pub use node::{LayoutNode, Location, NodeCategory};
pub use pipeline::{run, LayoutResult};
pub use selector::{DeclarationSelector, LocationFilter};
