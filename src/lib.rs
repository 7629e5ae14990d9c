// Mon Feb 2 2026 - Alex

pub mod config;
pub mod error;
pub mod facts;
pub mod layout;
pub mod output;

pub use config::Config;
pub use error::LayoutError;
pub use facts::{FactsFileFrontEnd, FrontEnd, ProcessFrontEnd, TranslationUnitFacts};
pub use layout::{
    DeclarationSelector, FileTable, LayoutNode, LayoutResult, LocationFilter, NodeCategory,
    TreeBuilder,
};
pub use output::write_result;
