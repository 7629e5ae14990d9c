// Mon Feb 2 2026 - Alex

pub mod frontend;
pub mod model;

pub use frontend::{FactsFileFrontEnd, FrontEnd, ProcessFrontEnd};
pub use model::{
    AbiKind, BaseFacts, DeclFacts, FieldFacts, FileId, RecordFacts, RecordId, SrcPos, SrcRange,
    TargetFacts, TranslationUnitFacts, VirtualBaseFacts,
};
