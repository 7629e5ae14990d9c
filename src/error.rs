// Mon Feb 2 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Front end failed: {0}")]
    FrontEnd(String),
    #[error("Cannot lay out dependent type: {0}")]
    DependentType(String),
    #[error("Facts reference unknown record id {0}")]
    UnknownRecord(u32),
    #[error("Type nesting deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// Provider contract violations: layout math is undefined, the invocation aborts.
    pub fn is_fatal_internal(&self) -> bool {
        matches!(
            self,
            Self::DependentType(_) | Self::UnknownRecord(_) | Self::NestingTooDeep(_)
        )
    }
}
