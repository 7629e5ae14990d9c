// Tue Feb 3 2026 - Alex

use crate::error::LayoutError;
use crate::facts::TranslationUnitFacts;
use crate::layout::builder::TreeBuilder;
use crate::layout::filetable::FileTable;
use crate::layout::node::LayoutNode;
use crate::layout::selector::{DeclarationSelector, LocationFilter};

/// Everything one invocation produces. Built fresh each time, consumed by the
/// serializer, dropped afterwards; never shared between invocations.
#[derive(Debug, Default)]
pub struct LayoutResult {
    pub node: Option<LayoutNode>,
    pub files: FileTable,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.node.as_ref().map_or(0, LayoutNode::subtree_size)
    }
}

/// One full invocation: select the declaration at the target location, then
/// build its layout tree.
///
/// No declaration at the target is a normal outcome and yields an empty
/// result; everything else that goes wrong aborts the invocation.
pub fn run(
    facts: &TranslationUnitFacts,
    filter: LocationFilter,
) -> Result<LayoutResult, LayoutError> {
    let selector = DeclarationSelector::new(facts);

    let Some(target) = selector.select_best(filter) else {
        log::info!(
            "No complete class declaration at {}:{}",
            filter.row,
            filter.col
        );
        return Ok(LayoutResult::empty());
    };

    let record = facts.record(target)?;
    log::debug!(
        "Selected {} at {}:{}",
        record.qualified_name,
        filter.row,
        filter.col
    );

    let (node, files) = TreeBuilder::new(facts).build(target)?;
    Ok(LayoutResult {
        node: Some(node),
        files,
    })
}
