// Tue Feb 3 2026 - Alex

use crate::error::LayoutError;
use crate::facts::{AbiKind, FieldFacts, RecordId, SrcPos, TargetFacts, TranslationUnitFacts};
use crate::layout::filetable::FileTable;
use crate::layout::node::{LayoutNode, Location, NodeCategory};

/// Recursion guard for pathological inheritance/nesting depth.
pub const MAX_DEPTH: usize = 256;

const VTORDISP_SIZE: u64 = 4;

/// Turns one resolved record into an ordered tree of layout nodes, interning
/// any source files it touches along the way.
pub struct TreeBuilder<'a> {
    facts: &'a TranslationUnitFacts,
    files: FileTable,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(facts: &'a TranslationUnitFacts) -> Self {
        Self {
            facts,
            files: FileTable::new(),
        }
    }

    /// Builds the full tree for `root`, virtual bases included. The caller
    /// takes ownership of the tree and the file table it references.
    pub fn build(mut self, root: RecordId) -> Result<(LayoutNode, FileTable), LayoutError> {
        let node = self.compute(root, true, 0)?;
        Ok((node, self.files))
    }

    fn compute(
        &mut self,
        id: RecordId,
        include_virtual_bases: bool,
        depth: usize,
    ) -> Result<LayoutNode, LayoutError> {
        if depth > MAX_DEPTH {
            return Err(LayoutError::NestingTooDeep(MAX_DEPTH));
        }

        let record = self.facts.record(id)?;
        if record.is_dependent {
            return Err(LayoutError::DependentType(record.qualified_name.clone()));
        }

        let mut node = LayoutNode::new();
        node.type_name = record.qualified_name.clone();
        node.size = if include_virtual_bases {
            record.size
        } else {
            record.non_virtual_size
        };
        node.align = record.align;
        node.type_location = self.resolve(record.location);

        let target = self.facts.target;

        // Hidden vtable pointer: either the Itanium-style vptr or the
        // record's own vftable pointer, never both.
        if record.is_polymorphic
            && record.primary_base.is_none()
            && target.abi != AbiKind::Microsoft
        {
            node.children
                .push(table_ptr(NodeCategory::VTablePtr, 0, &target));
        } else if record.has_own_vfptr {
            node.children
                .push(table_ptr(NodeCategory::VFTablePtr, 0, &target));
        }

        // Non-virtual bases, ascending by offset. The sort must stay stable
        // so declaration order breaks ties.
        let mut bases: Vec<_> = record.bases.iter().filter(|b| !b.is_virtual).collect();
        bases.sort_by_key(|b| b.offset);

        for base in bases {
            let mut base_node = self.compute(base.record, false, depth + 1)?;
            base_node.offset = base.offset;
            base_node.category = if Some(base.record) == record.primary_base {
                NodeCategory::NVPrimaryBase
            } else {
                NodeCategory::NVBase
            };
            node.children.push(base_node);
        }

        if record.has_own_vbptr {
            node.children.push(table_ptr(
                NodeCategory::VBTablePtr,
                record.vbptr_offset,
                &target,
            ));
        }

        for field in &record.fields {
            let field_node = self.compute_field(field, depth)?;
            node.children.push(field_node);
        }

        if include_virtual_bases {
            for vbase in &record.virtual_bases {
                if vbase.needs_vtordisp {
                    let mut disp = LayoutNode::new();
                    disp.category = NodeCategory::VtorDisp;
                    disp.offset = vbase.offset.saturating_sub(VTORDISP_SIZE);
                    disp.size = VTORDISP_SIZE;
                    disp.align = VTORDISP_SIZE;
                    node.children.push(disp);
                }

                let mut vbase_node = self.compute(vbase.record, false, depth + 1)?;
                vbase_node.offset = vbase.offset;
                vbase_node.category = if Some(vbase.record) == record.primary_base {
                    NodeCategory::VPrimaryBase
                } else {
                    NodeCategory::VBase
                };
                node.children.push(vbase_node);
            }
        }

        Ok(node)
    }

    fn compute_field(
        &mut self,
        field: &FieldFacts,
        depth: usize,
    ) -> Result<LayoutNode, LayoutError> {
        // Class-typed fields carry a full subtree, virtual bases included.
        if let Some(record_id) = field.record {
            let mut field_node = self.compute(record_id, true, depth + 1)?;
            field_node.category = NodeCategory::ComplexField;
            field_node.name = field.name.clone();
            field_node.type_name = field.type_name.clone();
            field_node.offset = field.byte_offset();
            field_node.field_location = self.resolve(field.location);
            return Ok(field_node);
        }

        let mut field_node = LayoutNode::new();
        field_node.name = field.name.clone();
        field_node.type_name = field.type_name.clone();
        field_node.offset = field.byte_offset();
        field_node.size = field.size;
        field_node.align = field.align;

        if let Some(width) = field.bit_width {
            field_node.category = NodeCategory::Bitfield;
            // Payload child: offset is the bit offset within the storage
            // byte, size is the width in bits.
            let mut span = LayoutNode::new();
            span.offset = field.bit_offset_in_byte();
            span.size = u64::from(width);
            field_node.children.push(span);
        } else {
            field_node.category = NodeCategory::SimpleField;
            field_node.field_location = self.resolve(field.location);
        }

        Ok(field_node)
    }

    /// Unresolvable positions leave the target field untouched.
    fn resolve(&mut self, pos: Option<SrcPos>) -> Option<Location> {
        let pos = pos?;
        let path = self.facts.file_path(pos.file)?;
        Some(Location {
            file_index: self.files.intern(pos.file, path),
            line: pos.line,
            column: pos.column,
        })
    }
}

fn table_ptr(category: NodeCategory, offset: u64, target: &TargetFacts) -> LayoutNode {
    LayoutNode {
        category,
        offset,
        size: target.pointer_size,
        align: target.pointer_align,
        ..LayoutNode::default()
    }
}
