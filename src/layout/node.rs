// Mon Feb 2 2026 - Alex

use std::fmt;

/// What a node in the layout tree represents.
///
/// The discriminant is the wire tag in the `.slbin` stream; values are stable
/// across versions of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum NodeCategory {
    /// The selected type itself. Also tags the payload child of a bitfield,
    /// which consumers identify structurally.
    #[default]
    Root = 0,
    SimpleField = 1,
    Bitfield = 2,
    ComplexField = 3,
    NVPrimaryBase = 4,
    NVBase = 5,
    VPrimaryBase = 6,
    VBase = 7,
    VTablePtr = 8,
    VFTablePtr = 9,
    VBTablePtr = 10,
    VtorDisp = 11,
}

impl NodeCategory {
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "Root",
            Self::SimpleField => "SimpleField",
            Self::Bitfield => "Bitfield",
            Self::ComplexField => "ComplexField",
            Self::NVPrimaryBase => "NVPrimaryBase",
            Self::NVBase => "NVBase",
            Self::VPrimaryBase => "VPrimaryBase",
            Self::VBase => "VBase",
            Self::VTablePtr => "VTablePtr",
            Self::VFTablePtr => "VFTablePtr",
            Self::VBTablePtr => "VBTablePtr",
            Self::VtorDisp => "VtorDisp",
        };
        write!(f, "{}", name)
    }
}

/// A source location against the invocation's file table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file_index: usize,
    pub line: u32,
    pub column: u32,
}

/// One element of the layout tree.
///
/// Children are owned by value in memory construction order; dropping a node
/// drops its whole subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutNode {
    pub category: NodeCategory,
    /// Declared member name; empty for the root and synthetic nodes.
    pub name: String,
    /// Qualified name for type nodes, source spelling for fields.
    pub type_name: String,
    pub offset: u64,
    pub size: u64,
    pub align: u64,
    pub type_location: Option<Location>,
    pub field_location: Option<Location>,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node count of the subtree, this node included.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::subtree_size).sum::<usize>()
    }
}

impl fmt::Display for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.category)?;
        if !self.name.is_empty() {
            write!(f, " {}", self.name)?;
        }
        if !self.type_name.is_empty() {
            write!(f, " ({})", self.type_name)?;
        }
        write!(
            f,
            " @{} size={} align={} children={}",
            self.offset,
            self.size,
            self.align,
            self.children.len()
        )
    }
}
