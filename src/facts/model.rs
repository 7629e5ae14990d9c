// Mon Feb 2 2026 - Alex

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// ABI family governing hidden table pointer ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbiKind {
    /// One vtable pointer per polymorphic object (Itanium and derivatives).
    Itanium,
    /// Separate vftable and vbtable pointers (Microsoft).
    Microsoft,
}

/// Target platform facts needed for synthetic pointer nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetFacts {
    pub abi: AbiKind,
    /// Pointer width in bytes.
    pub pointer_size: u64,
    /// Pointer alignment in bytes.
    pub pointer_align: u64,
}

/// Stable per-file identity handle issued by the front end.
///
/// Two files with the same path string but different identities stay distinct;
/// deduplication is by identity, never by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub u32);

/// A resolved source position, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrcPos {
    pub file: FileId,
    pub line: u32,
    pub column: u32,
}

impl SrcPos {
    pub fn new(file: FileId, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }
}

/// A declaration's source extent, inclusive of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrcRange {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl SrcRange {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Column bounds apply only on the endpoint rows.
    pub fn contains(&self, line: u32, column: u32) -> bool {
        (line, column) >= (self.start_line, self.start_col)
            && (line, column) <= (self.end_line, self.end_col)
    }

    pub fn start(&self) -> (u32, u32) {
        (self.start_line, self.start_col)
    }
}

/// Index of a record inside [`TranslationUnitFacts::records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

/// A direct base class, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseFacts {
    pub record: RecordId,
    #[serde(default)]
    pub is_virtual: bool,
    /// Byte offset of the base subobject (non-virtual bases only).
    #[serde(default)]
    pub offset: u64,
}

impl BaseFacts {
    pub fn new(record: RecordId, offset: u64) -> Self {
        Self {
            record,
            is_virtual: false,
            offset,
        }
    }

    pub fn with_virtual(mut self) -> Self {
        self.is_virtual = true;
        self
    }
}

/// A data member, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFacts {
    pub name: String,
    /// Source-level spelling of the field type.
    pub type_name: String,
    /// Present when the field type is itself a class/struct.
    #[serde(default)]
    pub record: Option<RecordId>,
    /// Offset of the field within the enclosing record, in bits.
    pub offset_bits: u64,
    /// Size of the field type in bytes (the storage unit for bitfields).
    pub size: u64,
    /// Alignment of the field type in bytes.
    pub align: u64,
    #[serde(default)]
    pub bit_width: Option<u32>,
    #[serde(default)]
    pub location: Option<SrcPos>,
}

impl FieldFacts {
    pub fn new(name: &str, type_name: &str, offset_bits: u64, size: u64, align: u64) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            record: None,
            offset_bits,
            size,
            align,
            bit_width: None,
            location: None,
        }
    }

    pub fn with_record(mut self, record: RecordId) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_bit_width(mut self, width: u32) -> Self {
        self.bit_width = Some(width);
        self
    }

    pub fn with_location(mut self, location: SrcPos) -> Self {
        self.location = Some(location);
        self
    }

    pub fn byte_offset(&self) -> u64 {
        self.offset_bits / 8
    }

    pub fn bit_offset_in_byte(&self) -> u64 {
        self.offset_bits % 8
    }
}

/// A virtual base, in ABI-provided order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirtualBaseFacts {
    pub record: RecordId,
    /// Byte offset of the virtual base subobject in the complete object.
    pub offset: u64,
    /// Whether the ABI requires a vtordisp thunk before this base. Opaque
    /// provider fact; never re-derived here.
    #[serde(default)]
    pub needs_vtordisp: bool,
}

impl VirtualBaseFacts {
    pub fn new(record: RecordId, offset: u64) -> Self {
        Self {
            record,
            offset,
            needs_vtordisp: false,
        }
    }

    pub fn with_vtordisp(mut self) -> Self {
        self.needs_vtordisp = true;
        self
    }
}

/// Everything the layout tree needs to know about one class/struct type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFacts {
    pub qualified_name: String,
    /// Full object size in bytes, virtual bases included.
    pub size: u64,
    /// Size in bytes excluding virtual bases.
    pub non_virtual_size: u64,
    pub align: u64,
    #[serde(default)]
    pub is_polymorphic: bool,
    #[serde(default)]
    pub is_dependent: bool,
    #[serde(default)]
    pub is_invalid: bool,
    #[serde(default = "default_true")]
    pub has_definition: bool,
    #[serde(default)]
    pub primary_base: Option<RecordId>,
    /// Record introduces its own vftable pointer (Microsoft ABI).
    #[serde(default)]
    pub has_own_vfptr: bool,
    /// Record introduces its own vbtable pointer (Microsoft ABI).
    #[serde(default)]
    pub has_own_vbptr: bool,
    #[serde(default)]
    pub vbptr_offset: u64,
    #[serde(default)]
    pub bases: Vec<BaseFacts>,
    #[serde(default)]
    pub fields: Vec<FieldFacts>,
    #[serde(default)]
    pub virtual_bases: Vec<VirtualBaseFacts>,
    #[serde(default)]
    pub location: Option<SrcPos>,
}

fn default_true() -> bool {
    true
}

impl RecordFacts {
    pub fn new(qualified_name: &str, size: u64, non_virtual_size: u64, align: u64) -> Self {
        Self {
            qualified_name: qualified_name.to_string(),
            size,
            non_virtual_size,
            align,
            is_polymorphic: false,
            is_dependent: false,
            is_invalid: false,
            has_definition: true,
            primary_base: None,
            has_own_vfptr: false,
            has_own_vbptr: false,
            vbptr_offset: 0,
            bases: Vec::new(),
            fields: Vec::new(),
            virtual_bases: Vec::new(),
            location: None,
        }
    }

    pub fn with_polymorphic(mut self) -> Self {
        self.is_polymorphic = true;
        self
    }

    pub fn with_dependent(mut self) -> Self {
        self.is_dependent = true;
        self
    }

    pub fn with_invalid(mut self) -> Self {
        self.is_invalid = true;
        self
    }

    pub fn without_definition(mut self) -> Self {
        self.has_definition = false;
        self
    }

    pub fn with_primary_base(mut self, record: RecordId) -> Self {
        self.primary_base = Some(record);
        self
    }

    pub fn with_own_vfptr(mut self) -> Self {
        self.has_own_vfptr = true;
        self
    }

    pub fn with_own_vbptr(mut self, offset: u64) -> Self {
        self.has_own_vbptr = true;
        self.vbptr_offset = offset;
        self
    }

    pub fn with_base(mut self, base: BaseFacts) -> Self {
        self.bases.push(base);
        self
    }

    pub fn with_field(mut self, field: FieldFacts) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_virtual_base(mut self, vbase: VirtualBaseFacts) -> Self {
        self.virtual_bases.push(vbase);
        self
    }

    pub fn with_location(mut self, location: SrcPos) -> Self {
        self.location = Some(location);
        self
    }

    /// A candidate the selector may pick: complete, non-dependent, valid.
    pub fn is_eligible(&self) -> bool {
        self.has_definition && !self.is_dependent && !self.is_invalid
    }
}

/// One declaration in the primary source file.
///
/// Class/struct declarations carry their own record; variable declarations
/// carry the record of their class type, or `None` for non-class types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeclFacts {
    #[serde(default)]
    pub record: Option<RecordId>,
    pub range: SrcRange,
}

impl DeclFacts {
    pub fn new(record: Option<RecordId>, range: SrcRange) -> Self {
        Self { record, range }
    }
}

/// The complete facts document for one front-end run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationUnitFacts {
    pub target: TargetFacts,
    /// Path per file identity; `files[FileId.0]`.
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub records: Vec<RecordFacts>,
    #[serde(default)]
    pub decls: Vec<DeclFacts>,
}

impl TranslationUnitFacts {
    pub fn new(target: TargetFacts) -> Self {
        Self {
            target,
            files: Vec::new(),
            records: Vec::new(),
            decls: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: &str) -> FileId {
        self.files.push(path.to_string());
        FileId((self.files.len() - 1) as u32)
    }

    pub fn add_record(&mut self, record: RecordFacts) -> RecordId {
        self.records.push(record);
        RecordId((self.records.len() - 1) as u32)
    }

    pub fn add_decl(&mut self, decl: DeclFacts) {
        self.decls.push(decl);
    }

    /// A dangling id is a provider contract violation.
    pub fn record(&self, id: RecordId) -> Result<&RecordFacts, LayoutError> {
        self.records
            .get(id.0 as usize)
            .ok_or(LayoutError::UnknownRecord(id.0))
    }

    pub fn file_path(&self, id: FileId) -> Option<&str> {
        self.files.get(id.0 as usize).map(String::as_str)
    }
}
