// Tue Feb 3 2026 - Alex

use crate::error::LayoutError;
use crate::layout::node::{LayoutNode, Location};
use crate::layout::pipeline::LayoutResult;
use bytes::{BufMut, BytesMut};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const MAGIC: [u8; 4] = *b"SLBN";
pub const FORMAT_VERSION: u16 = 1;

const NO_FILE: i32 = -1;

/// Encodes a result into the `.slbin` wire form.
///
/// All integers are fixed-width little-endian; strings are length-prefixed
/// UTF-8; nodes are written depth-first pre-order, each preceded by its child
/// count. Identical input always produces identical bytes.
pub fn encode(result: &LayoutResult) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(256);

    buf.put_slice(&MAGIC);
    buf.put_u16_le(FORMAT_VERSION);

    buf.put_u32_le(result.files.len() as u32);
    for path in result.files.paths() {
        put_string(&mut buf, path);
    }

    match &result.node {
        Some(node) => {
            buf.put_u8(1);
            put_node(&mut buf, node);
        }
        None => buf.put_u8(0),
    }

    buf.to_vec()
}

pub fn write_result(result: &LayoutResult, path: &Path) -> Result<(), LayoutError> {
    let encoded = encode(result);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&encoded)?;
    writer.flush()?;

    log::debug!(
        "Wrote {} bytes ({} nodes, {} files) to {}",
        encoded.len(),
        result.node_count(),
        result.files.len(),
        path.display()
    );
    Ok(())
}

fn put_string(buf: &mut BytesMut, value: &str) {
    buf.put_u32_le(value.len() as u32);
    buf.put_slice(value.as_bytes());
}

fn put_location(buf: &mut BytesMut, location: Option<Location>) {
    match location {
        Some(loc) => {
            buf.put_i32_le(loc.file_index as i32);
            buf.put_u32_le(loc.line);
            buf.put_u32_le(loc.column);
        }
        None => {
            buf.put_i32_le(NO_FILE);
            buf.put_u32_le(0);
            buf.put_u32_le(0);
        }
    }
}

fn put_node(buf: &mut BytesMut, node: &LayoutNode) {
    buf.put_u8(node.category.tag());
    put_string(buf, &node.name);
    put_string(buf, &node.type_name);
    buf.put_u64_le(node.offset);
    buf.put_u64_le(node.size);
    buf.put_u64_le(node.align);
    put_location(buf, node.type_location);
    put_location(buf, node.field_location);
    buf.put_u32_le(node.children.len() as u32);
    for child in &node.children {
        put_node(buf, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FileId;
    use crate::layout::filetable::FileTable;
    use crate::layout::node::NodeCategory;

    #[test]
    fn test_empty_result_artifact() {
        let encoded = encode(&LayoutResult::empty());

        // magic + version + zero file count + absent root marker
        assert_eq!(&encoded[0..4], b"SLBN");
        assert_eq!(u16::from_le_bytes([encoded[4], encoded[5]]), 1);
        assert_eq!(&encoded[6..10], &0u32.to_le_bytes());
        assert_eq!(encoded[10], 0);
        assert_eq!(encoded.len(), 11);
    }

    #[test]
    fn test_file_table_precedes_root() {
        let mut files = FileTable::new();
        files.intern(FileId(0), "a.cpp");
        files.intern(FileId(1), "b.h");
        let result = LayoutResult { node: None, files };

        let encoded = encode(&result);
        assert_eq!(&encoded[6..10], &2u32.to_le_bytes());
        assert_eq!(&encoded[10..14], &5u32.to_le_bytes());
        assert_eq!(&encoded[14..19], b"a.cpp");
        assert_eq!(&encoded[19..23], &3u32.to_le_bytes());
        assert_eq!(&encoded[23..26], b"b.h");
        assert_eq!(encoded[26], 0);
    }

    #[test]
    fn test_node_stream_layout() {
        let result = LayoutResult {
            node: Some(LayoutNode {
                category: NodeCategory::Root,
                type_name: "Point".to_string(),
                size: 8,
                align: 4,
                children: vec![LayoutNode {
                    category: NodeCategory::SimpleField,
                    name: "x".to_string(),
                    type_name: "int".to_string(),
                    size: 4,
                    align: 4,
                    field_location: Some(Location {
                        file_index: 0,
                        line: 2,
                        column: 9,
                    }),
                    ..LayoutNode::default()
                }],
                ..LayoutNode::default()
            }),
            files: FileTable::new(),
        };

        let encoded = encode(&result);
        // Root marker is present.
        assert_eq!(encoded[10], 1);

        let mut at = 11;
        assert_eq!(encoded[at], NodeCategory::Root.tag());
        at += 1;
        // Empty name, then "Point".
        assert_eq!(&encoded[at..at + 4], &0u32.to_le_bytes());
        at += 4;
        assert_eq!(&encoded[at..at + 4], &5u32.to_le_bytes());
        at += 4;
        assert_eq!(&encoded[at..at + 5], b"Point");
        at += 5;
        // offset, size, align
        assert_eq!(&encoded[at..at + 8], &0u64.to_le_bytes());
        at += 8;
        assert_eq!(&encoded[at..at + 8], &8u64.to_le_bytes());
        at += 8;
        assert_eq!(&encoded[at..at + 8], &4u64.to_le_bytes());
        at += 8;
        // Two absent locations with the -1 sentinel.
        for _ in 0..2 {
            assert_eq!(&encoded[at..at + 4], &(-1i32).to_le_bytes());
            at += 12;
        }
        // One child follows.
        assert_eq!(&encoded[at..at + 4], &1u32.to_le_bytes());
        at += 4;
        assert_eq!(encoded[at], NodeCategory::SimpleField.tag());
    }

    #[test]
    fn test_resolved_location_encoding() {
        let mut files = FileTable::new();
        files.intern(FileId(4), "point.cpp");
        let result = LayoutResult {
            node: Some(LayoutNode {
                type_location: Some(Location {
                    file_index: 0,
                    line: 1,
                    column: 8,
                }),
                ..LayoutNode::default()
            }),
            files,
        };

        let encoded = encode(&result);
        // Skip header, one file entry, root marker, category, two empty strings,
        // offset/size/align.
        let at = 4 + 2 + 4 + (4 + 9) + 1 + 1 + 4 + 4 + 24;
        assert_eq!(&encoded[at..at + 4], &0i32.to_le_bytes());
        assert_eq!(&encoded[at + 4..at + 8], &1u32.to_le_bytes());
        assert_eq!(&encoded[at + 8..at + 12], &8u32.to_le_bytes());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let mut files = FileTable::new();
        files.intern(FileId(0), "a.cpp");
        let node = LayoutNode {
            type_name: "Widget".to_string(),
            size: 24,
            align: 8,
            children: vec![LayoutNode::default(), LayoutNode::default()],
            ..LayoutNode::default()
        };

        let first = encode(&LayoutResult {
            node: Some(node.clone()),
            files: files.clone(),
        });
        let second = encode(&LayoutResult {
            node: Some(node),
            files,
        });

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_result_reports_io_failure() {
        let result = LayoutResult::empty();
        let err = write_result(&result, Path::new("/nonexistent-dir/out.slbin")).unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));
        assert!(!err.is_fatal_internal());
    }

    #[test]
    fn test_write_result_roundtrips_to_disk() {
        let dir = std::env::temp_dir().join("clg-slbin-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.slbin");

        write_result(&LayoutResult::empty(), &path).unwrap();
        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, encode(&LayoutResult::empty()));

        std::fs::remove_file(&path).ok();
    }
}
