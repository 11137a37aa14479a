//! Integration tests for the JSON and XML writers

use mmcast::{write_json, write_xml, MatrixCollection, SparseEntry, SparseMatrix};
use serde_json::Value;
use tempfile::tempdir;

fn entry(row: u32, column: u32, value: &str) -> SparseEntry {
    SparseEntry {
        row,
        column,
        value: value.to_string(),
    }
}

fn sample_collection(count: usize) -> MatrixCollection {
    let mut matrices = MatrixCollection::new();
    for i in 0..count {
        matrices.insert(
            format!("beta({i})"),
            SparseMatrix {
                rows: 2,
                columns: 3,
                entries: vec![entry(1, 1, "1.5"), entry(2, 3, "-0.25")],
            },
        );
    }
    matrices
}

#[test]
fn test_json_is_valid_for_empty_single_and_many() {
    let dir = tempdir().unwrap();

    for count in [0usize, 1, 5] {
        let dest = dir.path().join(format!("out_{count}"));
        write_json(&dest, &sample_collection(count)).unwrap();

        let text = std::fs::read_to_string(dir.path().join(format!("out_{count}.json"))).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc.as_array().unwrap().len(), count);
    }
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let matrices = sample_collection(3);
    write_json(dir.path().join("out"), &matrices).unwrap();

    let text = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    let doc: Value = serde_json::from_str(&text).unwrap();
    let records = doc.as_array().unwrap();
    assert_eq!(records.len(), matrices.len());

    for (record, (name, matrix)) in records.iter().zip(&matrices) {
        assert_eq!(record["name"].as_str().unwrap(), name);
        assert_eq!(record["rows"].as_u64().unwrap(), u64::from(matrix.rows));
        assert_eq!(
            record["columns"].as_u64().unwrap(),
            u64::from(matrix.columns)
        );

        let entries = record["entries"].as_array().unwrap();
        assert_eq!(entries.len(), matrix.nnz());
        for (triple, expected) in entries.iter().zip(&matrix.entries) {
            let triple = triple.as_array().unwrap();
            assert_eq!(triple[0].as_u64().unwrap(), u64::from(expected.row));
            assert_eq!(triple[1].as_u64().unwrap(), u64::from(expected.column));
            let value: f64 = expected.value.parse().unwrap();
            assert_eq!(triple[2].as_f64().unwrap(), value);
        }
    }
}

#[test]
fn test_json_preserves_value_spelling() {
    let dir = tempdir().unwrap();
    let mut matrices = MatrixCollection::new();
    matrices.insert(
        "m".to_string(),
        SparseMatrix {
            rows: 1,
            columns: 2,
            entries: vec![entry(1, 1, "0.30000000000000004"), entry(1, 2, "2.5e-3")],
        },
    );
    write_json(dir.path().join("out"), &matrices).unwrap();

    let text = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    // the raw number text survives, unquoted
    assert!(text.contains("0.30000000000000004"));
    assert!(text.contains("2.5e-3"));
    assert!(!text.contains("\"0.30000000000000004\""));
}

#[test]
fn test_json_replaces_extension() {
    let dir = tempdir().unwrap();
    write_json(dir.path().join("resample_2"), &sample_collection(1)).unwrap();
    assert!(dir.path().join("resample_2.json").is_file());
}

#[test]
fn test_xml_document_shape() {
    let dir = tempdir().unwrap();
    let mut matrices = MatrixCollection::new();
    matrices.insert(
        "beta(1)".to_string(),
        SparseMatrix {
            rows: 2,
            columns: 2,
            entries: vec![entry(1, 1, "1.0")],
        },
    );
    write_xml(dir.path().join("out"), &matrices).unwrap();

    let text = std::fs::read_to_string(dir.path().join("out.xml")).unwrap();
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(text.contains("<matrices>"));
    assert!(text.contains("<matrix name=\"beta(1)\" rows=\"2\" columns=\"2\">"));
    assert!(text.contains("<entry row=\"1\" column=\"1\" value=\"1.0\"/>"));
    assert!(text.contains("</matrices>"));
}

#[test]
fn test_xml_escapes_attribute_values() {
    let dir = tempdir().unwrap();
    let mut matrices = MatrixCollection::new();
    matrices.insert(
        "a&b".to_string(),
        SparseMatrix {
            rows: 1,
            columns: 1,
            entries: vec![],
        },
    );
    write_xml(dir.path().join("out"), &matrices).unwrap();

    let text = std::fs::read_to_string(dir.path().join("out.xml")).unwrap();
    assert!(text.contains("name=\"a&amp;b\""));
    assert!(!text.contains("name=\"a&b\""));
}

#[test]
fn test_empty_collection_xml() {
    let dir = tempdir().unwrap();
    write_xml(dir.path().join("out"), &MatrixCollection::new()).unwrap();

    let text = std::fs::read_to_string(dir.path().join("out.xml")).unwrap();
    assert!(text.contains("<matrices>"));
    assert!(text.contains("</matrices>"));
}
