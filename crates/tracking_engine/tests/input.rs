use std::fs;

use tempfile::TempDir;
use tracking_engine::load_batches;

#[test]
fn loads_and_batches_file_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("objetos.txt");
    let content: Vec<String> = (0..1500).map(|i| format!("AA{i:09}BR")).collect();
    fs::write(&path, format!("{}\n", content.join("\n"))).unwrap();

    let batches = load_batches(&path).unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 1000);
    // 500 codes plus the empty line after the trailing newline.
    assert_eq!(batches[1].len(), 501);
    assert_eq!(batches[1].codes().last().unwrap(), "");
}

#[test]
fn missing_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.txt");

    let err = load_batches(&path).unwrap_err();
    assert_eq!(err.path, path);
    assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn directory_is_not_readable_as_input() {
    let temp = TempDir::new().unwrap();
    assert!(load_batches(temp.path()).is_err());
}
