use std::path::{Path, PathBuf};

use smooth_spectra::data::sidecar::{read_annotation, read_json_pretty, write_annotation, FileCursor};
use smooth_spectra::Error;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("smooth-spectra-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_annotation_is_empty() {
    let dir = temp_dir("sidecar-missing");
    let text = read_annotation(&dir, Path::new("/tables/run_7.html")).unwrap();
    assert!(text.is_empty());
    assert_eq!(read_json_pretty(&dir, Path::new("/tables/run_7.html")).unwrap(), None);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn annotation_is_overwritten_on_save() {
    let dir = temp_dir("sidecar-write");
    let source = Path::new("/tables/run_7.html");

    let path = write_annotation(&dir, source, "first draft").unwrap();
    assert_eq!(path, dir.join("run_7.txt"));
    write_annotation(&dir, source, "final").unwrap();
    assert_eq!(read_annotation(&dir, source).unwrap(), "final");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn json_sidecar_is_pretty_printed_with_four_spaces() {
    let dir = temp_dir("sidecar-json");
    std::fs::write(dir.join("run_7.json"), r#"{"sample":"A","peaks":[1,2]}"#).unwrap();

    let pretty = read_json_pretty(&dir, Path::new("run_7.html")).unwrap().unwrap();
    let lines: Vec<&str> = pretty.lines().collect();
    assert_eq!(lines[0], "{");
    assert!(lines.iter().any(|l| l.starts_with(r#"    "sample": "A""#)));
    assert!(lines.contains(&"        1,"));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn json_sidecar_keeps_key_order_of_the_file() {
    let dir = temp_dir("sidecar-json-order");
    std::fs::write(dir.join("run_9.json"), r#"{"zeta":1,"alpha":2}"#).unwrap();

    let pretty = read_json_pretty(&dir, Path::new("run_9.html")).unwrap().unwrap();
    let lines: Vec<&str> = pretty.lines().collect();
    assert_eq!(lines, vec!["{", r#"    "zeta": 1,"#, r#"    "alpha": 2"#, "}"]);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn broken_json_sidecar_is_an_error() {
    let dir = temp_dir("sidecar-bad-json");
    std::fs::write(dir.join("run_8.json"), "{ not json").unwrap();
    assert!(matches!(
        read_json_pretty(&dir, Path::new("run_8.html")),
        Err(Error::Json { .. })
    ));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cursor_walks_through_files() {
    let mut cursor = FileCursor::new(vec!["a.html".into(), "b.html".into(), "c.html".into()]);
    assert_eq!(cursor.position(), "File 1/3");
    assert!(cursor.next());
    assert!(cursor.next());
    assert_eq!(cursor.current(), Some(Path::new("c.html")));
    assert!(cursor.prev());
    assert_eq!(cursor.position(), "File 2/3");
    assert!(FileCursor::default().current().is_none());
}
