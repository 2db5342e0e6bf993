//! Serializing trees to files and reading them back.

use std::fs;
use std::sync::Once;

use binarytree::{Error, Tree};
use tracing_subscriber::EnvFilter;

static LOGGING: Once = Once::new();

/// Sends the crate's events to the test output. Set `RUST_LOG=binarytree=debug` to see them.
fn init_logging() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

fn level_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut values = Vec::new();
    tree.level_order(|v| values.push(v.clone()));
    values
}

#[test]
fn round_trip_through_a_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.txt");

    let tree: Tree<i32> = [17, 14, 26, 11, 12, 15, 24, 27, 10, 8, 30, 19, 32, 13, 25, 23]
        .iter()
        .copied()
        .collect();
    tree.serialize(&path).unwrap();

    let read_back = Tree::<i32>::deserialize(&path).unwrap();
    assert_eq!(
        level_order(&read_back),
        [17, 14, 26, 11, 15, 24, 27, 10, 12, 19, 25, 30, 8, 13, 23, 32]
    );
    assert_eq!(read_back, tree);
}

#[test]
fn empty_and_single_node_files() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let empty_path = dir.path().join("empty.txt");
    Tree::<i32>::new().serialize(&empty_path).unwrap();
    assert_eq!(fs::read_to_string(&empty_path).unwrap(), "1\n");
    assert!(Tree::<i32>::deserialize(&empty_path).unwrap().is_empty());

    let single_path = dir.path().join("single.txt");
    let mut single = Tree::new();
    single.insert("hello world".to_string());
    single.serialize(&single_path).unwrap();
    assert_eq!(
        fs::read_to_string(&single_path).unwrap(),
        "0 hello world\n1\n1\n"
    );
    assert_eq!(Tree::<String>::deserialize(&single_path).unwrap(), single);
}

#[test]
fn serialize_overwrites_existing_file() {
    init_logging();
    let file = tempfile::NamedTempFile::new().unwrap();
    fs::write(file.path(), "0 1\n0 2\n1\n1\n1\n").unwrap();

    let mut tree = Tree::new();
    tree.insert(5);
    tree.serialize(file.path()).unwrap();

    assert_eq!(fs::read_to_string(file.path()).unwrap(), "0 5\n1\n1\n");
}

#[test]
fn missing_file_is_an_error() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    match Tree::<i32>::deserialize(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn unwritable_path_is_an_error() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("tree.txt");

    let tree: Tree<i32> = [1, 2, 3].iter().copied().collect();
    assert!(matches!(tree.serialize(&path), Err(Error::Io { .. })));
}

#[test]
fn corrupt_file_is_an_error() {
    init_logging();
    let file = tempfile::NamedTempFile::new().unwrap();
    fs::write(file.path(), "0 1\n0 one\n1\n1\n1\n").unwrap();

    assert!(matches!(
        Tree::<i32>::deserialize(file.path()),
        Err(Error::InvalidValue { line: 2, .. })
    ));
}

#[test]
fn failed_serialize_keeps_previous_contents() {
    init_logging();
    let file = tempfile::NamedTempFile::new().unwrap();
    fs::write(file.path(), "0 ok\n1\n1\n").unwrap();

    let tree: Tree<String> = ["b", "a", "c\nd"].iter().map(|s| s.to_string()).collect();
    match tree.serialize(file.path()) {
        Err(Error::UnencodableValue { text }) => assert_eq!(text, "c\nd"),
        other => panic!("expected an unencodable value, got {:?}", other),
    }

    assert_eq!(fs::read_to_string(file.path()).unwrap(), "0 ok\n1\n1\n");
    let previous = Tree::<String>::deserialize(file.path()).unwrap();
    assert_eq!(previous.iter().collect::<Vec<_>>(), ["ok"]);
}
