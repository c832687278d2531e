use std::io::Write;
use tempfile::NamedTempFile;
use tricount::graph::{check_adjacency, load_edge_list_file, summarize, IndexBase, LoadError, LoaderConfig};
use tricount::{count_triangles, Method};

fn write_edges(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_snap_style_file() {
    let file = write_edges(
        "# Undirected graph: toy\n\
         # FromNodeId\tToNodeId\n\
         0\t1\n\
         1\t2\n\
         2\t3\n\
         3\t0\n\
         0\t2\n",
    );

    let graph = load_edge_list_file(file.path(), &LoaderConfig::default()).unwrap();
    assert_eq!(graph.summary.lines, 7);
    assert_eq!(graph.summary.edges_read, 5);
    assert_eq!(graph.adjacency.dimensions(), (4, 4));
    assert_eq!(check_adjacency(&graph.adjacency), Ok(()));

    let summary = summarize(&graph.adjacency).unwrap();
    assert_eq!(summary.edges, 5);
    assert_eq!(summary.max_degree, 3);

    for method in Method::ALL {
        assert_eq!(
            count_triangles(&graph.adjacency, method.id() as i64).unwrap().triangles,
            2
        );
    }
}

#[test]
fn test_one_based_file() {
    let file = write_edges("1 2\n2 3\n1 3\n");
    let config = LoaderConfig {
        index_base: IndexBase::One,
        ..LoaderConfig::default()
    };
    let graph = load_edge_list_file(file.path(), &config).unwrap();
    assert_eq!(graph.adjacency.dimensions(), (3, 3));
    assert_eq!(count_triangles(&graph.adjacency, 2).unwrap().triangles, 1);
}

#[test]
fn test_reference_sized_matrix() {
    // Unshrunk, the matrix keeps the configured dimension and empty rows
    let file = write_edges("1 2\n2 3\n1 3\n");
    let config = LoaderConfig {
        max_dimension: 1000,
        shrink_to_fit: false,
        ..LoaderConfig::default()
    };
    let graph = load_edge_list_file(file.path(), &config).unwrap();
    assert_eq!(graph.adjacency.dimensions(), (1000, 1000));
    for method in Method::ALL {
        assert_eq!(
            count_triangles(&graph.adjacency, method.id() as i64).unwrap().triangles,
            1
        );
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_edge_list_file(dir.path().join("absent.txt"), &LoaderConfig::default())
        .unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_malformed_file_reports_line() {
    let file = write_edges("0 1\n1 2\nthree four\n");
    let err = load_edge_list_file(file.path(), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { line: 3, .. }));
    assert!(err.to_string().contains("three four"));
}
