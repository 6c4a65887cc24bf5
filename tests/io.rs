use siwo::cluster::stats;
use siwo::{data, storage, Mean, SiwoConfig, SiwoPlus};
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

const TWO_TRIANGLES: &str = "\
# two triangles sharing a weak bridge
1 2 1.0
2 3 1.0
3 1 1.0
4 5 1.0
5 6 1.0
6 4 1.0
3 4 0.1
";

#[test]
fn edge_list_round_trip() {
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(TWO_TRIANGLES.as_bytes()).unwrap();

    let graph = data::load_graph(input.path()).unwrap();
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 7);

    let mut siwo = SiwoPlus::new(graph, SiwoConfig::default());
    siwo.run();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("nested").join("communities.txt");
    storage::write_communities(&out_path, siwo.graph(), siwo.communities()).unwrap();

    let mut lines: Vec<String> = fs::read_to_string(&out_path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    assert_eq!(lines, vec!["1 2 3".to_string(), "4 5 6".to_string()]);
}

#[test]
fn malformed_edge_list_is_rejected() {
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(b"1 2 1.0\none two 3.0\n").unwrap();

    let err = data::load_graph(input.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("line 2"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(data::load_graph(dir.path().join("absent.txt")).is_err());
    assert!(data::load_graph(dir.path().join("absent.parquet")).is_err());
}

#[test]
fn summary_records_config_and_partition() {
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(TWO_TRIANGLES.as_bytes()).unwrap();
    let graph = data::load_graph(input.path()).unwrap();

    let config = SiwoConfig::default().with_mean(Mean::Geometric).with_seed(3);
    let mut siwo = SiwoPlus::new(graph, config);
    siwo.run();

    let (summary, community_stats) = stats::summarize(siwo.graph(), siwo.communities());
    let dir = tempdir().unwrap();
    let path = dir.path().join("summary.json");
    storage::save_summary(&path, siwo.config(), &summary, &community_stats, 1.5).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(report["config"]["mean"], "geometric");
    assert_eq!(report["config"]["seed"], 3);
    assert_eq!(report["partition"]["community_count"], 2);
    assert_eq!(report["partition"]["connected_components"], 1);
    assert_eq!(report["communities"].as_array().unwrap().len(), 2);
}

#[test]
fn config_loads_from_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"mean": "geometric", "post_processing": {"merge_small": true, "merge_dangling": false}}"#)
        .unwrap();

    let config = SiwoConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.mean, Mean::Geometric);
    assert_eq!(config.seed, 1);
    assert!(config.post_processing.merge_small);
    assert!(!config.post_processing.merge_dangling);

    let mut broken = NamedTempFile::new().unwrap();
    broken.write_all(b"{ not json").unwrap();
    assert!(SiwoConfig::from_json_file(broken.path()).is_err());
}
