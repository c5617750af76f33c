use serde::Deserialize;
use tsp_kernel::config::load_config;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Sample {
    name: String,
    port: u16,
}

#[test]
fn loads_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.toml"), "name = \"tsp\"\nport = 8080\n").unwrap();

    let cfg: Sample = load_config(Some(dir.path().join("app"))).unwrap();
    assert_eq!(cfg.name, "tsp");
    assert_eq!(cfg.port, 8080);
}

#[test]
fn missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let result: Result<Sample, _> = load_config(Some(dir.path().join("absent")));
    assert!(result.is_err());
}
