use boundary_etl::{BoundaryPipeline, EtlEngine, EtlError, LocalStorage, RunConfig, TomlConfig};
use std::path::Path;
use tempfile::TempDir;

fn ibge_document(ring: serde_json::Value) -> String {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"codarea": "41"},
            "geometry": {"type": "MultiPolygon", "coordinates": [[ring]]}
        }]
    })
    .to_string()
}

fn run_config(dir: &Path) -> RunConfig {
    RunConfig {
        input_path: dir.join("parana-ibge.geojson").to_str().unwrap().to_string(),
        output_path: dir.join("parana-geojson.ts").to_str().unwrap().to_string(),
        ..RunConfig::default()
    }
}

async fn run(config: RunConfig) -> boundary_etl::Result<boundary_etl::RunSummary> {
    let pipeline = BoundaryPipeline::new(LocalStorage::default(), config);
    EtlEngine::new(pipeline).run().await
}

/// Pairs of the detailed ring literal, parsed back as JSON.
fn detailed_ring(text: &str) -> Vec<[f64; 2]> {
    let body: String = text
        .lines()
        .skip_while(|line| !line.contains("pontos)"))
        .skip(1)
        .take_while(|line| line.trim() != "]]")
        .map(str::trim)
        .collect();
    serde_json::from_str(&format!("[{}]", body)).unwrap()
}

#[tokio::test]
async fn test_end_to_end_generates_module() {
    let temp_dir = TempDir::new().unwrap();
    let config = run_config(temp_dir.path());
    let points = serde_json::json!([
        [-48.36193167499995, -25.482913970999945],
        [-48.36286, -25.48512],
        [-48.3655, -25.4877],
        [-48.36193167499995, -25.482913970999945]
    ]);
    std::fs::write(&config.input_path, ibge_document(points.clone())).unwrap();

    let summary = run(config.clone()).await.unwrap();

    assert_eq!(summary.coordinate_count, 4);
    assert_eq!(summary.output_path, config.output_path);

    let text = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(text.starts_with("// GeoJSON simplificado do estado do Paraná\n"));
    assert!(text.contains("export const paranaDetailedGeoJSON = {"));
    assert!(text.contains("dados oficiais do IBGE (4 pontos)"));

    let expected: Vec<[f64; 2]> = serde_json::from_value(points).unwrap();
    assert_eq!(detailed_ring(&text), expected);
}

#[tokio::test]
async fn test_rerun_replaces_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = run_config(temp_dir.path());

    let long_ring: Vec<[f64; 2]> = (0..500)
        .map(|i| [-54.0 + f64::from(i) * 0.01, -26.0 + f64::from(i) * 0.005])
        .collect();
    std::fs::write(&config.input_path, ibge_document(serde_json::json!(long_ring))).unwrap();
    run(config.clone()).await.unwrap();
    let first = std::fs::read_to_string(&config.output_path).unwrap();

    std::fs::write(
        &config.input_path,
        ibge_document(serde_json::json!([[-50.5, -24.5]])),
    )
    .unwrap();
    let summary = run(config.clone()).await.unwrap();
    let second = std::fs::read_to_string(&config.output_path).unwrap();

    assert_eq!(summary.coordinate_count, 1);
    assert!(second.len() < first.len());
    assert_eq!(second.matches("export const").count(), 2);
    assert_eq!(detailed_ring(&second), vec![[-50.5, -24.5]]);
    assert!(second.ends_with("      [-50.5, -24.5]\n    ]]\n  }\n}"));
}

#[tokio::test]
async fn test_malformed_input_leaves_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let config = run_config(temp_dir.path());
    std::fs::write(&config.output_path, "// previous module").unwrap();
    std::fs::write(
        &config.input_path,
        r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "geometry": {"type": "MultiPolygon"}}]}"#,
    )
    .unwrap();

    let err = run(config.clone()).await.unwrap_err();

    assert!(matches!(err, EtlError::StructureError { .. }));
    assert_eq!(
        std::fs::read_to_string(&config.output_path).unwrap(),
        "// previous module"
    );
}

#[tokio::test]
async fn test_malformed_input_creates_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = run_config(temp_dir.path());
    std::fs::write(&config.input_path, r#"{"features": []}"#).unwrap();

    assert!(run(config.clone()).await.is_err());
    assert!(!Path::new(&config.output_path).exists());
}

#[tokio::test]
async fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = run_config(temp_dir.path());

    let err = run(config.clone()).await.unwrap_err();

    assert!(matches!(err, EtlError::ReadError { .. }));
    assert!(!Path::new(&config.output_path).exists());
}

#[tokio::test]
async fn test_unwritable_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = run_config(temp_dir.path());
    config.output_path = temp_dir
        .path()
        .join("missing-dir/parana-geojson.ts")
        .to_str()
        .unwrap()
        .to_string();
    std::fs::write(
        &config.input_path,
        ibge_document(serde_json::json!([[-50.0, -25.0]])),
    )
    .unwrap();

    let err = run(config).await.unwrap_err();
    assert!(matches!(err, EtlError::WriteError { .. }));
}

#[tokio::test]
async fn test_region_from_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("sc.geojson");
    let output = temp_dir.path().join("sc-geojson.ts");
    std::fs::write(&input, ibge_document(serde_json::json!([[-50.0, -27.0]]))).unwrap();

    let toml = format!(
        r#"
[input]
path = "{}"

[output]
path = "{}"

[region]
name = "Santa Catarina"
state = "SC"
simplified_constant = "santaCatarinaGeoJSON"
detailed_constant = "santaCatarinaDetailedGeoJSON"

[region.bounds]
west = -53.8
east = -48.3
north = -25.9
south = -29.4
"#,
        input.display(),
        output.display()
    );
    let file = TomlConfig::from_toml_str(&toml).unwrap();
    let config = RunConfig::resolve(None, None, Some(&file));

    run(config).await.unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("// GeoJSON simplificado do estado do Santa Catarina\n"));
    assert!(text.contains("export const santaCatarinaGeoJSON = {"));
    assert!(text.contains("          [-48.3, -29.4], // Sudeste\n"));
    assert!(text.contains("state: \"SC\""));
}
