use pdf_translate::config::Config;

#[test]
fn parse_example_config() {
    let raw = include_str!("../pdf-translate.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.server.base_url, "http://localhost:8765");
    assert_eq!(cfg.server.translate_path, "/translate_pdf/");
    assert_eq!(cfg.server.clear_temp_path, "/clear_temp_dir/");
    assert!(!cfg.batch.out_dir.is_empty());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: Config = toml::from_str("[server]\nbase_url = \"http://translator:9000\"\n").unwrap();
    assert_eq!(cfg.server.base_url, "http://translator:9000");
    assert_eq!(cfg.server.translate_path, "/translate_pdf/");
    assert_eq!(cfg.batch.out_dir, "outputs");
    assert_eq!(cfg.render.pdftoppm_exe, "pdftoppm");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn partial_sections_fill_missing_keys_from_defaults() {
    let raw = r#"
[server]
request_timeout_seconds = 120

[batch]
out_dir = "translated"

[render]
dpi = 300

[logging]
level = "debug"
"#;
    let cfg: Config = toml::from_str(raw).unwrap();
    assert_eq!(cfg.server.request_timeout_seconds, 120);
    assert_eq!(cfg.server.base_url, "http://localhost:8765");
    assert_eq!(cfg.server.clear_temp_path, "/clear_temp_dir/");
    assert_eq!(cfg.batch.out_dir, "translated");
    assert!(cfg.batch.print_summary);
    assert_eq!(cfg.render.dpi, 300);
    assert_eq!(cfg.render.image_format, "png");
    assert_eq!(cfg.logging.level, "debug");
    assert!(!cfg.logging.write_to_file);
}
