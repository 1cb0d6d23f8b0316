// Config template rendering tests

use proxy_sidecar::render::{PlaceholderValues, render_config, substitute};

fn test_values() -> PlaceholderValues {
    PlaceholderValues {
        proto: "vless".into(),
        user_id: "uuid-1234".into(),
        ws_path: "/ws".into(),
        network: "ws".into(),
        port: "8080".into(),
        speed_limit: "300000".into(),
        host: "example.com".into(),
    }
}

#[test]
fn test_substitute_replaces_all_placeholders() {
    let template = r#"{"proto":"__PROTO__","id":"__USER_ID__","path":"__WS_PATH__","net":"__NETWORK__","port":__PORT__,"limit":__SPEED_LIMIT__,"host":"__HOST__"}"#;
    let rendered = substitute(template, &test_values());
    assert_eq!(
        rendered,
        r#"{"proto":"vless","id":"uuid-1234","path":"/ws","net":"ws","port":8080,"limit":300000,"host":"example.com"}"#
    );
    assert!(!rendered.contains("__"));
}

#[test]
fn test_substitute_leaves_unknown_placeholders() {
    let rendered = substitute("__PROTO__ __UNKNOWN__", &test_values());
    assert_eq!(rendered, "vless __UNKNOWN__");
}

#[test]
fn test_render_config_writes_output_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let template_path = dir.path().join("config.json.tpl");
    let output_path = dir.path().join("config.json");
    std::fs::write(&template_path, "port=__PORT__ host=__HOST__").unwrap();

    render_config(&template_path, &output_path, &test_values()).expect("render_config");

    let rendered = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(rendered, "port=8080 host=example.com");
}

#[test]
fn test_render_config_missing_template_errors() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = render_config(
        &dir.path().join("missing.tpl"),
        &dir.path().join("out.json"),
        &test_values(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("failed to read template"));
}
