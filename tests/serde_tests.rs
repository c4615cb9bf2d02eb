use raon::{from_document, from_reader, from_str, parse_str, Error};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize, Debug, PartialEq)]
struct Listener {
    host: String,
    port: u16,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Level {
    Debug,
    Info,
    Warn,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Service {
    name: String,
    level: Level,
    listeners: Vec<Listener>,
    #[serde(default)]
    replicas: Option<u32>,
    labels: BTreeMap<String, String>,
}

const SERVICE: &str = r#"
name = "gateway"
level = "info"
listeners = [
  { host = "0.0.0.0", port = 80 }
  { host = "0.0.0.0", port = 443 }
]
labels = { team = "edge", tier = "front" }
"#;

#[test]
fn test_typed_service() {
    let service: Service = from_str(SERVICE).unwrap();
    assert_eq!(service.name, "gateway");
    assert_eq!(service.level, Level::Info);
    assert_eq!(service.listeners.len(), 2);
    assert_eq!(service.listeners[1].port, 443);
    assert_eq!(service.replicas, None);
    assert_eq!(service.labels["team"], "edge");
}

#[test]
fn test_optional_field_present() {
    let source = format!("{}replicas = 3\n", SERVICE);
    let service: Service = from_str(&source).unwrap();
    assert_eq!(service.replicas, Some(3));
}

#[test]
fn test_from_document_and_reader_agree() {
    let doc = parse_str(SERVICE).unwrap();
    let a: Service = from_document(doc).unwrap();
    let b: Service = from_reader(SERVICE.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_missing_field_is_error() {
    let result: Result<Listener, Error> = from_str("host = \"x\"");
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Custom(_)));
    assert!(err.to_string().contains("port"));
}

#[test]
fn test_wrong_scalar_type_is_error() {
    let result: Result<Listener, Error> = from_str("host = \"x\", port = true");
    assert!(result.is_err());

    let result: Result<Listener, Error> = from_str("host = \"x\", port = 70000");
    assert!(result.is_err());
}

#[test]
fn test_parse_errors_pass_through() {
    let result: Result<Listener, Error> = from_str("host = \"x\", port = [1, \"a\"]");
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_document_serializes_to_json() {
    let doc = parse_str("name = \"x\"\nports = [80, 443]\nlimits = { on = true }").unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "x",
            "ports": [80, 443],
            "limits": { "on": true }
        })
    );
}

#[test]
fn test_unit_variants_from_strings() {
    let levels: BTreeMap<String, Level> = from_str("a = \"debug\", b = \"warn\"").unwrap();
    assert_eq!(levels["a"], Level::Debug);
    assert_eq!(levels["b"], Level::Warn);

    let result: Result<BTreeMap<String, Level>, Error> = from_str("a = \"loud\"");
    assert!(result.is_err());
}
