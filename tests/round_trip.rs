use std::collections::HashMap;

use query_binding::Record;
use serde::Serialize;

#[derive(Debug, Default, Record, Serialize)]
struct Scalars {
    a: i8,
    b: i64,
    c: u16,
    d: u64,
    f: usize,
    g: bool,
    h: bool,
    s: String,
}

fn reencode(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[test]
fn canonical_scalars_reencode_to_their_input() {
    let raw = [
        ("a", "-128"),
        ("b", "9223372036854775807"),
        ("c", "0"),
        ("d", "18446744073709551615"),
        ("f", "42"),
        ("g", "true"),
        ("h", "false"),
        ("s", "hello world"),
    ];
    let source: HashMap<String, Vec<String>> = raw
        .iter()
        .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
        .collect();

    let scalars: Scalars = query_binding::from_source(&source).expect("mapping");
    let encoded = serde_json::to_value(&scalars).expect("encoding");

    for (key, input) in raw {
        assert_eq!(reencode(&encoded[key]), input, "field `{key}` does not round-trip");
    }
}

#[test]
fn integers_round_trip_at_every_width() {
    for n in [i64::MIN, -1, 0, 1, 1 << 40, i64::MAX] {
        let source = HashMap::from([("b".to_string(), vec![n.to_string()])]);
        let scalars: Scalars = query_binding::from_source(&source).expect("mapping");
        assert_eq!(scalars.b.to_string(), n.to_string());
    }
    for n in [u16::MIN, 1, 255, 256, u16::MAX] {
        let source = HashMap::from([("c".to_string(), vec![n.to_string()])]);
        let scalars: Scalars = query_binding::from_source(&source).expect("mapping");
        assert_eq!(scalars.c, n);
    }
}
