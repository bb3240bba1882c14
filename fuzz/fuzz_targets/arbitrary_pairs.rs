#![no_main]

use libfuzzer_sys::fuzz_target;
use query_binding::{DecodeParam, Json, Record};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug, Default)]
struct Payload {
    id: Option<i64>,
    tags: Option<Vec<String>>,
}

#[derive(Debug, Default)]
struct Counted(usize);

impl DecodeParam for Counted {
    type Error = std::convert::Infallible;

    fn decode_param(values: &[String]) -> Result<Self, Self::Error> {
        Ok(Counted(values.len()))
    }
}

#[derive(Record, Debug, Default)]
struct Common {
    page: i32,
    #[param(rename = "pageSize")]
    page_size: u8,
}

#[derive(Record, Debug, Default)]
struct Target {
    name: String,
    flag: bool,
    ratio: f64,
    small: i8,
    big: u64,
    maybe: Option<u16>,
    list: Vec<i32>,
    nested: Vec<Vec<u8>>,
    fixed: [bool; 3],
    when: Option<chrono::DateTime<chrono::Utc>>,
    doc: Json<Payload>,
    counted: Vec<Counted>,
    #[param(flatten)]
    common: Common,
}

const KEYS: [&str; 14] = [
    "name", "flag", "ratio", "small", "big", "maybe", "list", "nested", "fixed", "when", "doc",
    "counted", "page", "pageSize",
];

// Splits the input into `key=value` lines. Keys are snapped onto the record's keys so that
// most values reach a converter; the values themselves are arbitrary text.
fuzz_target!(|data: &[u8]| {
    if data.len() > 16 * 1024 {
        return;
    }
    let s = String::from_utf8_lossy(data);

    let mut source: HashMap<String, Vec<String>> = HashMap::new();
    for line in s.lines() {
        let (key, value) = line.split_once('=').unwrap_or((line, ""));
        let key = match key.bytes().next() {
            Some(b) if key.len() == 1 => KEYS[b as usize % KEYS.len()].to_string(),
            _ => key.to_string(),
        };
        source.entry(key).or_default().push(value.to_string());
    }

    let mut target = Target::default();
    let _ = query_binding::mapping(&source, &mut target);

    let strict = query_binding::options! { strict_booleans: true };
    let _ = query_binding::from_source_with_options::<Target, _>(&source, &strict);
});
