use std::collections::HashMap;

use query_binding::{DecodeParam, Json, Record};

#[derive(Default)]
struct Upper(String);

impl DecodeParam for Upper {
    type Error = std::convert::Infallible;

    fn decode_param(values: &[String]) -> Result<Self, Self::Error> {
        Ok(Upper(values.concat().to_uppercase()))
    }
}

#[derive(Default, Record)]
struct Common {
    page: u32,
}

#[derive(Default, Record)]
struct Everything<'a> {
    #[param(rename = "q")]
    query: String,
    r#type: Option<i64>,
    ids: Vec<u64>,
    window: [f64; 2],
    upper: Upper,
    doc: Json<HashMap<String, String>>,
    #[param(flatten)]
    common: Common,
    #[param(skip)]
    borrowed: Option<&'a str>,
    #[param(rename = "-")]
    hidden: bool,
}

#[derive(Default, Record)]
struct Empty {}

#[derive(Default, Record)]
struct Unit;

fn main() {
    let source: HashMap<String, Vec<String>> = HashMap::new();
    let mut everything = Everything::default();
    query_binding::mapping(&source, &mut everything).unwrap();
    let _: Empty = query_binding::from_source(&source).unwrap();
    let _: Unit = query_binding::from_source(&source).unwrap();
    let _ = (everything.borrowed, everything.hidden, everything.upper.0);
}
