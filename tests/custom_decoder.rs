use std::collections::HashMap;

use chrono::{DateTime, Utc};
use query_binding::options::KeySource;
use query_binding::{DecodeParam, Error, Options, Record};

fn query(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    pairs
        .iter()
        .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
        .collect()
}

/// A timestamp decoded from its first value.
#[derive(Debug, Default, PartialEq)]
struct C1(DateTime<Utc>);

impl DecodeParam for C1 {
    type Error = chrono::ParseError;

    fn decode_param(values: &[String]) -> Result<Self, Self::Error> {
        let first = values.first().map(String::as_str).unwrap_or_default();
        Ok(C1(DateTime::parse_from_rfc3339(first)?.with_timezone(&Utc)))
    }
}

/// Keeps every value as is.
#[derive(Debug, Default, PartialEq)]
struct C2(Vec<String>);

impl DecodeParam for C2 {
    type Error = std::convert::Infallible;

    fn decode_param(values: &[String]) -> Result<Self, Self::Error> {
        Ok(C2(values.to_vec()))
    }
}

#[derive(Debug, Default, Record)]
struct Custom {
    #[param(rename = "abc")]
    abc: String,
    #[param(rename = "c1")]
    c1: C1,
    #[param(rename = "c2")]
    c2: C2,
    #[param(rename = "c3")]
    c3: Vec<C1>,
}

fn rename_only() -> Options {
    query_binding::options! { key_source: KeySource::RenameOnly }
}

#[test]
fn decoders_replace_generic_conversion() {
    let source = query(&[
        ("abc", &["1", "2"]),
        ("c1", &["2023-12-06T12:00:00+02:00"]),
        ("c2", &["a", "b", "c"]),
        ("c3", &["2023-01-01T00:00:00Z"]),
    ]);
    let param: Custom =
        query_binding::from_source_with_options(&source, &rename_only()).expect("mapping");

    assert_eq!(param.abc, "1");
    assert_eq!(param.c1.0.to_rfc3339(), "2023-12-06T10:00:00+00:00");
    assert_eq!(param.c2, C2(vec!["a".into(), "b".into(), "c".into()]));
    assert_eq!(param.c3.len(), 1);
    assert_eq!(param.c3[0].0.to_rfc3339(), "2023-01-01T00:00:00+00:00");
}

#[test]
fn sequence_of_decoders_gets_one_element_per_value() {
    let source = query(&[(
        "c3",
        &["2023-01-01T00:00:00Z", "2024-02-29T08:30:00Z"],
    )]);
    let param: Custom =
        query_binding::from_source_with_options(&source, &rename_only()).expect("mapping");
    let years: Vec<String> = param
        .c3
        .iter()
        .map(|c| c.0.format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(years, ["2023-01-01", "2024-02-29"]);
}

#[test]
fn decoder_error_is_returned_verbatim() {
    let source = query(&[("c1", &["yesterday"])]);
    let err = query_binding::from_source_with_options::<Custom, _>(&source, &rename_only())
        .expect_err("not a timestamp");
    assert!(matches!(err, Error::Decoder { .. }));
    assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("c1"));

    let expected = DateTime::parse_from_rfc3339("yesterday").unwrap_err();
    let cause = std::error::Error::source(&err).expect("cause");
    assert_eq!(cause.to_string(), expected.to_string());
    assert!(cause.downcast_ref::<chrono::ParseError>().is_some());
}

/// Integers written in hexadecimal.
#[derive(Debug, Default, PartialEq)]
struct Hex(u32);

impl DecodeParam for Hex {
    type Error = std::num::ParseIntError;

    fn decode_param(values: &[String]) -> Result<Self, Self::Error> {
        let first = values.first().map(String::as_str).unwrap_or_default();
        u32::from_str_radix(first.trim_start_matches("0x"), 16).map(Hex)
    }
}

#[derive(Debug, Default, Record)]
struct Colors {
    fg: Hex,
    bg: Option<Hex>,
    palette: [Hex; 2],
}

#[test]
fn decoder_wins_over_the_decimal_rule() {
    let source = query(&[("fg", &["ff"]), ("bg", &["0x10"]), ("palette", &["a", "b"])]);
    let colors: Colors = query_binding::from_source(&source).expect("mapping");
    assert_eq!(colors.fg, Hex(255));
    assert_eq!(colors.bg, Some(Hex(16)));
    assert_eq!(colors.palette, [Hex(10), Hex(11)]);
}

#[test]
fn decoder_is_not_consulted_for_absent_keys() {
    let mut colors = Colors {
        fg: Hex(1),
        ..Colors::default()
    };
    query_binding::mapping(&query(&[("bg", &["2"])]), &mut colors).expect("mapping");
    assert_eq!(colors.fg, Hex(1));
    assert_eq!(colors.bg, Some(Hex(2)));
}

/// Counts the values it was handed.
#[derive(Debug, Default, PartialEq)]
struct Seen(usize);

impl DecodeParam for Seen {
    type Error = std::convert::Infallible;

    fn decode_param(values: &[String]) -> Result<Self, Self::Error> {
        Ok(Seen(values.len()))
    }
}

#[derive(Debug, Default, Record)]
struct Runs {
    one: Seen,
    each: Vec<Seen>,
    fixed: [Seen; 4],
}

#[test]
fn decoder_elements_see_the_remaining_run() {
    let source = query(&[
        ("one", &["a", "b", "c"]),
        ("each", &["a", "b", "c"]),
        ("fixed", &["a", "b", "c"]),
    ]);
    let runs: Runs = query_binding::from_source(&source).expect("mapping");
    assert_eq!(runs.one, Seen(3));
    assert_eq!(runs.each, [Seen(3), Seen(2), Seen(1)]);
    assert_eq!(runs.fixed, [Seen(3), Seen(2), Seen(1), Seen(0)]);
}

/// A name that must not be blank. There is no meaningful default.
#[derive(Debug, PartialEq)]
struct NonEmpty(String);

impl DecodeParam for NonEmpty {
    type Error = &'static str;

    fn decode_param(values: &[String]) -> Result<Self, Self::Error> {
        match values.first() {
            Some(v) if !v.trim().is_empty() => Ok(NonEmpty(v.clone())),
            _ => Err("blank name"),
        }
    }
}

#[derive(Debug, Default, Record)]
struct Names {
    primary: Option<NonEmpty>,
    aliases: Vec<NonEmpty>,
    pair: Option<[Option<NonEmpty>; 2]>,
}

#[test]
fn decoders_without_default_in_option_and_vec() {
    let source = query(&[
        ("primary", &["ada"]),
        ("aliases", &["a", "b"]),
        ("pair", &["x"]),
    ]);
    let names: Names = query_binding::from_source(&source).expect("mapping");
    assert_eq!(names.primary, Some(NonEmpty("ada".into())));
    assert_eq!(names.aliases, [NonEmpty("a".into()), NonEmpty("b".into())]);
    assert_eq!(names.pair, Some([Some(NonEmpty("x".into())), None]));
}

#[test]
fn failing_decoder_leaves_option_none() {
    let source = query(&[("primary", &[" "])]);
    let mut names = Names::default();
    let err = query_binding::mapping(&source, &mut names).expect_err("blank");
    assert!(matches!(err, Error::Decoder { .. }));
    assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("primary"));
    assert!(names.primary.is_none());
}

#[test]
fn failing_element_decoder_keeps_the_old_vec() {
    let source = query(&[("aliases", &["ok", ""])]);
    let mut names = Names {
        aliases: vec![NonEmpty("old".into())],
        ..Names::default()
    };
    assert!(query_binding::mapping(&source, &mut names).is_err());
    assert_eq!(names.aliases, [NonEmpty("old".into())]);
}
