// crates/lfconv-core/tests/registry.rs

use lfconv_core::{FilterRegistry, LfError};

fn run(registry: &FilterRegistry, name: &str, input: &[u8]) -> Vec<u8> {
    let mut c = registry.open(name).expect("open filter");
    let mut out = Vec::new();
    c.convert_chunk(input, &mut out);
    c.finish(&mut out);
    out
}

#[test]
fn default_registry_serves_line_feed_prefix() {
    let r = FilterRegistry::default();
    assert_eq!(r.lookup("line_feed.lf:cr"), Some("line_feed.*"));
    assert_eq!(run(&r, "line_feed.lf:cr", b"\r\n\r"), b"\r\n\n");
}

#[test]
fn result_does_not_depend_on_pattern() {
    let mut r = FilterRegistry::default();
    r.register("aaa.*").register("aaa.bbb.ccc*");

    let expect = b"\r\n\n".to_vec();
    assert_eq!(run(&r, "line_feed.lf:cr", b"\r\n\r"), expect);
    assert_eq!(run(&r, "aaa.lf:cr", b"\r\n\r"), expect);
    assert_eq!(r.lookup("aaa.bbb.ccc.lf:cr"), Some("aaa.*"));
    assert_eq!(run(&r, "aaa.bbb.ccc.lf:cr", b"\r\n\r"), expect);

    let mut only_deep = FilterRegistry::empty();
    only_deep.register("aaa.bbb.ccc*");
    assert_eq!(only_deep.lookup("aaa.bbb.ccc.lf:cr"), Some("aaa.bbb.ccc*"));
    assert_eq!(run(&only_deep, "aaa.bbb.ccc.lf:cr", b"\r\n\r"), expect);
}

#[test]
fn unmatched_name_is_unknown_filter() {
    let r = FilterRegistry::default();
    let err = r.open("other.lf:cr").unwrap_err();
    assert!(matches!(err, LfError::UnknownFilter { ref name } if name == "other.lf:cr"));

    let err = FilterRegistry::empty().open("line_feed.lf").unwrap_err();
    assert!(matches!(err, LfError::UnknownFilter { .. }));
}

#[test]
fn exact_pattern_matches_only_itself() {
    let mut r = FilterRegistry::empty();
    r.register("eol.crlf");
    assert!(r.open("eol.crlf").is_ok());
    assert!(r.open("eol.crlf:lf").is_err());
}

#[test]
fn open_propagates_validation_errors() {
    let r = FilterRegistry::default();
    let err = r.open("line_feed.cr:cr").unwrap_err();
    assert!(matches!(err, LfError::IdenticalEncodings { .. }));
}

#[test]
fn duplicate_patterns_registered_once() {
    let mut r = FilterRegistry::default();
    r.register("line_feed.*");
    assert_eq!(r.patterns().len(), 1);
}
