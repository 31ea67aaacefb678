// crates/lfconv-core/tests/convert_matrix.rs

use lfconv_core::{convert_bytes, Conversion};

const CR: &[u8] = b"\r";
const LF: &[u8] = b"\n";
const CRLF: &[u8] = b"\r\n";

fn conv(name: &str) -> Conversion {
    Conversion::from_filter_name(name).expect("valid filter name")
}

fn rep(unit: &[u8], n: usize) -> Vec<u8> {
    unit.repeat(n)
}

// For n in 1..=4: `n * from_unit` converts to `n * to_unit`.
fn assert_runs(name: &str, from_unit: &[u8], to_unit: &[u8]) {
    let c = conv(name);
    for n in 1..=4 {
        let got = convert_bytes(c, &rep(from_unit, n));
        assert_eq!(
            got,
            rep(to_unit, n),
            "filter={name} n={n} input={:?}",
            rep(from_unit, n)
        );
    }
}

#[test]
fn empty_input_stays_empty() {
    for name in ["line_feed.lf:cr", "line_feed.cr:all", "line_feed.crlf"] {
        assert!(convert_bytes(conv(name), b"").is_empty(), "{name}");
    }
}

#[test]
fn to_lf() {
    assert_runs("line_feed.lf:cr", CR, LF);
    assert_runs("line_feed.lf:crlf", CRLF, LF);

    for name in ["line_feed.lf:all", "line_feed.lf"] {
        assert_runs(name, LF, LF);
        assert_runs(name, CR, LF);
        assert_runs(name, CRLF, LF);
    }
}

#[test]
fn to_cr() {
    assert_runs("line_feed.cr:lf", LF, CR);
    assert_runs("line_feed.cr:lf", CR, CR);
    assert_runs("line_feed.cr:crlf", CRLF, CR);

    for name in ["line_feed.cr:all", "line_feed.cr"] {
        assert_runs(name, LF, CR);
        assert_runs(name, CR, CR);
        assert_runs(name, CRLF, CR);
    }
}

#[test]
fn to_crlf() {
    assert_runs("line_feed.crlf:cr", CR, CRLF);
    assert_runs("line_feed.crlf:lf", LF, CRLF);

    for name in ["line_feed.crlf:all", "line_feed.crlf"] {
        assert_runs(name, CR, CRLF);
        assert_runs(name, LF, CRLF);
        assert_runs(name, CRLF, CRLF);
    }
}

#[test]
fn cr_source_skips_cr_of_crlf_pair() {
    assert_eq!(convert_bytes(conv("line_feed.lf:cr"), b"\r\n\r"), b"\r\n\n");
}

#[test]
fn lf_source_skips_lf_followed_by_cr() {
    assert_eq!(convert_bytes(conv("line_feed.cr:lf"), b"\n\r\n"), b"\n\r\r");
}

#[test]
fn crlf_source_leaves_lone_bytes() {
    let c = conv("line_feed.lf:crlf");
    assert_eq!(convert_bytes(c, b"\r\n\n\r"), b"\n\n\r");
    assert_eq!(convert_bytes(c, b"\r\r\n\n"), b"\r\n\n");
}

#[test]
fn all_source_mixed_sequences() {
    let c = conv("line_feed.lf:all");
    assert_eq!(convert_bytes(c, b"\r\n\n\r"), b"\n\n\n");
    assert_eq!(convert_bytes(c, b"\n\r\r\n"), b"\n\n\n");
    assert_eq!(convert_bytes(c, b"\r\r\n\n"), b"\n\n\n");
    assert_eq!(convert_bytes(c, b"\n\n\r\r"), b"\n\n\n\n");
    assert_eq!(convert_bytes(c, b"\n\r"), b"\n\n");

    let c = conv("line_feed.crlf");
    assert_eq!(convert_bytes(c, b"\n\r"), b"\r\n\r\n");
}

#[test]
fn identity_when_already_target_form() {
    let inputs: [(&str, &[u8]); 3] = [
        ("line_feed.lf", b"one\ntwo\n\nthree"),
        ("line_feed.cr", b"one\rtwo\r\rthree\r"),
        ("line_feed.crlf", b"one\r\ntwo\r\n\r\nthree\r\n"),
    ];
    for (name, input) in inputs {
        assert_eq!(convert_bytes(conv(name), input), input, "{name}");
    }
}

#[test]
fn payload_bytes_are_untouched() {
    let payload: Vec<u8> = (0u8..=255).filter(|b| *b != b'\r' && *b != b'\n').collect();
    let mut input = Vec::new();
    for (i, chunk) in payload.chunks(7).enumerate() {
        input.extend_from_slice(chunk);
        input.extend_from_slice([CR, LF, CRLF][i % 3]);
    }

    let strip = |v: &[u8]| -> Vec<u8> {
        v.iter().copied().filter(|b| *b != b'\r' && *b != b'\n').collect()
    };

    for to in ["cr", "lf", "crlf"] {
        for from in ["cr", "lf", "crlf", "all"] {
            if to == from {
                continue;
            }
            let out = convert_bytes(conv(&format!("line_feed.{to}:{from}")), &input);
            assert_eq!(strip(&out), payload, "{to}:{from}");
        }
    }
}

#[test]
fn text_lines_to_crlf() {
    let out = convert_bytes(conv("line_feed.crlf"), b"Hello\nworld\rtest\r\n\nA B");
    assert_eq!(out, b"Hello\r\nworld\r\ntest\r\n\r\nA B");
}
