//! Golden-vector suites under every primitive

use modecrypt_tests::vectors::{load_all, load_suite, run_suite, VectorSuite};

fn check(suite: &VectorSuite) {
    let report = run_suite(suite);
    for failure in &report.failures {
        eprintln!("{}: {}", report.suite, failure);
    }
    assert!(report.is_success(), "{} failed {} case(s)", report.suite, report.failures.len());
    assert_eq!(report.passed, suite.cases.len());
}

#[test]
fn test_toy_xor_vectors() {
    let suite = load_suite("toy_xor").expect("Failed to load toy_xor suite");
    assert_eq!(suite.cases.len(), 18);
    check(&suite);
}

#[test]
fn test_sp800_38a_vectors() {
    let suite = load_suite("sp800_38a").expect("Failed to load sp800_38a suite");
    assert_eq!(suite.cases.len(), 5);
    check(&suite);
}

#[test]
fn test_aes128_extra_vectors() {
    let suite = load_suite("aes128_extra").expect("Failed to load aes128_extra suite");
    check(&suite);
}

#[test]
fn test_every_suite_file() {
    let suites = load_all().expect("Failed to load vector suites");
    assert!(suites.len() >= 3);
    for suite in &suites {
        check(suite);
    }
}

#[test]
fn test_mismatch_is_reported() {
    let text = r#"
suite = "broken"
primitive = "xor"

[[case]]
name = "wrong ciphertext"
mode = "ecb"
key = "00000000000000000000000000000000"
plaintext = "02020202020202020202020202020202"
ciphertext = "03030303030303030303030303030303"

[[case]]
name = "cbc without iv"
mode = "cbc"
key = "00000000000000000000000000000000"
plaintext = "02020202020202020202020202020202"
ciphertext = "03030303030303030303030303030303"
"#;
    let suite = modecrypt_tests::vectors::loader::parse_suite("inline", text).unwrap();
    let report = run_suite(&suite);
    assert_eq!(report.passed, 0);
    assert_eq!(report.failures.len(), 2);
    assert!(report.failures[0].to_string().contains("wrong ciphertext"));
    assert!(report.failures[1].to_string().contains("missing required field: iv"));
}
