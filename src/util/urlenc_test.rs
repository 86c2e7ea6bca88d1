use super::*;

// =============================================================
// Encoding
// =============================================================

#[test]
fn encode_escapes_path_separators() {
    assert_eq!(encode_component("/app/applications"), "%2Fapp%2Fapplications");
}

#[test]
fn encode_keeps_unreserved_characters() {
    assert_eq!(encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encode_decode_round_trips() {
    let original = "/jobs/42?from=search results";
    let decoded = decode_component(&encode_component(original)).unwrap();
    assert_eq!(decoded, original);
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_rejects_truncated_escape() {
    assert!(decode_component("%2").is_none());
    assert!(decode_component("abc%").is_none());
}

#[test]
fn decode_rejects_non_hex_escape() {
    assert!(decode_component("%zz").is_none());
}

#[test]
fn decode_treats_plus_as_space() {
    assert_eq!(decode_component("a+b").unwrap(), "a b");
}

// =============================================================
// redirectTo extraction
// =============================================================

#[test]
fn redirect_target_reads_internal_path() {
    assert_eq!(
        redirect_target("?redirectTo=%2Fapp%2Fapplications").as_deref(),
        Some("/app/applications")
    );
}

#[test]
fn redirect_target_ignores_other_params() {
    assert_eq!(
        redirect_target("?utm=x&redirectTo=%2Fjobs%2F7&y=1").as_deref(),
        Some("/jobs/7")
    );
}

#[test]
fn redirect_target_rejects_external_url() {
    assert!(redirect_target("?redirectTo=https%3A%2F%2Fevil.test").is_none());
}

#[test]
fn redirect_target_rejects_scheme_relative_path() {
    assert!(redirect_target("?redirectTo=%2F%2Fevil.test").is_none());
}

#[test]
fn redirect_target_absent_when_param_missing() {
    assert!(redirect_target("?q=rust").is_none());
    assert!(redirect_target("").is_none());
}
