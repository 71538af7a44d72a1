mod live;
mod properties;
mod reference;

use awsig_aws_v4::{
    assemble_authorization_header, build_string_to_sign, canonicalize, derive_signing_key,
    CredentialScope,
};
use awsig_core::hash::hex_sha256;
use awsig_core::time::{parse_iso8601, DateTime};
use http::{HeaderMap, HeaderValue, Method};

/// Access key id used by the published test suite.
pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
/// Secret access key used by the published test suite.
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

/// Signing instant of the published test suite.
pub fn suite_time() -> DateTime {
    parse_iso8601("20150830T123600Z").expect("time must be valid")
}

/// Build a header map, keeping repeated names as separate values.
pub fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut m = HeaderMap::new();
    for (k, v) in pairs {
        m.append(*k, HeaderValue::from_str(v).expect("header must be valid"));
    }
    m
}

/// Run the four signing steps by hand and return the authorization value.
pub fn authorization(
    method: Method,
    path: &[&str],
    query: &[(&str, &str)],
    headers: &HeaderMap,
    payload: &[u8],
    service: &str,
) -> String {
    let (creq, signed_headers) =
        canonicalize(&method, path, query, headers, payload).expect("canonicalize must succeed");

    let scope = CredentialScope::new(suite_time(), "us-east-1", service);
    let string_to_sign = build_string_to_sign(&scope, &hex_sha256(creq.as_bytes()));
    let key = derive_signing_key(SECRET_ACCESS_KEY, suite_time(), "us-east-1", service);

    assemble_authorization_header(ACCESS_KEY_ID, key, &string_to_sign, &scope, &signed_headers)
}
