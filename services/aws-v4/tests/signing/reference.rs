use super::{authorization, headers};
use http::Method;
use pretty_assertions::assert_eq;

const SUITE_HOST: &str = "example.amazonaws.com";
const SUITE_DATE: &str = "20150830T123600Z";

#[test]
fn test_get_vanilla() {
    let h = headers(&[("host", SUITE_HOST), ("x-amz-date", SUITE_DATE)]);

    let auth = authorization(Method::GET, &[], &[], &h, b"", "service");
    assert_eq!(
        auth,
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
         SignedHeaders=host;x-amz-date, \
         Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
    );
}

#[test]
fn test_get_vanilla_query_order_key_case() {
    let h = headers(&[("host", SUITE_HOST), ("x-amz-date", SUITE_DATE)]);
    let query = [("Param2", "value2"), ("Param1", "value1")];

    let auth = authorization(Method::GET, &[], &query, &h, b"", "service");
    assert!(auth.ends_with(
        "Signature=b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"
    ));
}

#[test]
fn test_get_header_value_trim() {
    let h = headers(&[
        ("host", SUITE_HOST),
        ("my-header1", " value1"),
        ("my-header2", "\"a   b   c\""),
        ("x-amz-date", SUITE_DATE),
    ]);

    let auth = authorization(Method::GET, &[], &[], &h, b"", "service");
    assert_eq!(
        auth,
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
         SignedHeaders=host;my-header1;my-header2;x-amz-date, \
         Signature=acc3ed3afb60bb290fc8d2dd0098b9911fcaa05412b367055dee359757a9c736"
    );
}

#[test]
fn test_get_space_in_path() {
    let h = headers(&[("host", SUITE_HOST), ("x-amz-date", SUITE_DATE)]);

    let auth = authorization(Method::GET, &["example space", ""], &[], &h, b"", "service");
    assert!(auth.ends_with(
        "Signature=446b817944c553435b35e813c261ff4e161fff982d1bacdef1c87f6785dd1662"
    ));
}

#[test]
fn test_get_with_session_token() {
    let token = "AQoDYXdzEPT//////////wEXAMPLEtc764bNrC9SAPBSM22wDOk4x4HIZ8j4FZTwdQWLWsKWHGBuFqwAeMicRXmxfpSPfIeoIYRqTflfKD8YUuwthAx7mSEI/qkPpKPi/kMcGdQrmGdeehM4IC1NtBmUpp2wUE8phUZampKsburEDy0KPkyQDYwT7WZ0wq5VSXDvp75YU9HFvlRd8Tx6q6fE8YQcHNVXAkiY9q6d+xo0rKwT38xVqr7ZD0u0iPPkUL64lIZbqBAz+scqKmlzm8FDrypNC9Yjc8fPOLn9FX9KSYvKTr4rvx3iSIlTJabIQwj2ICCR/oLxBA==";
    let h = headers(&[
        ("host", SUITE_HOST),
        ("x-amz-date", SUITE_DATE),
        ("x-amz-security-token", token),
    ]);

    let auth = authorization(Method::GET, &[], &[], &h, b"", "service");
    assert_eq!(
        auth,
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
         SignedHeaders=host;x-amz-date;x-amz-security-token, \
         Signature=c8db8b9676d526f735dac5330f17623554c6cad1e2980d321903e9a3884c051b"
    );
}

#[test]
fn test_iam_list_users() {
    let h = headers(&[
        (
            "content-type",
            "application/x-www-form-urlencoded; charset=utf-8",
        ),
        ("host", "iam.amazonaws.com"),
        ("x-amz-date", SUITE_DATE),
    ]);
    let query = [("Action", "ListUsers"), ("Version", "2010-05-08")];

    let auth = authorization(Method::GET, &[], &query, &h, b"", "iam");
    assert_eq!(
        auth,
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
         SignedHeaders=content-type;host;x-amz-date, \
         Signature=5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
    );
}
