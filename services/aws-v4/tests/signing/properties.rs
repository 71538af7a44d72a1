use super::{suite_time, ACCESS_KEY_ID, SECRET_ACCESS_KEY};
use async_trait::async_trait;
use awsig_aws_v4::constants::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN};
use awsig_aws_v4::{
    assemble_authorization_header, build_string_to_sign, canonicalize, derive_signing_key,
    Credential, CredentialScope, DefaultCredentialProvider, RequestSigner,
};
use awsig_core::hash::hex_sha256;
use awsig_core::{Context, ErrorKind, HttpSend, Result, Signer, SigningRequest, StaticEnv};
use awsig_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use http::header;
use http::request::Parts;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

fn credential() -> Credential {
    Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY)
}

fn signer() -> RequestSigner {
    RequestSigner::new("logs", "us-east-1").with_time(suite_time())
}

fn describe_log_groups() -> Parts {
    http::Request::post("https://logs.us-east-1.amazonaws.com/")
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", "Logs_20140328.DescribeLogGroups")
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0
}

fn env_context(envs: &[(&str, &str)]) -> Context {
    Context::new().with_env(StaticEnv {
        home_dir: None,
        envs: envs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    })
}

#[test]
fn test_signed_request_can_be_recomputed() {
    let _ = env_logger::builder().is_test(true).try_init();

    let body = br#"{"limit":5}"#;
    let mut parts = describe_log_groups();
    signer()
        .sign(&mut parts, body, &credential())
        .expect("sign must succeed");

    let expected = parts.headers[header::AUTHORIZATION]
        .to_str()
        .expect("must be valid")
        .to_string();

    // Verify the way a server would: from what is on the wire only.
    parts.headers.remove(header::AUTHORIZATION);
    let req = SigningRequest::build(&mut parts).expect("build must succeed");
    let (creq, signed_headers) =
        canonicalize(&req.method, &req.path, &req.query, &req.headers, body)
            .expect("canonicalize must succeed");
    let scope = CredentialScope::new(suite_time(), "us-east-1", "logs");
    let actual = assemble_authorization_header(
        ACCESS_KEY_ID,
        derive_signing_key(SECRET_ACCESS_KEY, suite_time(), "us-east-1", "logs"),
        &build_string_to_sign(&scope, &hex_sha256(creq.as_bytes())),
        &scope,
        &signed_headers,
    );

    assert_eq!(actual, expected);
    assert_eq!(
        signed_headers,
        "content-length;content-type;host;x-amz-date;x-amz-target"
    );
}

#[test]
fn test_header_order_does_not_change_signature() {
    let mut a = http::Request::get("https://logs.us-east-1.amazonaws.com/")
        .header("x-amz-target", "Logs_20140328.DescribeLogGroups")
        .header("content-type", "application/x-amz-json-1.1")
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0;
    let mut b = describe_log_groups();
    b.method = http::Method::GET;

    signer().sign(&mut a, b"", &credential()).expect("sign must succeed");
    signer().sign(&mut b, b"", &credential()).expect("sign must succeed");

    assert_eq!(
        a.headers[header::AUTHORIZATION],
        b.headers[header::AUTHORIZATION]
    );
}

#[test]
fn test_concurrent_signing_is_consistent() {
    let signer = Arc::new(signer());

    let handles = (0..8)
        .map(|_| {
            let signer = signer.clone();
            thread::spawn(move || {
                let mut parts = describe_log_groups();
                signer
                    .sign(&mut parts, b"{}", &credential())
                    .expect("sign must succeed");
                parts.headers[header::AUTHORIZATION].clone()
            })
        })
        .collect::<Vec<_>>();

    let values = handles
        .into_iter()
        .map(|h| h.join().expect("thread must not panic"))
        .collect::<Vec<_>>();
    assert!(values.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_signer_without_credential() {
    let signer = Signer::new(
        env_context(&[]),
        DefaultCredentialProvider::new(),
        signer(),
    );

    let mut parts = describe_log_groups();
    let err = signer.sign(&mut parts, b"{}").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialMissing);
    assert!(parts.headers.get(header::AUTHORIZATION).is_none());
}

#[tokio::test]
async fn test_signer_with_env_session_token() {
    let ctx = env_context(&[
        (AWS_ACCESS_KEY_ID, ACCESS_KEY_ID),
        (AWS_SECRET_ACCESS_KEY, SECRET_ACCESS_KEY),
        (AWS_SESSION_TOKEN, "session-token"),
    ]);
    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), signer());

    let mut parts = describe_log_groups();
    signer
        .sign(&mut parts, b"{}")
        .await
        .expect("sign must succeed");

    assert_eq!(parts.headers["x-amz-security-token"], "session-token");
    let auth = parts.headers[header::AUTHORIZATION]
        .to_str()
        .expect("must be valid");
    assert!(auth.contains(
        "SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-security-token;x-amz-target,"
    ));
}

#[derive(Debug, Default)]
struct RecordHttpSend {
    seen: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

#[async_trait]
impl HttpSend for RecordHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.seen.lock().expect("lock must not be poisoned").push(req);
        Ok(http::Response::builder()
            .status(200)
            .body(Bytes::from_static(br#"{"logGroups":[]}"#))?)
    }
}

#[tokio::test]
async fn test_signer_send_hands_off_signed_request() {
    let transport = RecordHttpSend::default();
    let seen = transport.seen.clone();
    let ctx = env_context(&[
        (AWS_ACCESS_KEY_ID, ACCESS_KEY_ID),
        (AWS_SECRET_ACCESS_KEY, SECRET_ACCESS_KEY),
    ])
    .with_http_send(transport);
    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), signer());

    let body = Bytes::from_static(br#"{"limit":5}"#);
    let req = http::Request::from_parts(describe_log_groups(), body.clone());
    let resp = signer.send(req).await.expect("send must succeed");

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.body().as_ref(), br#"{"logGroups":[]}"#);

    let seen = seen.lock().expect("lock must not be poisoned");
    assert_eq!(seen.len(), 1);
    let sent = &seen[0];
    assert_eq!(sent.uri().to_string(), "https://logs.us-east-1.amazonaws.com/");
    assert_eq!(sent.body(), &body);
    assert_eq!(sent.headers()[header::HOST], "logs.us-east-1.amazonaws.com");
    assert_eq!(sent.headers()[header::CONTENT_LENGTH], "11");
    assert_eq!(sent.headers()["x-amz-date"], "20150830T123600Z");
    assert!(sent.headers().contains_key(header::AUTHORIZATION));
}

#[tokio::test]
async fn test_signer_send_reports_transport_failure() {
    let ctx = env_context(&[
        (AWS_ACCESS_KEY_ID, ACCESS_KEY_ID),
        (AWS_SECRET_ACCESS_KEY, SECRET_ACCESS_KEY),
    ])
    .with_http_send(ReqwestHttpSend::default());
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new("logs", "us-east-1"),
    );

    let req = http::Request::post("http://127.0.0.1:1/")
        .body(Bytes::new())
        .expect("request must be valid");
    let err = signer.send(req).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
}
