use awsig_aws_v4::{Config, DefaultCredentialProvider, RequestSigner};
use awsig_core::{Context, OsEnv, Signer};
use awsig_file_read_tokio::TokioFileRead;
use awsig_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use log::{debug, warn};
use std::env;
use std::sync::Arc;

/// Build a signer against real AWS when `AWSIG_AWS_V4_TEST` is `on`.
fn init_live_signer(service: &str) -> Option<(Signer<awsig_aws_v4::Credential>, String)> {
    let _ = env_logger::builder().is_test(true).try_init();

    if env::var("AWSIG_AWS_V4_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let mut config = Config::default().from_env(&ctx);
    let region = config
        .region
        .get_or_insert_with(|| "us-east-1".to_string())
        .clone();

    let builder = RequestSigner::from_config(service, &config).expect("region must be set");
    let provider = DefaultCredentialProvider::with_config(Arc::new(config));

    Some((Signer::new(ctx, provider, builder), region))
}

#[tokio::test]
async fn test_sts_get_caller_identity() -> anyhow::Result<()> {
    let Some((signer, region)) = init_live_signer("sts") else {
        warn!("AWSIG_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let req = http::Request::get(format!(
        "https://sts.{region}.amazonaws.com/?Action=GetCallerIdentity&Version=2011-06-15"
    ))
    .body(Bytes::new())?;

    let resp = signer.send(req).await?;
    debug!("got response: {:?}", resp);
    assert_eq!(resp.status(), 200);
    Ok(())
}

#[tokio::test]
async fn test_logs_describe_log_groups() -> anyhow::Result<()> {
    let Some((signer, region)) = init_live_signer("logs") else {
        warn!("AWSIG_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let req = http::Request::post(format!("https://logs.{region}.amazonaws.com/"))
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", "Logs_20140328.DescribeLogGroups")
        .body(Bytes::from_static(br#"{"limit":1}"#))?;

    let resp = signer.send(req).await?;
    debug!("got response: {:?}", resp);
    assert_eq!(resp.status(), 200);
    Ok(())
}
