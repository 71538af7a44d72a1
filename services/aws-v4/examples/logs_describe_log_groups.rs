use anyhow::Result;
use awsig_aws_v4::{Config, DefaultCredentialProvider, RequestSigner};
use awsig_core::{Context, OsEnv, Signer};
use awsig_file_read_tokio::TokioFileRead;
use awsig_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    // Region from AWS_REGION or AWS_DEFAULT_REGION.
    let mut config = Config::default().from_env(&ctx);
    let region = config
        .region
        .get_or_insert_with(|| "us-east-1".to_string())
        .clone();

    let signer = Signer::new(
        ctx.clone(),
        DefaultCredentialProvider::with_config(Arc::new(config.clone())),
        RequestSigner::from_config("logs", &config)?,
    );

    let req = http::Request::post(format!("https://logs.{region}.amazonaws.com/"))
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", "Logs_20140328.DescribeLogGroups")
        .body(Bytes::from_static(br#"{"limit":5}"#))?;

    match signer.send(req).await {
        Ok(resp) => {
            println!("status: {}", resp.status());
            println!("{}", String::from_utf8_lossy(resp.body()));
        }
        Err(err) => {
            eprintln!("failed to describe log groups: {err}");
            if err.is_credential_error() {
                eprintln!("set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY, or configure ~/.aws/credentials");
            }
        }
    }

    Ok(())
}
