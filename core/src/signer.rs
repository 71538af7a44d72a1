use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use bytes::Bytes;
use log::debug;
use std::sync::Arc;

/// Signer is the main struct used to sign and send requests.
///
/// It resolves the credential on every call and keeps no state between calls, so a
/// single `Signer` can be shared across tasks and threads.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            builder: Arc::new(builder),
        }
    }

    /// Replace the credential provider.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Replace the context.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Get the context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Sign the request in place.
    ///
    /// Fails with [`ErrorKind::CredentialMissing`](crate::ErrorKind::CredentialMissing)
    /// before anything is hashed if no credential can be resolved.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let cred = self.credential().await?;

        self.builder
            .sign_request(&self.ctx, req, body, &cred)
            .await
    }

    /// Sign the request and hand it to the context's transport.
    ///
    /// Transport errors are returned unchanged; nothing is retried.
    pub async fn send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (mut parts, body) = req.into_parts();
        self.sign(&mut parts, &body).await?;

        let req = http::Request::from_parts(parts, body);
        debug!("sending signed request: {} {}", req.method(), req.uri());
        self.ctx.http_send(req).await
    }

    async fn credential(&self) -> Result<K> {
        let Some(cred) = self.provider.provide_credential(&self.ctx).await? else {
            return Err(Error::credential_missing(
                "no credential found in any configured source",
            ));
        };
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "resolved credential is empty or incomplete",
            ));
        }

        Ok(cred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, HttpSend};
    use async_trait::async_trait;
    use http::HeaderValue;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug)]
    struct TestCredential(String);

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug)]
    struct TestProvider(Option<&'static str>);

    #[async_trait]
    impl ProvideCredential for TestProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Ok(self.0.map(|v| TestCredential(v.to_string())))
        }
    }

    #[derive(Debug, Default)]
    struct TestSigner {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SignRequest for TestSigner {
        type Credential = TestCredential;

        async fn sign_request(
            &self,
            _: &Context,
            req: &mut http::request::Parts,
            body: &[u8],
            cred: &Self::Credential,
        ) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            req.headers.insert(
                http::header::AUTHORIZATION,
                HeaderValue::from_str(&format!("{}:{}", cred.0, body.len()))?,
            );
            Ok(())
        }
    }

    #[derive(Debug)]
    struct EchoHttpSend;

    #[async_trait]
    impl HttpSend for EchoHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            let auth = req.headers()[http::header::AUTHORIZATION].clone();
            Ok(http::Response::builder()
                .status(200)
                .body(Bytes::copy_from_slice(auth.as_bytes()))?)
        }
    }

    #[derive(Debug)]
    struct RejectHttpSend;

    #[async_trait]
    impl HttpSend for RejectHttpSend {
        async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            Err(Error::transport("SignatureDoesNotMatch"))
        }
    }

    fn request(body: &'static str) -> http::Request<Bytes> {
        http::Request::post("https://logs.us-east-1.amazonaws.com/")
            .body(Bytes::from_static(body.as_bytes()))
            .expect("request must be valid")
    }

    #[tokio::test]
    async fn test_sign_without_credential() {
        let builder = TestSigner::default();
        let calls = builder.calls.clone();
        let signer = Signer::new(Context::new(), TestProvider(None), builder);

        let (mut parts, body) = request("{}").into_parts();
        let err = signer.sign(&mut parts, &body).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CredentialMissing);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(parts.headers.get(http::header::AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_sign_with_empty_credential() {
        let signer = Signer::new(Context::new(), TestProvider(Some("")), TestSigner::default());

        let (mut parts, body) = request("{}").into_parts();
        let err = signer.sign(&mut parts, &body).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }

    #[tokio::test]
    async fn test_send_hands_signed_request_to_transport() {
        let ctx = Context::new().with_http_send(EchoHttpSend);
        let signer = Signer::new(ctx, TestProvider(Some("key")), TestSigner::default());

        let resp = signer.send(request("{}")).await.expect("send must succeed");

        assert_eq!(resp.body().as_ref(), b"key:2");
    }

    #[tokio::test]
    async fn test_send_forwards_transport_error() {
        let ctx = Context::new().with_http_send(RejectHttpSend);
        let signer = Signer::new(ctx, TestProvider(Some("key")), TestSigner::default());

        let err = signer.send(request("{}")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.message(), "SignatureDoesNotMatch");
    }
}
