use std::mem;
use std::str::FromStr;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{Error, Result};

/// AsciiSet that keeps only the RFC 3986 unreserved characters:
/// 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_' and '~'.
///
/// Every other byte is percent-encoded with uppercase hex digits.
pub static UNRESERVED_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A request taken apart for signing.
///
/// Path segments and query pairs are held percent-decoded, so that signers can
/// apply their own canonical encoding to them.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// Decoded path segments, without the leading empty segment.
    ///
    /// `/` is `[]`, `/a/b` is `["a", "b"]` and `/a/` is `["a", ""]`.
    pub path: Vec<String>,
    /// Decoded query pairs in their original order. Duplicate keys are kept.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing request from http::request::Parts.
    ///
    /// Fails with [`ErrorKind::InvalidEncoding`](crate::ErrorKind::InvalidEncoding) if a
    /// path segment or query component does not decode to valid utf-8. `parts` is
    /// left untouched on failure.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let authority = parts.uri.authority().cloned().ok_or_else(|| {
            Error::request_invalid("request without authority is invalid for signing")
        })?;
        let path = Self::path_decode(parts.uri.path())?;
        let query = parts
            .uri
            .query()
            .map(Self::query_decode)
            .transpose()?
            .unwrap_or_default();

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: parts.uri.scheme().cloned().unwrap_or(Scheme::HTTPS),
            authority,
            path,
            query,

            // Take the headers out of the request to avoid copy.
            // They go back on apply or restore.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing request back to http::request::Parts.
    ///
    /// Path segments and query pairs are written back encoded once with
    /// [`UNRESERVED_ENCODE_SET`]. On failure the headers are returned to `parts`
    /// as by [`SigningRequest::restore`] and its uri is kept.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        let paq = match self.query_to_string() {
            q if q.is_empty() => self.path_to_string(),
            q => format!("{}?{q}", self.path_to_string()),
        };
        let uri = match PathAndQuery::from_str(&paq) {
            Ok(paq) => Uri::builder()
                .scheme(self.scheme.clone())
                .authority(self.authority.clone())
                .path_and_query(paq)
                .build()
                .map_err(Error::from),
            Err(err) => Err(Error::from(err)),
        };
        let uri = match uri {
            Ok(uri) => uri,
            Err(err) => {
                self.restore(parts);
                return Err(err);
            }
        };

        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = uri;

        Ok(())
    }

    /// Give the headers held by this request back to `parts` without touching
    /// its method or uri.
    pub fn restore(self, parts: &mut http::request::Parts) {
        parts.headers = self.headers;
    }

    /// Render the path as sent on the wire: each segment encoded once.
    pub fn path_to_string(&self) -> String {
        let mut s = String::with_capacity(16);
        if self.path.is_empty() {
            s.push('/');
        }
        for segment in &self.path {
            s.push('/');
            s.extend(utf8_percent_encode(segment, &UNRESERVED_ENCODE_SET));
        }
        s
    }

    /// Render the query as sent on the wire, keeping the pair order.
    pub fn query_to_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, &UNRESERVED_ENCODE_SET),
                    utf8_percent_encode(v, &UNRESERVED_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    fn path_decode(path: &str) -> Result<Vec<String>> {
        let path = path.strip_prefix('/').unwrap_or(path);
        if path.is_empty() {
            return Ok(Vec::new());
        }

        path.split('/').map(Self::component_decode).collect()
    }

    fn query_decode(query: &str) -> Result<Vec<(String, String)>> {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                Ok((Self::component_decode(k)?, Self::component_decode(v)?))
            })
            .collect()
    }

    fn component_decode(s: &str) -> Result<String> {
        percent_decode_str(s)
            .decode_utf8()
            .map(|v| v.into_owned())
            .map_err(|e| {
                Error::invalid_encoding(format!("{s:?} does not decode to valid utf-8"))
                    .with_source(e)
            })
    }
}
