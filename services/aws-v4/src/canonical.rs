// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Canonical request construction.
//!
//! - [Create a canonical request](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request)

use awsig_core::hash::hex_sha256;
use awsig_core::{Error, Result, UNRESERVED_ENCODE_SET};
use http::{HeaderMap, Method};
use percent_encoding::utf8_percent_encode;
use std::collections::BTreeMap;

/// Build the canonical request for the given request components.
///
/// Returns the canonical request string together with the signed header list
/// (`content-type;host;x-amz-date`). Path segments and query pairs are expected
/// decoded, as held by [`SigningRequest`](awsig_core::SigningRequest).
pub fn canonicalize(
    method: &Method,
    path: &[impl AsRef<str>],
    query: &[(impl AsRef<str>, impl AsRef<str>)],
    headers: &HeaderMap,
    payload: &[u8],
) -> Result<(String, String)> {
    let (canonical_headers, signed_headers) = canonical_headers(headers)?;

    let creq = [
        method.as_str(),
        &canonical_uri(path),
        &canonical_query_string(query),
        &canonical_headers,
        &signed_headers,
        &hex_sha256(payload),
    ]
    .join("\n");

    Ok((creq, signed_headers))
}

/// Render the canonical URI.
///
/// Every segment is encoded twice: `a b` becomes `a%2520b`. No segments
/// render as `/`.
pub fn canonical_uri(path: &[impl AsRef<str>]) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let mut s = String::with_capacity(64);
    for segment in path {
        let once = utf8_percent_encode(segment.as_ref(), &UNRESERVED_ENCODE_SET).to_string();
        s.push('/');
        s.extend(utf8_percent_encode(&once, &UNRESERVED_ENCODE_SET));
    }
    s
}

/// Render the canonical query string.
///
/// Keys and values are encoded once, then pairs are sorted by encoded key and
/// by encoded value for equal keys.
pub fn canonical_query_string(query: &[(impl AsRef<str>, impl AsRef<str>)]) -> String {
    let mut pairs = query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k.as_ref(), &UNRESERVED_ENCODE_SET).to_string(),
                utf8_percent_encode(v.as_ref(), &UNRESERVED_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Render the canonical headers block and the signed header list.
///
/// The block carries a trailing newline after every header, so joining it with
/// the other lines leaves the blank line the canonical request requires.
pub fn canonical_headers(headers: &HeaderMap) -> Result<(String, String)> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers {
        let value = std::str::from_utf8(value.as_bytes()).map_err(|e| {
            Error::invalid_encoding(format!("value of header {name} is not valid utf-8"))
                .with_source(e)
        })?;

        groups
            .entry(name.as_str().trim().to_lowercase())
            .or_default()
            .push(normalize_header_value(value));
    }

    let mut block = String::with_capacity(256);
    for (name, values) in &groups {
        block.push_str(name);
        block.push(':');
        block.push_str(&values.join(","));
        block.push('\n');
    }
    let signed = groups.keys().map(String::as_str).collect::<Vec<_>>().join(";");

    Ok((block, signed))
}

/// Trim the value and collapse every inner whitespace run into one space.
pub fn normalize_header_value(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
