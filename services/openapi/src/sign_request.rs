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

//! Artemis OpenAPI request signing.
use std::fmt::Write;

use artemis_core::hash::{base64_hmac_sha256, base64_md5};
use artemis_core::{Context, Error, Result, SignRequest};
use async_trait::async_trait;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};
use log::debug;

use crate::constants;
use crate::credential::Credential;

/// Headers that authorize a single Artemis OpenAPI call.
///
/// Produced by [`sign`]. The server recomputes the signature from the
/// received request, so these headers must travel together with the exact
/// body bytes that were signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value of `Accept`.
    pub accept: String,
    /// Value of `Content-MD5`: base64 of the MD5 digest of the body.
    pub content_md5: String,
    /// Value of `Content-Type`.
    pub content_type: String,
    /// Value of `X-Ca-Key`: the app key.
    pub ca_key: String,
    /// Value of `X-Ca-Signature-Headers`.
    pub ca_signature_headers: String,
    /// Value of `X-Ca-Signature`: base64 of the HMAC-SHA256 signature.
    pub ca_signature: String,
}

impl SignedHeaders {
    /// Header names and values, in the order the vendor documents them.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Accept", self.accept.as_str()),
            ("Content-MD5", self.content_md5.as_str()),
            ("Content-Type", self.content_type.as_str()),
            ("X-Ca-Key", self.ca_key.as_str()),
            ("X-Ca-Signature-Headers", self.ca_signature_headers.as_str()),
            ("X-Ca-Signature", self.ca_signature.as_str()),
        ]
        .into_iter()
    }

    /// Insert all headers into `headers`, replacing existing values.
    ///
    /// Fails with `RequestInvalid` if a value can't be carried by an http
    /// header, such as an app key containing a newline.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(ACCEPT, HeaderValue::from_str(&self.accept)?);
        headers.insert(
            HeaderName::from_static(constants::CONTENT_MD5),
            HeaderValue::from_str(&self.content_md5)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(&self.content_type)?);
        headers.insert(
            HeaderName::from_static(constants::X_CA_KEY),
            HeaderValue::from_str(&self.ca_key)?,
        );
        headers.insert(
            HeaderName::from_static(constants::X_CA_SIGNATURE_HEADERS),
            HeaderValue::from_str(&self.ca_signature_headers)?,
        );
        headers.insert(HeaderName::from_static(constants::X_CA_SIGNATURE), {
            let mut value = HeaderValue::from_str(&self.ca_signature)?;
            value.set_sensitive(true);
            value
        });

        Ok(())
    }
}

/// Sign a request for the Artemis OpenAPI gateway.
///
/// - `method` is used verbatim, the caller picks the casing (normally `POST`).
/// - `body` is the exact payload that will be sent. It's treated as opaque
///   bytes: two JSON documents that differ only in whitespace or key order
///   sign differently.
/// - `path` is the url path, starting with `/`, without host or query.
///
/// This is a pure function: the same inputs always give the same headers.
pub fn sign(
    method: &str,
    body: &[u8],
    path: &str,
    app_key: &str,
    app_secret: &str,
) -> SignedHeaders {
    let content_md5 = base64_md5(body);
    let string_to_sign = string_to_sign(method, &content_md5, path, app_key);
    debug!("string to sign: {:?}", &string_to_sign);

    let signature = base64_hmac_sha256(app_secret.as_bytes(), string_to_sign.as_bytes());

    SignedHeaders {
        accept: constants::ACCEPT.to_string(),
        content_md5,
        content_type: constants::CONTENT_TYPE.to_string(),
        ca_key: app_key.to_string(),
        ca_signature_headers: constants::SIGNATURE_HEADERS.to_string(),
        ca_signature: signature,
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// HTTPMethod + "\n" +
/// Accept + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// "x-ca-key:" + AppKey + "\n" +
/// Path
/// ```
///
/// There is no trailing newline after the path.
pub fn string_to_sign(method: &str, content_md5: &str, path: &str, app_key: &str) -> String {
    let mut s = String::with_capacity(
        method.len() + content_md5.len() + path.len() + app_key.len() + 64,
    );
    // Writing into a String can't fail.
    let _ = writeln!(&mut s, "{method}");
    let _ = writeln!(&mut s, "{}", constants::ACCEPT);
    let _ = writeln!(&mut s, "{content_md5}");
    let _ = writeln!(&mut s, "{}", constants::CONTENT_TYPE);
    let _ = writeln!(&mut s, "{}:{app_key}", constants::X_CA_KEY);
    s.push_str(path);

    s
}

/// RequestSigner that implements Artemis OpenAPI authorization.
///
/// It signs `http::request::Parts` with the path of the request uri, so a
/// query string present on the uri is left out of the signature.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new RequestSigner.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let signed = sign(
            req.method.as_str(),
            body,
            req.uri.path(),
            &cred.app_key,
            &cred.app_secret,
        );
        signed.apply(&mut req.headers)
    }
}
