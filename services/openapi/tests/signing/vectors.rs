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

use artemis_core::{Context, ErrorKind, SignRequest, Signer};
use artemis_openapi::{
    sign, string_to_sign, Credential, RequestSigner, StaticCredentialProvider,
};
use http::Request;
use pretty_assertions::assert_eq;
use test_case::test_case;

const APP_KEY: &str = "11566257";
const APP_SECRET: &str = "DBntId5f4LZPfW1Ik5Yh";

#[test_case(
    APP_KEY, APP_SECRET, "/artemis/api/visitor/v1/appointment", b"{}",
    "mZFLkyvTelC5g8XnyQrpOw==", "qay7hCuF9G/YXEnt6eH9IlyziY9mJLl5nyWxWpj8GTM=";
    "visitor appointment"
)]
#[test_case(
    APP_KEY, APP_SECRET, "/artemis/api/resource/v1/person/personList",
    br#"{"pageNo":1,"pageSize":100}"#,
    "U0Xj//qmRi3zoyapfAAuXw==", "Cr0AJIsLJ3yhkCNl43M/FMdkvlaRjI2jR1t01ZJpXF4=";
    "person list"
)]
#[test_case(
    "test_key", "test_secret", "/artemis/api/common/v1/version", b"{}",
    "mZFLkyvTelC5g8XnyQrpOw==", "sLzXiLltlXg+TvuapaLaXEMOrRugIxqBkNjZ4EaVlr0=";
    "version"
)]
#[test_case(
    "test_key", "test_secret", "/artemis/api/resource/v1/person/personList",
    br#"{"pageNo":1,"pageSize":10}"#,
    "kxdxk7rbAsrzSIWgEwhH4w==", "+wXWYubBnLUI5coQ5vnnwaxwKSMfN1Z7fJhbO+vLIHo=";
    "person list small page"
)]
fn test_known_signatures(
    app_key: &str,
    app_secret: &str,
    path: &str,
    body: &[u8],
    content_md5: &str,
    signature: &str,
) {
    let headers = sign("POST", body, path, app_key, app_secret);

    assert_eq!(headers.content_md5, content_md5);
    assert_eq!(headers.ca_signature, signature);
    assert_eq!(headers.ca_key, app_key);
}

#[test]
fn test_known_string_to_sign() {
    assert_eq!(
        string_to_sign(
            "POST",
            "mZFLkyvTelC5g8XnyQrpOw==",
            "/artemis/api/visitor/v1/appointment",
            APP_KEY
        ),
        concat!(
            "POST\n",
            "application/json\n",
            "mZFLkyvTelC5g8XnyQrpOw==\n",
            "application/json;charset=UTF-8\n",
            "x-ca-key:11566257\n",
            "/artemis/api/visitor/v1/appointment",
        )
    );
}

#[test]
fn test_empty_body() {
    let headers = sign("POST", b"", "/artemis/api/common/v1/version", APP_KEY, APP_SECRET);

    assert_eq!(headers.content_md5, "1B2M2Y8AsgTpgAmY7PhCfg==");
}

#[test]
fn test_json_is_not_normalized() {
    let path = "/artemis/api/resource/v1/person/personList";
    let compact = sign("POST", br#"{"pageNo":1,"pageSize":100}"#, path, APP_KEY, APP_SECRET);
    let spaced = sign("POST", br#"{"pageNo": 1, "pageSize": 100}"#, path, APP_KEY, APP_SECRET);
    let reordered = sign("POST", br#"{"pageSize":100,"pageNo":1}"#, path, APP_KEY, APP_SECRET);

    assert_ne!(compact.ca_signature, spaced.ca_signature);
    assert_ne!(compact.ca_signature, reordered.ca_signature);
    assert_ne!(spaced.ca_signature, reordered.ca_signature);
}

#[tokio::test]
async fn test_request_signer_matches_sign() -> anyhow::Result<()> {
    let req = Request::post("https://10.0.0.5/artemis/api/visitor/v1/appointment")
        .body(())?;
    let (mut parts, _) = req.into_parts();

    RequestSigner::new()
        .sign_request(
            &Context::new(),
            &mut parts,
            b"{}",
            Some(&Credential::new(APP_KEY, APP_SECRET)),
        )
        .await?;

    assert_eq!(parts.headers.len(), 6);
    assert_eq!(parts.headers["accept"], "application/json");
    assert_eq!(parts.headers["content-type"], "application/json;charset=UTF-8");
    assert_eq!(parts.headers["x-ca-signature-headers"], "x-ca-key");
    assert_eq!(parts.headers["x-ca-key"], APP_KEY);
    assert_eq!(
        parts.headers["x-ca-signature"],
        "qay7hCuF9G/YXEnt6eH9IlyziY9mJLl5nyWxWpj8GTM="
    );

    Ok(())
}

#[tokio::test]
async fn test_signer_with_static_provider() -> anyhow::Result<()> {
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new(APP_KEY, APP_SECRET),
        RequestSigner::new(),
    );

    let req = Request::post("https://10.0.0.5/artemis/api/visitor/v1/appointment")
        .body(())?;
    let (mut parts, _) = req.into_parts();
    signer.sign(&mut parts, b"{}").await?;

    assert_eq!(parts.headers["content-md5"], "mZFLkyvTelC5g8XnyQrpOw==");
    assert_eq!(
        parts.headers["x-ca-signature"],
        "qay7hCuF9G/YXEnt6eH9IlyziY9mJLl5nyWxWpj8GTM="
    );

    Ok(())
}

#[tokio::test]
async fn test_signer_with_empty_credential() -> anyhow::Result<()> {
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new(APP_KEY, ""),
        RequestSigner::new(),
    );

    let req = Request::post("https://10.0.0.5/artemis/api/common/v1/version").body(())?;
    let (mut parts, _) = req.into_parts();
    let err = signer.sign(&mut parts, b"{}").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(parts.headers.is_empty());

    Ok(())
}
