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

use super::{init_signing_test, load_static_credential, send_signed_request};
use anyhow::Result;
use artemis_openapi::{endpoint, ApiResponse, Credential, PageRequest};
use bytes::Bytes;
use http::{Method, Request, StatusCode};
use log::warn;
use serde_json::Value;

fn json_request(url: &str, path: &str, body: &[u8]) -> Result<Request<Bytes>> {
    Ok(Request::builder()
        .method(Method::POST)
        .uri(format!("{url}{path}"))
        .body(Bytes::copy_from_slice(body))?)
}

#[tokio::test]
async fn test_version() -> Result<()> {
    let Some((ctx, signer, url)) = init_signing_test() else {
        warn!("ARTEMIS_TEST is not set, skipped");
        return Ok(());
    };

    let cred = load_static_credential();
    let req = json_request(&url, endpoint::VERSION, b"{}")?;

    let (status, body) = send_signed_request(&ctx, &signer, req, &cred).await?;
    assert_eq!(StatusCode::OK, status);

    let resp: ApiResponse<Value> = serde_json::from_str(&body)?;
    assert!(resp.is_success(), "{body}");
    Ok(())
}

#[tokio::test]
async fn test_person_list() -> Result<()> {
    let Some((ctx, signer, url)) = init_signing_test() else {
        warn!("ARTEMIS_TEST is not set, skipped");
        return Ok(());
    };

    let cred = load_static_credential();
    let body = serde_json::to_vec(&PageRequest::new(1, 10))?;
    let req = json_request(&url, endpoint::PERSON_LIST, &body)?;

    let (status, body) = send_signed_request(&ctx, &signer, req, &cred).await?;
    assert_eq!(StatusCode::OK, status);

    let resp: ApiResponse<Value> = serde_json::from_str(&body)?;
    assert!(resp.is_success(), "{body}");
    Ok(())
}

#[tokio::test]
async fn test_wrong_secret_is_rejected() -> Result<()> {
    let Some((ctx, signer, url)) = init_signing_test() else {
        warn!("ARTEMIS_TEST is not set, skipped");
        return Ok(());
    };

    let cred = load_static_credential();
    let cred = Credential::new(cred.app_key, "definitely-not-the-secret");
    let req = json_request(&url, endpoint::VERSION, b"{}")?;

    let (status, _) = send_signed_request(&ctx, &signer, req, &cred).await?;
    assert!(
        status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN,
        "unexpected status {status}"
    );
    Ok(())
}
