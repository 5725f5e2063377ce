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

mod live;
mod vectors;

use anyhow::Result;
use artemis_core::{Context, SignRequest};
use artemis_http_send_reqwest::ReqwestHttpSend;
use artemis_openapi::{Credential, RequestSigner};
use bytes::Bytes;
use http::{Request, StatusCode};
use log::debug;
use std::env;

/// Load the credential for live tests from environment variables.
pub fn load_static_credential() -> Credential {
    let app_key = env::var("ARTEMIS_TEST_APP_KEY").expect("ARTEMIS_TEST_APP_KEY must be set");
    let app_secret =
        env::var("ARTEMIS_TEST_APP_SECRET").expect("ARTEMIS_TEST_APP_SECRET must be set");

    Credential::new(app_key, app_secret)
}

/// Initialize live signing tests, `None` if they are disabled.
pub fn init_signing_test() -> Option<(Context, RequestSigner, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("ARTEMIS_TEST").is_err() || env::var("ARTEMIS_TEST").unwrap() != "on" {
        return None;
    }

    let url = env::var("ARTEMIS_TEST_URL").expect("ARTEMIS_TEST_URL must be set");

    // Artemis gateways are usually deployed with self signed certificates.
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .build()
        .expect("reqwest client must build");
    let context = Context::new().with_http_send(ReqwestHttpSend::new(client));

    Some((context, RequestSigner::new(), url))
}

/// Sign `req` with `cred` and send it, returning status and body.
pub async fn send_signed_request(
    ctx: &Context,
    signer: &RequestSigner,
    req: Request<Bytes>,
    cred: &Credential,
) -> Result<(StatusCode, String)> {
    let (mut parts, body) = req.into_parts();
    signer
        .sign_request(ctx, &mut parts, &body, Some(cred))
        .await
        .expect("sign request must succeed");
    let req = Request::from_parts(parts, body);

    debug!("signed request: {req:?}");

    let resp = ctx.http_send(req).await?;
    let status = resp.status();
    let body = String::from_utf8_lossy(resp.body()).to_string();

    debug!("response status: {status}, body: {body}");
    Ok((status, body))
}
