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

//! List visitor groups and the status of their visitors.
//!
//! ```bash
//! export ARTEMIS_BASE_URL=https://10.0.0.5
//! export ARTEMIS_APP_KEY=your-app-key
//! export ARTEMIS_APP_SECRET=your-app-secret
//! cargo run --example visitor_list
//! ```

use artemis_core::{Context, OsEnv};
use artemis_file_read_tokio::TokioFileRead;
use artemis_http_send_reqwest::ReqwestHttpSend;
use artemis_openapi::{endpoint, Client, Config, Gender, Page, PageRequest, VisitorStatus};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRecord {
    #[serde(default)]
    visitor_name: Option<String>,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    visitor_status: Option<VisitorStatus>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Most gateways use a self signed certificate.
    let http = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .timeout(std::time::Duration::from_secs(10))
        .build()?;
    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::new(http))
        .with_env(OsEnv);

    let config = Config::new().from_env(&ctx).from_config_file(&ctx).await?;
    let client = Client::new(ctx, config);

    println!("platform version: {}", client.version().await?);

    let records: Page<RegisterRecord> = client
        .post(endpoint::VISITOR_REGISTER_RECORD, &PageRequest::new(1, 50))
        .await?;
    println!("{} register records", records.total);

    for record in records.list {
        println!(
            "{:<24} {:<8} {}",
            record.visitor_name.as_deref().unwrap_or("-"),
            record.gender.unwrap_or_default().to_string(),
            record
                .visitor_status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    Ok(())
}
