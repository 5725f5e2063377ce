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

//! Artemis OpenAPI signing and calling.
//!
//! Every call to an Artemis OpenAPI gateway carries an HMAC-SHA256 signature
//! computed over the method, a few fixed headers, the MD5 of the body, the app
//! key and the url path. This crate implements that signature, the credential
//! loading around it, and a small client that makes sure the bytes that were
//! signed are the bytes that are sent.
//!
//! ## Quick Start
//!
//! ```no_run
//! use artemis_core::{Context, OsEnv};
//! use artemis_file_read_tokio::TokioFileRead;
//! use artemis_http_send_reqwest::ReqwestHttpSend;
//! use artemis_openapi::{endpoint, Client, Config};
//! use serde_json::{json, Value};
//!
//! #[tokio::main]
//! async fn main() -> artemis_core::Result<()> {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let config = Config::new()
//!         .with_base_url("https://10.0.0.5")
//!         .from_env(&ctx);
//!     let client = Client::new(ctx, config);
//!
//!     println!("platform version: {}", client.version().await?);
//!
//!     let groups: Value = client
//!         .post(endpoint::VISITOR_GROUPS, &json!({"pageNo": 1, "pageSize": 100}))
//!         .await?;
//!     println!("{groups}");
//!     Ok(())
//! }
//! ```
//!
//! ## Signing only
//!
//! [`sign`] is a pure function and can be used with any http client:
//!
//! ```
//! let headers = artemis_openapi::sign(
//!     "POST",
//!     b"{}",
//!     "/artemis/api/visitor/v1/appointment",
//!     "11566257",
//!     "DBntId5f4LZPfW1Ik5Yh",
//! );
//! assert_eq!(headers.content_md5, "mZFLkyvTelC5g8XnyQrpOw==");
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export ARTEMIS_APP_KEY=your-app-key
//! export ARTEMIS_APP_SECRET=your-app-secret
//! export ARTEMIS_BASE_URL=https://10.0.0.5  # Optional
//! ```
//!
//! ### Configuration File
//!
//! `~/.artemis/config.toml`, or the file named by `ARTEMIS_CONFIG_FILE`:
//!
//! ```toml
//! app_key = "your-app-key"
//! app_secret = "your-app-secret"
//! base_url = "https://10.0.0.5"
//! ```

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{sign, string_to_sign, RequestSigner, SignedHeaders};

mod provide_credential;
pub use provide_credential::*;

mod response;
pub use response::{ApiResponse, AppointmentResult, Page, PageRequest, RESOURCE_EXISTS, SUCCESS};

mod codes;
pub use codes::{DoorState, Gender, VisitorStatus};

mod client;
pub use client::{CallApi, Client};

pub mod endpoint;
