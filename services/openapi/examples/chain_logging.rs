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

//! Example demonstrating credential chain logging for Artemis

use artemis_core::{Context, OsEnv, ProvideCredential};
use artemis_file_read_tokio::TokioFileRead;
use artemis_openapi::DefaultCredentialProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger with debug level
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    // Tries ARTEMIS_APP_KEY/ARTEMIS_APP_SECRET first, then the config file.
    let provider = DefaultCredentialProvider::new();

    println!("Attempting to load credentials from chain...\n");
    match provider.provide_credential(&ctx).await? {
        Some(cred) => println!("\nFound credential: {cred:?}"),
        None => println!("\nNo credential found in any provider"),
    }

    Ok(())
}
