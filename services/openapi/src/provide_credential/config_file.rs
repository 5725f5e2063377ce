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

use crate::config::ConfigFile;
use crate::constants::{ARTEMIS_CONFIG_FILE, DEFAULT_CONFIG_FILE};
use crate::Credential;
use artemis_core::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use log::debug;

/// ConfigFileCredentialProvider loads the credential from a TOML file.
///
/// The file is looked up at, in order:
/// - the path given by [`ConfigFileCredentialProvider::with_path`]
/// - env value: `ARTEMIS_CONFIG_FILE`
/// - `~/.artemis/config.toml`
///
/// A missing file yields no credential. A file that is not valid UTF-8 or not
/// valid TOML is an error.
#[derive(Debug, Default, Clone)]
pub struct ConfigFileCredentialProvider {
    path: Option<String>,
}

impl ConfigFileCredentialProvider {
    /// Create a new ConfigFileCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the credential from `path` instead of the default location.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for ConfigFileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => ctx
                .env_var(ARTEMIS_CONFIG_FILE)
                .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string()),
        };

        let Some(file) = ConfigFile::load(ctx, &path).await? else {
            return Ok(None);
        };

        match (file.app_key, file.app_secret) {
            (Some(key), Some(secret)) => {
                debug!("loading credential from config file {path}");
                Ok(Some(Credential::new(key, secret)))
            }
            _ => {
                debug!("incomplete credential in config file {path}, skipping");
                Ok(None)
            }
        }
    }
}
