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

use std::fmt::{Debug, Formatter};

use artemis_core::{utils::Redact, Context, Error, ErrorKind, Result};
use log::{debug, warn};
use serde::Deserialize;

use crate::constants::*;

/// Config carries all the configuration for the Artemis OpenAPI client.
#[derive(Clone, Default)]
pub struct Config {
    /// `app_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ARTEMIS_APP_KEY`]
    pub app_key: Option<String>,
    /// `app_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ARTEMIS_APP_SECRET`]
    pub app_secret: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ARTEMIS_BASE_URL`]
    /// - default to `https://127.0.0.1`
    pub base_url: Option<String>,
    /// `config_file` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ARTEMIS_CONFIG_FILE`]
    /// - default to `~/.artemis/config.toml`
    pub config_file: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set app_key
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Set app_secret
    pub fn with_app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Set base_url, e.g. `https://10.0.0.5:443`
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set config_file
    pub fn with_config_file(mut self, config_file: impl Into<String>) -> Self {
        self.config_file = Some(config_file.into());
        self
    }

    /// Load config from env.
    ///
    /// Values already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ARTEMIS_APP_KEY) {
            self.app_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ARTEMIS_APP_SECRET) {
            self.app_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ARTEMIS_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ARTEMIS_CONFIG_FILE) {
            self.config_file.get_or_insert(v);
        }

        self
    }

    /// Load config from the credential file.
    ///
    /// Values already set are kept. A missing or unreadable file leaves the
    /// config untouched, while a file that is not valid TOML is an error.
    pub async fn from_config_file(mut self, ctx: &Context) -> Result<Self> {
        let Some(file) = ConfigFile::load(ctx, self.config_file()).await? else {
            return Ok(self);
        };

        if let Some(v) = file.app_key {
            self.app_key.get_or_insert(v);
        }
        if let Some(v) = file.app_secret {
            self.app_secret.get_or_insert(v);
        }
        if let Some(v) = file.base_url {
            self.base_url.get_or_insert(v);
        }

        Ok(self)
    }

    /// The base url requests are sent to, without trailing `/`.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// The path of the credential file, `~` not expanded.
    pub fn config_file(&self) -> &str {
        self.config_file.as_deref().unwrap_or(DEFAULT_CONFIG_FILE)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_key", &self.app_key.as_ref().map(Redact::from))
            .field("app_secret", &self.app_secret.as_ref().map(Redact::from))
            .field("base_url", &self.base_url)
            .field("config_file", &self.config_file)
            .finish()
    }
}

/// Content of the credential file.
///
/// ```toml
/// app_key = "11566257"
/// app_secret = "..."
/// base_url = "https://10.0.0.5"
/// ```
#[derive(Clone, Default, Deserialize)]
pub(crate) struct ConfigFile {
    pub app_key: Option<String>,
    pub app_secret: Option<String>,
    pub base_url: Option<String>,
}

impl ConfigFile {
    /// Read and parse the file at `path`, expanding a leading `~`.
    ///
    /// Returns `None` if the path can't be resolved or the file can't be read.
    /// Content that is not UTF-8 or not TOML is [`ErrorKind::ConfigInvalid`].
    pub(crate) async fn load(ctx: &Context, path: &str) -> Result<Option<Self>> {
        let Some(path) = ctx.expand_home_dir(path) else {
            debug!("home dir not found, skip loading config file {path}");
            return Ok(None);
        };

        let content = match ctx.file_read_as_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::ConfigInvalid => return Err(err),
            Err(err) if is_not_found(&err) => {
                debug!("config file {path} not found");
                return Ok(None);
            }
            Err(err) => {
                warn!("config file {path} not loaded: {err:?}");
                return Ok(None);
            }
        };

        let file = toml::from_str(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse config file {path}")).with_source(e)
        })?;
        Ok(Some(file))
    }
}

/// Whether `err` was caused by a file that does not exist.
fn is_not_found(err: &Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(e) = source {
        if let Some(e) = e.downcast_ref::<std::io::Error>() {
            return e.kind() == std::io::ErrorKind::NotFound;
        }
        source = e.source();
    }
    false
}
