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

// Env values used by artemis.
pub const ARTEMIS_APP_KEY: &str = "ARTEMIS_APP_KEY";
pub const ARTEMIS_APP_SECRET: &str = "ARTEMIS_APP_SECRET";
pub const ARTEMIS_BASE_URL: &str = "ARTEMIS_BASE_URL";
pub const ARTEMIS_CONFIG_FILE: &str = "ARTEMIS_CONFIG_FILE";

pub const DEFAULT_BASE_URL: &str = "https://127.0.0.1";
pub const DEFAULT_CONFIG_FILE: &str = "~/.artemis/config.toml";

// Fixed values bound into every signature.
pub const ACCEPT: &str = "application/json";
pub const CONTENT_TYPE: &str = "application/json;charset=UTF-8";
pub const SIGNATURE_HEADERS: &str = "x-ca-key";

// Headers
pub const CONTENT_MD5: &str = "content-md5";
pub const X_CA_KEY: &str = "x-ca-key";
pub const X_CA_SIGNATURE_HEADERS: &str = "x-ca-signature-headers";
pub const X_CA_SIGNATURE: &str = "x-ca-signature";
