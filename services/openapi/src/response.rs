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

use artemis_core::hash::base64_decode;
use artemis_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Code returned in the envelope when the call succeeded.
pub const SUCCESS: &str = "0";

/// Code returned when the resource to create already exists.
///
/// See [`Error::is_resource_exists`].
pub const RESOURCE_EXISTS: &str = "131";

/// The JSON envelope every Artemis endpoint answers with.
///
/// ```json
/// {"code": "0", "msg": "success", "data": {...}}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    /// Vendor result code, `"0"` on success.
    #[serde(deserialize_with = "deserialize_code")]
    pub code: String,
    /// Human readable message.
    #[serde(default)]
    pub msg: Option<String>,
    /// Payload, absent on most failures.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Whether the service reported success.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS
    }

    /// Turn this response into the error it represents.
    pub fn into_error(self) -> Error {
        let msg = self.msg.unwrap_or_else(|| "unknown error".to_string());
        Error::service_error(self.code, msg)
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Take the payload out of a successful response.
    ///
    /// A non-success code becomes [`ErrorKind::ServiceError`] carrying the
    /// vendor code. Delete and update calls succeed with `data: null` or no
    /// `data` at all: the payload is then read from `null`, which works for
    /// `()`, `Option<_>` and `serde_json::Value`. Other types fail with
    /// [`ErrorKind::ResponseInvalid`].
    ///
    /// [`ErrorKind::ServiceError`]: artemis_core::ErrorKind::ServiceError
    /// [`ErrorKind::ResponseInvalid`]: artemis_core::ErrorKind::ResponseInvalid
    pub fn into_data(self) -> Result<T> {
        if !self.is_success() {
            return Err(self.into_error());
        }

        match self.data {
            Some(data) => Ok(data),
            None => T::deserialize(serde_json::Value::Null).map_err(|e| {
                Error::response_invalid("response succeeded without data").with_source(e)
            }),
        }
    }
}

/// Accept the code either as a string or as a number.
fn deserialize_code<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Str(String),
        Int(i64),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Str(v) => v,
        Code::Int(v) => v.to_string(),
    })
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Total number of records across all pages.
    #[serde(default)]
    pub total: u64,
    /// 1-based page number.
    #[serde(default)]
    pub page_no: u32,
    /// Records per page.
    #[serde(default)]
    pub page_size: u32,
    /// Records of this page.
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

/// Paging parameters accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number.
    pub page_no: u32,
    /// Records per page.
    pub page_size: u32,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page_no: u32, page_size: u32) -> Self {
        Self { page_no, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 100)
    }
}

/// Result of registering a visitor appointment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResult {
    /// Id of the appointment record, used to cancel or check out.
    pub appoint_record_id: String,
    /// Id of the visitor.
    #[serde(default)]
    pub visitor_id: Option<String>,
    /// Base64 encoded PNG of the visitor QR code.
    #[serde(default)]
    pub qr_code_image: Option<String>,
}

impl AppointmentResult {
    /// Decode the QR code image, if the service returned one.
    ///
    /// Line breaks inside the base64 text are ignored.
    pub fn qr_code_png(&self) -> Result<Option<Vec<u8>>> {
        let Some(image) = &self.qr_code_image else {
            return Ok(None);
        };

        let image: String = image.chars().filter(|c| !c.is_whitespace()).collect();
        if image.is_empty() {
            return Ok(None);
        }
        base64_decode(&image).map(Some)
    }
}
