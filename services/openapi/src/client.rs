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

use artemis_core::{Context, Error, Result, Signer};
use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint;
use crate::provide_credential::{DefaultCredentialProvider, StaticCredentialProvider};
use crate::{ApiResponse, Config, Credential, RequestSigner};

/// Client sends signed calls to an Artemis OpenAPI gateway.
///
/// Every call serializes its payload once and the very same bytes are both
/// hashed into the signature and sent as the request body.
///
/// ```no_run
/// use artemis_core::{Context, OsEnv};
/// use artemis_file_read_tokio::TokioFileRead;
/// use artemis_http_send_reqwest::ReqwestHttpSend;
/// use artemis_openapi::{endpoint, Client, Config, Page, PageRequest};
/// use serde_json::Value;
///
/// # async fn example() -> artemis_core::Result<()> {
/// let ctx = Context::new()
///     .with_file_read(TokioFileRead)
///     .with_http_send(ReqwestHttpSend::default())
///     .with_env(OsEnv);
/// let config = Config::new().from_env(&ctx);
/// let client = Client::new(ctx, config);
///
/// let persons: Page<Value> = client
///     .post(endpoint::PERSON_LIST, &PageRequest::default())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    signer: Signer<Credential>,
    base_url: String,
}

impl Client {
    /// Create a new client.
    ///
    /// The credential is taken from `config` when both app key and app secret
    /// are set, then from [`DefaultCredentialProvider`].
    pub fn new(ctx: Context, config: Config) -> Self {
        let mut provider = DefaultCredentialProvider::new();
        if let (Some(app_key), Some(app_secret)) = (&config.app_key, &config.app_secret) {
            provider = provider.push_front(StaticCredentialProvider::new(app_key, app_secret));
        }

        let signer = Signer::new(ctx, provider, RequestSigner::new());
        Self::with_signer(config.base_url(), signer)
    }

    /// Create a client around an existing signer.
    ///
    /// Requests are sent through the signer's context.
    pub fn with_signer(base_url: impl Into<String>, signer: Signer<Credential>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { signer, base_url }
    }

    /// The base url requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign and send `body` as is.
    ///
    /// `path` must start with `/`. It may carry a query string, which is sent
    /// but not signed. The response is returned whatever its status.
    pub async fn call_raw(
        &self,
        method: Method,
        path: &str,
        body: Bytes,
    ) -> Result<http::Response<Bytes>> {
        if !path.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "path must start with '/', got {path:?}"
            )));
        }

        let req = http::Request::builder()
            .method(method)
            .uri(format!("{}{path}", self.base_url))
            .body(body)?;

        let (mut parts, body) = req.into_parts();
        self.signer.sign(&mut parts, &body).await?;
        let req = http::Request::from_parts(parts, body);

        debug!("sending request: {} {}", req.method(), req.uri());
        let resp = self.signer.context().http_send(req).await?;
        debug!("got response status: {}", resp.status());

        Ok(resp)
    }

    /// Call an endpoint with a JSON payload and decode the envelope.
    ///
    /// The envelope is returned even when its code is not a success.
    pub async fn call<P>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
    ) -> Result<ApiResponse<Value>>
    where
        P: Serialize + ?Sized,
    {
        self.request(method, path, payload).await
    }

    /// `POST` a JSON payload and return the `data` of a successful response.
    pub async fn post<T, P>(&self, path: &str, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request::<T, P>(Method::POST, path, payload)
            .await?
            .into_data()
    }

    /// Fetch the platform version.
    ///
    /// A cheap call that checks both connectivity and credential.
    pub async fn version(&self) -> Result<String> {
        #[derive(Deserialize)]
        struct Version {
            version: Option<String>,
        }

        let data: Version = self.post(endpoint::VERSION, &serde_json::json!({})).await?;
        data.version
            .ok_or_else(|| Error::response_invalid("version missing from response"))
    }

    async fn request<T, P>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)
            .map_err(|e| Error::request_invalid("failed to serialize payload").with_source(e))?;

        let resp = self.call_raw(method, path, Bytes::from(body)).await?;
        parse_response(resp)
    }
}

/// Map an http response onto the Artemis envelope.
fn parse_response<T: DeserializeOwned>(resp: http::Response<Bytes>) -> Result<ApiResponse<T>> {
    let status = resp.status();
    let body = resp.into_body();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return Err(Error::credential_denied(format!(
                "request rejected with {status}: {}",
                String::from_utf8_lossy(&body)
            )));
        }
        s if !s.is_success() => {
            return Err(Error::unexpected(format!(
                "request failed with {status}: {}",
                String::from_utf8_lossy(&body)
            )));
        }
        _ => {}
    }

    serde_json::from_slice(&body).map_err(|e| {
        Error::response_invalid(format!(
            "response is not a valid envelope: {}",
            String::from_utf8_lossy(&body)
        ))
        .with_source(e)
    })
}

/// CallApi is the single capability a caller needs to reach the gateway.
///
/// Code that only issues calls can depend on `dyn CallApi` and be tested
/// against a stub.
#[async_trait]
pub trait CallApi: Send + Sync {
    /// Call `path` with `payload` as JSON body.
    async fn call_api(
        &self,
        method: Method,
        path: &str,
        payload: &Value,
    ) -> Result<ApiResponse<Value>>;
}

#[async_trait]
impl CallApi for Client {
    async fn call_api(
        &self,
        method: Method,
        path: &str,
        payload: &Value,
    ) -> Result<ApiResponse<Value>> {
        self.call(method, path, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign;
    use artemis_core::{ErrorKind, HttpSend, StaticEnv};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Answers every request with a fixed response and keeps what it was sent.
    #[derive(Debug, Clone)]
    struct MockHttpSend {
        status: StatusCode,
        body: &'static str,
        requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
    }

    impl MockHttpSend {
        fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                status,
                body,
                requests: Arc::default(),
            }
        }

        fn last_request(&self) -> http::Request<Bytes> {
            self.requests.lock().unwrap().pop().expect("no request sent")
        }
    }

    #[async_trait]
    impl HttpSend for MockHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            self.requests.lock().unwrap().push(req);
            Ok(http::Response::builder()
                .status(self.status)
                .body(Bytes::from_static(self.body.as_bytes()))?)
        }
    }

    fn client(http: MockHttpSend) -> Client {
        let ctx = Context::new().with_http_send(http).with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::new(),
        });
        let config = Config::new()
            .with_app_key("11566257")
            .with_app_secret("DBntId5f4LZPfW1Ik5Yh")
            .with_base_url("https://10.0.0.5/");
        Client::new(ctx, config)
    }

    #[tokio::test]
    async fn test_call_sends_the_bytes_it_signed() -> anyhow::Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, r#"{"code":"0","msg":"success","data":{}}"#);
        let client = client(http.clone());

        let resp = client
            .call(Method::POST, endpoint::VISITOR_APPOINTMENT, &json!({}))
            .await?;
        assert!(resp.is_success());

        let req = http.last_request();
        assert_eq!(req.method(), Method::POST);
        assert_eq!(
            req.uri().to_string(),
            "https://10.0.0.5/artemis/api/visitor/v1/appointment"
        );
        assert_eq!(req.body().as_ref(), b"{}");
        assert_eq!(req.headers()["Content-MD5"], "mZFLkyvTelC5g8XnyQrpOw==");
        assert_eq!(
            req.headers()["X-Ca-Signature"],
            "qay7hCuF9G/YXEnt6eH9IlyziY9mJLl5nyWxWpj8GTM="
        );

        let expected = sign(
            "POST",
            req.body(),
            req.uri().path(),
            "11566257",
            "DBntId5f4LZPfW1Ik5Yh",
        );
        for (name, value) in expected.iter() {
            assert_eq!(req.headers()[name], value, "{name}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_post_returns_data() -> anyhow::Result<()> {
        let http = MockHttpSend::new(
            StatusCode::OK,
            r#"{"code":"0","msg":"success","data":{"appointRecordId":"r1","visitorId":"v1"}}"#,
        );
        let client = client(http);

        let result: crate::AppointmentResult = client
            .post(endpoint::VISITOR_APPOINTMENT, &json!({"visitorName": "A"}))
            .await?;
        assert_eq!(result.appoint_record_id, "r1");
        assert_eq!(result.visitor_id.as_deref(), Some("v1"));

        Ok(())
    }

    #[tokio::test]
    async fn test_post_service_error() {
        let http = MockHttpSend::new(
            StatusCode::OK,
            r#"{"code":"131","msg":"The visitor already exists."}"#,
        );
        let client = client(http);

        let err = client
            .post::<Value, _>(endpoint::VISITOR_APPOINTMENT, &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServiceError);
        assert!(err.is_resource_exists());
    }

    #[tokio::test]
    async fn test_post_delete_without_data() -> anyhow::Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, r#"{"code":"0","msg":"success","data":null}"#);
        let client = client(http.clone());

        let data: Value = client
            .post(endpoint::PERSON_DELETE, &json!({"personId": "p1"}))
            .await?;
        assert_eq!(data, Value::Null);

        client
            .post::<(), _>(endpoint::PERSON_DELETE, &json!({"personId": "p1"}))
            .await?;

        let req = http.last_request();
        assert_eq!(
            req.uri().path(),
            "/artemis/api/resource/v1/person/single/delete"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_post_update_without_data_field() -> anyhow::Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, r#"{"code":"0","msg":"success"}"#);
        let client = client(http);

        let data: Option<Value> = client
            .post(endpoint::VEHICLE_UPDATE, &json!({"vehicleId": "v1"}))
            .await?;
        assert_eq!(data, None);

        let err = client
            .post::<crate::AppointmentResult, _>(endpoint::VISITOR_APPOINTMENT, &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseInvalid);

        Ok(())
    }

    #[tokio::test]
    async fn test_query_is_sent_but_not_signed() -> anyhow::Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, r#"{"code":"0","data":{}}"#);
        let client = client(http.clone());

        client
            .call(Method::POST, "/artemis/api/common/v1/version?lang=en", &json!({}))
            .await?;

        let req = http.last_request();
        assert_eq!(req.uri().query(), Some("lang=en"));
        let expected = sign(
            "POST",
            b"{}",
            endpoint::VERSION,
            "11566257",
            "DBntId5f4LZPfW1Ik5Yh",
        );
        assert_eq!(req.headers()["X-Ca-Signature"], expected.ca_signature.as_str());

        Ok(())
    }

    #[tokio::test]
    async fn test_unauthorized_is_credential_denied() {
        let http = MockHttpSend::new(StatusCode::UNAUTHORIZED, "signature mismatch");
        let client = client(http);

        let err = client
            .call(Method::POST, endpoint::VERSION, &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialDenied);
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_server_error_is_unexpected() {
        let http = MockHttpSend::new(StatusCode::BAD_GATEWAY, "upstream down");
        let client = client(http);

        let err = client
            .call(Method::POST, endpoint::VERSION, &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.message().contains("upstream down"));
    }

    #[tokio::test]
    async fn test_non_json_is_response_invalid() {
        let http = MockHttpSend::new(StatusCode::OK, "<html>login</html>");
        let client = client(http);

        let err = client
            .call(Method::POST, endpoint::VERSION, &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    }

    #[tokio::test]
    async fn test_relative_path_is_rejected() {
        let http = MockHttpSend::new(StatusCode::OK, "{}");
        let client = client(http.clone());

        let err = client
            .call(Method::POST, "artemis/api/common/v1/version", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(http.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_version() -> anyhow::Result<()> {
        let http = MockHttpSend::new(
            StatusCode::OK,
            r#"{"code":"0","msg":"success","data":{"version":"V2.6.0"}}"#,
        );
        let client = client(http);

        assert_eq!(client.version().await?, "V2.6.0");
        Ok(())
    }

    #[tokio::test]
    async fn test_without_credential() {
        let http = MockHttpSend::new(StatusCode::OK, "{}");
        let ctx = Context::new().with_http_send(http.clone()).with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::new(),
        });
        let client = Client::new(ctx, Config::new());

        let err = client.version().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert!(http.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_call_api_trait_object() -> anyhow::Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, r#"{"code":"0","data":{"total":0}}"#);
        let api: Box<dyn CallApi> = Box::new(client(http));

        let resp = api
            .call_api(Method::POST, endpoint::PERSON_LIST, &json!({"pageNo": 1}))
            .await?;
        assert_eq!(resp.data, Some(json!({"total": 0})));

        Ok(())
    }
}
