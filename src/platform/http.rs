// ABOUTME: HTTP client for the compute platform's REST control plane.
// ABOUTME: Maps HTTP fault codes onto the closed PlatformError taxonomy.

use super::error::PlatformError;
use super::sealed::Sealed;
use super::traits::{AliasOps, FunctionOps};
use super::types::{AliasTarget, CreateFunction, FunctionState, FunctionStatus, PublishedVersion};
use crate::types::{AliasName, FunctionArn, FunctionName, VersionId};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{Method, StatusCode};
use hyper_util::rt::TokioIo;
use serde::{Deserialize, Serialize};
use tokio::net::TcpStream;

/// Client for the platform's HTTP control plane.
///
/// One connection per request; every call is a blocking await from the
/// orchestrator's point of view.
#[derive(Debug)]
pub struct HttpPlatform {
    host: String,
    port: u16,
}

impl Sealed for HttpPlatform {}

impl HttpPlatform {
    /// Create a client for an endpoint of the form `http://host:port` or
    /// `host:port` (port defaults to 80).
    pub fn new(endpoint: &str) -> Result<Self, PlatformError> {
        if endpoint.starts_with("https://") {
            return Err(PlatformError::Unavailable {
                message: format!("unsupported platform endpoint: {endpoint}"),
            });
        }

        let trimmed = endpoint
            .strip_prefix("http://")
            .unwrap_or(endpoint)
            .trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(PlatformError::Unavailable {
                message: format!("unsupported platform endpoint: {endpoint}"),
            });
        }

        let (host, port) = match trimmed.rsplit_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| PlatformError::Unavailable {
                    message: format!("invalid port in platform endpoint: {endpoint}"),
                })?;
                (host.to_string(), port)
            }
            None => (trimmed.to_string(), 80),
        };

        if host.is_empty() {
            return Err(PlatformError::Unavailable {
                message: format!("missing host in platform endpoint: {endpoint}"),
            });
        }

        Ok(Self { host, port })
    }

    async fn request(
        &self,
        method: Method,
        path: String,
        body: Option<Vec<u8>>,
    ) -> Result<(StatusCode, Bytes), PlatformError> {
        let stream = TcpStream::connect((self.host.as_str(), self.port))
            .await
            .map_err(|e| PlatformError::Unavailable {
                message: format!("failed to connect to {}:{}: {}", self.host, self.port, e),
            })?;

        let io = TokioIo::new(stream);
        let (mut sender, conn) = hyper::client::conn::http1::handshake(io).await.map_err(|e| {
            PlatformError::Unavailable {
                message: format!("HTTP handshake failed: {e}"),
            }
        })?;

        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("platform connection error: {}", e);
            }
        });

        let mut builder = hyper::Request::builder()
            .method(method)
            .uri(path.as_str())
            .header("Host", format!("{}:{}", self.host, self.port));
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let req = builder
            .body(Full::new(body.map(Bytes::from).unwrap_or_default()))
            .map_err(|e| PlatformError::Rejected {
                message: format!("failed to build request: {e}"),
            })?;

        let resp = sender
            .send_request(req)
            .await
            .map_err(|e| PlatformError::Unavailable {
                message: format!("request failed: {e}"),
            })?;

        let status = resp.status();
        let body = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| PlatformError::Unavailable {
                message: format!("failed to read response: {e}"),
            })?
            .to_bytes();

        Ok((status, body))
    }

    /// Map the response status onto the error taxonomy; 409 is the only
    /// structured error the orchestrator interprets.
    fn check(status: StatusCode, body: Bytes) -> Result<Bytes, PlatformError> {
        if status.is_success() {
            return Ok(body);
        }

        let message = error_message(&body, status);
        match status {
            StatusCode::CONFLICT => Err(PlatformError::AlreadyExists { message }),
            StatusCode::NOT_FOUND => Err(PlatformError::NotFound { message }),
            _ => Err(PlatformError::Rejected { message }),
        }
    }

    fn parse<T: for<'de> Deserialize<'de>>(body: &Bytes) -> Result<T, PlatformError> {
        serde_json::from_slice(body).map_err(|e| PlatformError::Rejected {
            message: format!("malformed platform response: {e}"),
        })
    }
}

/// Prefer the platform's structured message; fall back to the raw body.
fn error_message(body: &Bytes, status: StatusCode) -> String {
    if let Ok(err) = serde_json::from_slice::<ErrorBody>(body) {
        return err.message;
    }
    let text = String::from_utf8_lossy(body);
    if text.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        text.into_owned()
    }
}

#[async_trait]
impl FunctionOps for HttpPlatform {
    async fn create_function(
        &self,
        request: &CreateFunction,
    ) -> Result<PublishedVersion, PlatformError> {
        let body = serde_json::to_vec(&CreateFunctionBody {
            function_name: request.name.as_str(),
            runtime: &request.runtime,
            role: &request.role,
            handler: &request.handler,
            description: &request.description,
            code: BASE64.encode(&request.code),
            publish: request.publish,
        })
        .map_err(|e| PlatformError::Rejected {
            message: format!("failed to encode request: {e}"),
        })?;

        let (status, resp) = self
            .request(Method::POST, "/functions".to_string(), Some(body))
            .await?;
        let resp: FunctionResponse = Self::parse(&Self::check(status, resp)?)?;
        Ok(resp.into_published())
    }

    async fn get_function(&self, name: &FunctionName) -> Result<FunctionStatus, PlatformError> {
        let path = format!("/functions/{}", urlencoding::encode(name.as_str()));
        let (status, resp) = self.request(Method::GET, path, None).await?;
        let resp: FunctionResponse = Self::parse(&Self::check(status, resp)?)?;
        Ok(resp.into_status())
    }

    async fn update_function_code(
        &self,
        name: &FunctionName,
        code: Bytes,
        publish: bool,
    ) -> Result<PublishedVersion, PlatformError> {
        let body = serde_json::to_vec(&UpdateCodeBody {
            code: BASE64.encode(&code),
            publish,
        })
        .map_err(|e| PlatformError::Rejected {
            message: format!("failed to encode request: {e}"),
        })?;

        let path = format!("/functions/{}/code", urlencoding::encode(name.as_str()));
        let (status, resp) = self.request(Method::PUT, path, Some(body)).await?;
        let resp: FunctionResponse = Self::parse(&Self::check(status, resp)?)?;
        Ok(resp.into_published())
    }
}

#[async_trait]
impl AliasOps for HttpPlatform {
    async fn create_alias(
        &self,
        function: &FunctionName,
        alias: &AliasName,
        version: &VersionId,
        description: &str,
    ) -> Result<(), PlatformError> {
        let body = serde_json::to_vec(&AliasBody {
            name: Some(alias.as_str()),
            function_version: version.as_str(),
            description,
        })
        .map_err(|e| PlatformError::Rejected {
            message: format!("failed to encode request: {e}"),
        })?;

        let path = format!("/functions/{}/aliases", urlencoding::encode(function.as_str()));
        let (status, resp) = self.request(Method::POST, path, Some(body)).await?;
        Self::check(status, resp)?;
        Ok(())
    }

    async fn update_alias(
        &self,
        function: &FunctionName,
        alias: &AliasName,
        version: &VersionId,
        description: &str,
    ) -> Result<(), PlatformError> {
        let body = serde_json::to_vec(&AliasBody {
            name: None,
            function_version: version.as_str(),
            description,
        })
        .map_err(|e| PlatformError::Rejected {
            message: format!("failed to encode request: {e}"),
        })?;

        let path = format!(
            "/functions/{}/aliases/{}",
            urlencoding::encode(function.as_str()),
            urlencoding::encode(alias.as_str())
        );
        let (status, resp) = self.request(Method::PUT, path, Some(body)).await?;
        Self::check(status, resp)?;
        Ok(())
    }

    async fn get_alias(
        &self,
        function: &FunctionName,
        alias: &AliasName,
    ) -> Result<AliasTarget, PlatformError> {
        let path = format!(
            "/functions/{}/aliases/{}",
            urlencoding::encode(function.as_str()),
            urlencoding::encode(alias.as_str())
        );
        let (status, resp) = self.request(Method::GET, path, None).await?;
        let resp: AliasResponse = Self::parse(&Self::check(status, resp)?)?;
        Ok(AliasTarget {
            version: VersionId::new(resp.function_version),
            description: resp.description,
        })
    }
}

// Wire bodies. snake_case field names match the control plane's JSON schema.

#[derive(Serialize)]
struct CreateFunctionBody<'a> {
    function_name: &'a str,
    runtime: &'a str,
    role: &'a str,
    handler: &'a str,
    description: &'a str,
    code: String,
    publish: bool,
}

#[derive(Serialize)]
struct UpdateCodeBody {
    code: String,
    publish: bool,
}

#[derive(Serialize)]
struct AliasBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    function_version: &'a str,
    description: &'a str,
}

#[derive(Deserialize)]
struct FunctionResponse {
    version: String,
    #[serde(default)]
    arn: Option<String>,
    #[serde(default)]
    state: String,
    #[serde(default)]
    state_reason: Option<String>,
}

impl FunctionResponse {
    fn into_published(self) -> PublishedVersion {
        PublishedVersion {
            version: VersionId::new(self.version),
            arn: self.arn.map(FunctionArn::new),
        }
    }

    fn into_status(self) -> FunctionStatus {
        let state = FunctionState::from_wire(&self.state);
        let raw_state = if self.state.is_empty() {
            state.to_string()
        } else {
            self.state
        };
        FunctionStatus {
            version: VersionId::new(self.version),
            state,
            raw_state,
            reason: self.state_reason,
            arn: self.arn.map(FunctionArn::new),
        }
    }
}

#[derive(Deserialize)]
struct AliasResponse {
    function_version: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
