// Issues feed HTTP client.
// Handles request setup, status checking and payload decoding.

use async_trait::async_trait;
use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::config::Config;
use crate::error::{IssuesError, Result};

use super::types::IssuesResponse;

/// Anything that can produce a fresh copy of the issues feed.
#[async_trait]
pub trait IssuesSource: Send + Sync {
    async fn fetch(&self) -> Result<IssuesResponse>;
}

/// reqwest-backed client for the issues endpoint.
pub struct IssuesClient {
    client: Client,
    endpoint: String,
}

impl IssuesClient {
    /// Create a client for the endpoint and timeout in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("issue-desk/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Check response status and convert failures.
    fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(IssuesError::Transport { status })
        }
    }
}

#[async_trait]
impl IssuesSource for IssuesClient {
    async fn fetch(&self) -> Result<IssuesResponse> {
        let response = self.client.get(&self.endpoint).send().await?;
        let response = Self::check_response(response)?;

        let body = response.bytes().await?;
        let payload: IssuesResponse = serde_json::from_slice(&body)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/exec", addr)
    }

    fn client_for(endpoint: String) -> IssuesClient {
        let config = Config {
            endpoint,
            ..Config::default()
        };
        IssuesClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"success":true,"issues":[{"title":"Issue 1","period":"January-March 2025","articleCount":2}]}"#,
        )
        .await;

        let response = client_for(endpoint).fetch().await.unwrap();
        assert!(response.success);
        assert_eq!(response.issues.len(), 1);
        assert_eq!(response.issues[0].article_count, 2);
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_transport_error() {
        let endpoint = serve_once("500 Internal Server Error", "{}").await;

        let err = client_for(endpoint).fetch().await.unwrap_err();
        match err {
            IssuesError::Transport { status } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_does_not_check_success_flag() {
        let endpoint = serve_once("200 OK", r#"{"success":false,"error":"quota"}"#).await;

        let response = client_for(endpoint).fetch().await.unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("quota"));
    }

    #[tokio::test]
    async fn test_fetch_tolerates_null_cells() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"success":true,"issues":[{"title":"Issue 4","period":"April-June 2026","articleCount":null}]}"#,
        )
        .await;

        let response = client_for(endpoint).fetch().await.unwrap();
        assert_eq!(response.issues[0].article_count, 0);
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let endpoint = serve_once("200 OK", "<html>oops</html>").await;

        let err = client_for(endpoint).fetch().await.unwrap_err();
        assert!(matches!(err, IssuesError::Json(_)));
    }
}
