//! Email Client - Outbound Send Endpoint
//!
//! One `POST` per send with a JSON body of exactly three keys:
//!
//! ```text
//! { "receiver_email": "...", "subject": "...", "body_text": "..." }
//! ```
//!
//! Any 2xx is success. Anything else is a rejection whose optional JSON
//! `error` string is passed through to the user.

use std::future::Future;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::draft::Draft;
use crate::error::{Error, Result};

/// Endpoint used when the config file does not name one
pub const DEFAULT_ENDPOINT: &str =
    "https://us-central1-lone-461009.cloudfunctions.net/email-api-dev-sendEmail";

/// Wire payload for the send endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendEmailRequest {
    pub receiver_email: String,
    pub subject: String,
    pub body_text: String,
}

impl From<&Draft> for SendEmailRequest {
    fn from(draft: &Draft) -> Self {
        Self {
            receiver_email: draft.recipient_email.clone(),
            subject: draft.subject.clone(),
            body_text: draft.body_text.clone(),
        }
    }
}

/// Error body the endpoint may return alongside a non-2xx status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Something that can deliver a [`SendEmailRequest`]
pub trait EmailTransport {
    fn send(&self, request: &SendEmailRequest) -> impl Future<Output = Result<()>> + Send;
}

/// Parse and check an endpoint URL; only `http` and `https` are accepted
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::Invalid {
        message: format!("Invalid endpoint URL {raw:?}: {e}"),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::Invalid {
            message: format!("Unsupported endpoint scheme {scheme:?}"),
        }),
    }
}

/// [`DEFAULT_ENDPOINT`] as a URL
pub fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

/// Turn a settled HTTP exchange into a send outcome
pub fn interpret_response(status: u16, body: &[u8]) -> Result<()> {
    let success = (200..300).contains(&status);

    if success {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
        return serde_json::from_slice::<serde_json::Value>(body)
            .map(|_| ())
            .map_err(|source| Error::MalformedResponse { status, source });
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error);

    Err(Error::Rejected { status, message })
}

/// reqwest-backed client for the send endpoint
#[derive(Debug, Clone)]
pub struct EmailClient {
    http: Client,
    endpoint: Url,
}

impl EmailClient {
    /// Create a client for the given endpoint.
    ///
    /// No request timeout is set; the transport's own behavior applies.
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl EmailTransport for EmailClient {
    async fn send(&self, request: &SendEmailRequest) -> Result<()> {
        debug!(endpoint = %self.endpoint, "Posting email");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        let outcome = interpret_response(status, &body);
        if let Err(e) = &outcome {
            warn!(status, error = %e, "Send endpoint reported failure");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one connection, capture the raw request, answer with `status` and `body`
    async fn one_shot_server(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let header_end = loop {
                let n = socket.read(&mut chunk).await.expect("read");
                assert!(n > 0, "client closed before headers were complete");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);

            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.expect("read body");
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&buf).into_owned()
        });

        let url = Url::parse(&format!("http://{addr}/send")).expect("url");
        (url, handle)
    }

    fn sample_request() -> SendEmailRequest {
        SendEmailRequest::from(&Draft::new("a@b.com", "Hi", "Hello"))
    }

    fn request_body(raw: &str) -> serde_json::Value {
        let (_, body) = raw.split_once("\r\n\r\n").expect("body separator");
        serde_json::from_str(body).expect("json body")
    }

    #[test]
    fn test_payload_uses_wire_names() {
        let value = serde_json::to_value(sample_request()).expect("serialize");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 3);
        assert_eq!(object["receiver_email"], "a@b.com");
        assert_eq!(object["subject"], "Hi");
        assert_eq!(object["body_text"], "Hello");
    }

    #[test]
    fn test_interpret_success_bodies() {
        assert!(interpret_response(200, b"").is_ok());
        assert!(interpret_response(204, b"  \n").is_ok());
        assert!(interpret_response(200, br#"{"message":"Email sent successfully"}"#).is_ok());
        assert!(matches!(
            interpret_response(200, b"<html>oops</html>"),
            Err(Error::MalformedResponse { status: 200, .. })
        ));
    }

    #[test]
    fn test_interpret_failure_bodies() {
        let err = interpret_response(400, br#"{"error":"quota exceeded"}"#).unwrap_err();
        assert_eq!(err.user_message(), "quota exceeded");

        let err = interpret_response(500, br#"{"message":"nope"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Failed to send email. Please try again.");

        let err = interpret_response(502, b"Bad Gateway").unwrap_err();
        assert!(matches!(err, Error::Rejected { status: 502, message: None }));
    }

    #[test]
    fn test_parse_endpoint() {
        assert!(parse_endpoint(DEFAULT_ENDPOINT).is_ok());
        assert!(parse_endpoint("  http://localhost:3000/send ").is_ok());
        assert!(parse_endpoint("ftp://example.com/send").is_err());
        assert!(parse_endpoint("not a url").is_err());
    }

    #[tokio::test]
    async fn test_send_posts_json_payload() {
        let (url, server) = one_shot_server("200 OK", r#"{"message":"Email sent successfully"}"#).await;
        let client = EmailClient::new(url);

        client.send(&sample_request()).await.expect("send succeeds");

        let raw = server.await.expect("server task");
        assert!(raw.starts_with("POST /send HTTP/1.1\r\n"));
        assert!(raw.to_lowercase().contains("content-type: application/json"));
        assert_eq!(
            request_body(&raw),
            serde_json::json!({
                "receiver_email": "a@b.com",
                "subject": "Hi",
                "body_text": "Hello",
            })
        );
    }

    #[tokio::test]
    async fn test_send_surfaces_server_error_text() {
        let (url, server) = one_shot_server("429 Too Many Requests", r#"{"error":"quota exceeded"}"#).await;
        let client = EmailClient::new(url);

        let err = client.send(&sample_request()).await.unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.user_message(), "quota exceeded");
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn test_send_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = EmailClient::new(Url::parse(&format!("http://{addr}/send")).expect("url"));
        let err = client.send(&sample_request()).await.unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
        assert_eq!(err.user_message(), "Failed to send email. Please try again.");
    }
}
