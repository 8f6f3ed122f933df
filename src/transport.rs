//! The HTTP seam of the [`Client`](crate::Client): request descriptors, responses and the [`Transport`] trait.

use crate::config::Credentials;
use crate::errors::TransportError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// HTTP verbs used by the REST interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Retrieves a resource or executes a stored query.
    Get,
    /// Stores a resource.
    Put,
    /// Executes a query envelope.
    Post,
    /// Removes a resource.
    Delete,
}

impl Method {
    /// Returns the verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes a single HTTP request. A new one is built for every [`Client`] call.
///
/// [`Client`]: crate::Client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Absolute URL of the target resource.
    pub url: String,
    /// HTTP verb.
    pub method: Method,
    /// Header names mapped to values.
    pub headers: BTreeMap<String, String>,
    /// Request payload, if any.
    pub body: Option<String>,
    /// Credentials for HTTP Basic authentication, if configured.
    pub credentials: Option<Credentials>,
}

impl Request {
    pub(crate) fn new(method: Method, url: String) -> Self {
        Self {
            url,
            method,
            headers: BTreeMap::new(),
            body: None,
            credentials: None,
        }
    }

    pub(crate) fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_owned(), value.to_owned());
        self
    }

    pub(crate) fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }
}

/// Outcome of a completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl Response {
    /// Creates a response with the given `status` and `body`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Tells whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends [`Request`]s to the database server.
///
/// Implementations perform exactly one HTTP exchange per call. A completed exchange is returned as [`Response`] even
/// if the status signals an error; [`Err`] is reserved for exchanges that did not complete (refused connection,
/// broken TLS, timeout and such). Retries, timeouts and connection reuse are up to the implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the `request` and waits for the response.
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

/// [`Transport`] backed by [`reqwest::Client`]. Credentials are sent as HTTP Basic authentication.
///
/// # Examples
///
/// ```
/// use existdb::ReqwestTransport;
/// use std::time::Duration;
///
/// let http = reqwest::Client::builder().timeout(Duration::from_secs(10)).build().unwrap();
/// let transport = ReqwestTransport::with_client(http);
/// ```
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[cfg(feature = "reqwest")]
impl ReqwestTransport {
    /// Creates a transport with a default [`reqwest::Client`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that sends requests through a pre-configured `http` client.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[cfg(feature = "reqwest")]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(credentials) = &request.credentials {
            builder = builder.basic_auth(credentials.username(), Some(credentials.password()));
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Method::Get, "GET")]
    #[test_case(Method::Put, "PUT")]
    #[test_case(Method::Post, "POST")]
    #[test_case(Method::Delete, "DELETE")]
    fn test_method_formats_as_verb(method: Method, expected: &str) {
        assert_eq!(expected, method.to_string());
    }

    #[test_case(200, true)]
    #[test_case(201, true)]
    #[test_case(204, true)]
    #[test_case(304, false)]
    #[test_case(401, false)]
    #[test_case(404, false)]
    #[test_case(500, false)]
    fn test_response_success_covers_2xx_only(status: u16, expected: bool) {
        assert_eq!(expected, Response::new(status, "").is_success());
    }

    #[test]
    fn test_request_headers_keep_last_value_per_name() {
        let request = Request::new(Method::Put, "http://localhost/".to_owned())
            .header("Content-Type", "application/xml")
            .header("Content-Type", "application/xquery");

        assert_eq!(1, request.headers.len());
        assert_eq!("application/xquery", request.headers["Content-Type"]);
    }
}
