use crate::config::{ClientConfig, Credentials};
use crate::query::QueryRequest;
use crate::transport::{Method, Request, Response, Transport};
use crate::{ClientError, Result};
#[cfg(feature = "reqwest")]
use crate::transport::ReqwestTransport;

/// Path under which the REST interface serves the `/db` root collection.
const REST_PATH: &str = "/exist/rest/db";

const CONTENT_TYPE: &str = "Content-Type";
const ACCEPT: &str = "Accept";
const XML: &str = "application/xml";
const XQUERY: &str = "application/xquery";

/// Represents an interface to the [REST interface](https://exist-db.org/exist/apps/doc/devguide_rest) of an eXist-db
/// server. Its main purpose is to store, retrieve and remove documents and to run XQuery.
///
/// Every resource URI is relative to the collection the client was configured with and must start with `/`. Each
/// operation sends exactly one request through the [`Transport`] and holds no state between calls, so a client can be
/// shared across tasks. Operations are not ordered relative to each other; await one before starting a dependent one.
///
/// # Examples
///
/// ```no_run
/// # use existdb::{Client, ClientConfig, Result};
/// # #[tokio::main]
/// # async fn main() -> Result<()> {
/// let config = ClientConfig::new().collection("/mail").with_credentials("admin", "admin");
/// let client = Client::connect("http://localhost:8080", config)?;
///
/// client.put("/inbox/1.xml", "<message><body>Hi</body></message>").await?;
/// assert!(client.exists("/inbox/1.xml").await?);
///
/// let result = client.query(r#"collection("/db/mail")//message/body"#).await?;
/// println!("{}", result);
///
/// client.delete("/inbox/1.xml").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T>
where
    T: Transport,
{
    root: String,
    credentials: Option<Credentials>,
    transport: T,
}

#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
    /// Creates a client for the server at `root_url` that sends requests using a default [`ReqwestTransport`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use existdb::{Client, ClientConfig, Result};
    /// # fn main() -> Result<()> {
    /// let client = Client::connect("http://localhost:8080", ClientConfig::new())?;
    /// assert_eq!("http://localhost:8080/exist/rest/db", client.root());
    /// # Ok(())
    /// # }
    /// ```
    pub fn connect(root_url: &str, config: ClientConfig) -> Result<Client<ReqwestTransport>> {
        Client::new(root_url, config, ReqwestTransport::new())
    }
}

impl<T> Client<T>
where
    T: Transport,
{
    /// Returns a new client for the server at `root_url` that sends its requests through `transport`.
    ///
    /// Fails with [`ClientError::Configuration`] if the configured collection path does not start with `/`.
    ///
    /// Typically, you only need to use this method when using a custom transport. It is used heavily in tests, for
    /// example. For regular usage, refer to the [`Client::connect`] method.
    pub fn new(root_url: &str, config: ClientConfig, transport: T) -> Result<Self> {
        let collection = config.collection_path().unwrap_or("");
        if !collection.is_empty() && !collection.starts_with('/') {
            return Err(ClientError::Configuration(format!(
                "collection '{}' must start with '/'",
                collection
            )));
        }

        Ok(Self {
            root: format!("{}{}{}", root_url.trim_end_matches('/'), REST_PATH, collection),
            credentials: config.credentials(),
            transport,
        })
    }

    /// Returns the effective root URL every resource URI is appended to.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Stores the XML `document` under `uri`, replacing any existing document.
    pub async fn put(&self, uri: &str, document: impl Into<String>) -> Result<Response> {
        let url = self.url(uri)?;
        let request = Request::new(Method::Put, url)
            .header(CONTENT_TYPE, XML)
            .body(document.into());

        self.send(request).await
    }

    /// Retrieves the document stored under `uri` and returns its body verbatim.
    pub async fn get(&self, uri: &str) -> Result<String> {
        let url = self.url(uri)?;
        let request = Request::new(Method::Get, url).header(ACCEPT, XML);

        Ok(self.send(request).await?.body)
    }

    /// Removes the document stored under `uri`.
    ///
    /// Removing a document that does not exist succeeds, so the call can be repeated safely.
    pub async fn delete(&self, uri: &str) -> Result<()> {
        let url = self.url(uri)?;

        match self.send(Request::new(Method::Delete, url)).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                tracing::debug!(uri, "resource already absent");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Tells whether a document is stored under `uri`.
    ///
    /// Only a `404` answer means `false`. Every other failure, including a rejected authentication, is returned as
    /// an error.
    pub async fn exists(&self, uri: &str) -> Result<bool> {
        let url = self.url(uri)?;

        match self.send(Request::new(Method::Get, url)).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => {
                tracing::debug!(uri, "resource not found");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Runs an ad-hoc XQuery against the configured collection and returns the raw result.
    ///
    /// Accepts the query text itself or a [`QueryRequest`] carrying envelope options.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use existdb::{Client, ClientConfig, QueryRequest, Result};
    /// # #[tokio::main]
    /// # async fn main() -> Result<()> {
    /// let client = Client::connect("http://localhost:8080", ClientConfig::new())?;
    ///
    /// let all = client.query("//message/body").await?;
    /// let page = client.query(QueryRequest::new("//message/body").start(11).max(10)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query(&self, query: impl Into<QueryRequest>) -> Result<String> {
        let request = Request::new(Method::Post, self.root.clone())
            .header(CONTENT_TYPE, XML)
            .body(query.into().build());

        Ok(self.send(request).await?.body)
    }

    /// Stores the XQuery `query` under `uri` so that it can be run with [`Client::execute_stored_query`].
    pub async fn store_query(&self, uri: &str, query: impl Into<String>) -> Result<Response> {
        let url = self.url(uri)?;
        let request = Request::new(Method::Put, url)
            .header(CONTENT_TYPE, XQUERY)
            .body(query.into());

        self.send(request).await
    }

    /// Runs the XQuery stored under `uri` and returns the raw result.
    ///
    /// The server executes a stored query whenever it is retrieved, so this is the same request as [`Client::get`].
    pub async fn execute_stored_query(&self, uri: &str) -> Result<String> {
        self.get(uri).await
    }

    /// Resolves `uri` against the effective root, rejecting URIs without the leading `/`.
    fn url(&self, uri: &str) -> Result<String> {
        if !uri.starts_with('/') {
            tracing::warn!(uri, "rejected resource uri without leading '/'");
            return Err(ClientError::Validation(format!("uri '{}' must start with '/'", uri)));
        }

        Ok(format!("{}{}", self.root, uri))
    }

    /// Attaches the credentials, sends the request and turns non-success statuses into [`ClientError::Status`].
    async fn send(&self, request: Request) -> Result<Response> {
        let request = request.credentials(self.credentials.clone());
        let method = request.method;
        tracing::debug!(%method, url = %request.url, "sending request");

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            tracing::debug!(%method, status = response.status, "request failed");
            Err(ClientError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }
}
