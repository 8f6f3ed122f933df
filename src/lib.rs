//! A client for the [REST interface](https://exist-db.org/exist/apps/doc/devguide_rest) of the eXist-db XML
//! database.
//!
//! The [`Client`] stores, retrieves and removes documents, checks their existence and runs ad-hoc or stored XQuery.
//! It validates resource URIs before anything is sent and reconciles the status codes of the server into plain
//! outcomes: deleting an absent document succeeds and a missing document does not exist, while any other failure is
//! reported as a [`ClientError`].
//!
//! Requests are sent through a [`Transport`]. The default [`ReqwestTransport`] uses `reqwest`; any other HTTP library
//! can be plugged in by implementing the trait.
//!
//! # Examples
//!
//! ```no_run
//! use existdb::{Client, ClientConfig, Result};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let config = ClientConfig::new().collection("/test").with_credentials("admin", "admin");
//! let client = Client::connect("http://localhost:8080", config)?;
//!
//! client.put("/c/test.xml", "<message><body>Hello</body></message>").await?;
//! let result = client.query(r#"collection("/db/test")//message/body"#).await?;
//! # Ok(())
//! # }
//! ```
#![warn(rust_2018_idioms)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(unused)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]
#![warn(rustdoc::invalid_html_tags)]
#![warn(rustdoc::invalid_rust_codeblocks)]
#![warn(rustdoc::bare_urls)]
mod client;
mod config;
mod errors;
mod query;
pub mod transport;

pub use client::Client;
pub use config::{ClientConfig, Credentials};
pub use errors::{ClientError, TransportError};
pub use query::{QueryRequest, QUERY_NAMESPACE};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::{Method, Request, Response, Transport};

/// A [`Result`] with its [`Err`] variant set to [`ClientError`].
///
/// [`Result`]: std::result::Result
/// [`Err`]: std::result::Result::Err
/// [`ClientError`]: crate::ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
