use std::error;
use std::fmt::{Display, Formatter};

/// Failure reported by a [`Transport`] when no HTTP exchange completed, e.g. the connection was refused.
///
/// [`Transport`]: crate::Transport
pub type TransportError = Box<dyn error::Error + Send + Sync>;

/// The error type for the operations of the [`Client`].
///
/// Local errors ([`Configuration`], [`Validation`]) are raised before anything is sent. Remote errors either carry
/// the HTTP status the database answered with ([`Status`]) or wrap the failure of the transport itself
/// ([`Transport`]).
///
/// [`Client`]: crate::Client
/// [`Configuration`]: ClientError::Configuration
/// [`Validation`]: ClientError::Validation
/// [`Status`]: ClientError::Status
/// [`Transport`]: ClientError::Transport
#[derive(Debug)]
pub enum ClientError {
    /// The client configuration is invalid, e.g. the collection path lacks its leading `/`.
    Configuration(String),
    /// The resource URI passed to an operation is invalid. Nothing has been sent.
    Validation(String),
    /// The request could not be exchanged with the server at all.
    Transport(TransportError),
    /// The server answered with a non-success status.
    Status {
        /// HTTP status code, e.g. 401 or 404.
        status: u16,
        /// Response body as returned by the server.
        body: String,
    },
}

impl ClientError {
    /// Returns the HTTP status code if the server answered, [`None`] for local and transport errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Tells whether the server reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(message) => write!(f, "invalid configuration: {}", message),
            Self::Validation(message) => write!(f, "invalid argument: {}", message),
            Self::Transport(e) => e.fmt(f),
            Self::Status { status, body } if body.is_empty() => write!(f, "server responded with status {}", status),
            Self::Status { status, body } => write!(f, "server responded with status {}: {}", status, body),
        }
    }
}

impl error::Error for ClientError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        ClientError::Transport(err)
    }
}
