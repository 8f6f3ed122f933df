use std::fmt::{Debug, Formatter};

/// Username and password sent with every request when both are configured.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from a `username` and `password` pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Settings for a [`Client`]. Every setting is optional.
///
/// The configuration is only validated once it is handed over to [`Client::new`], after which it can no longer be
/// changed.
///
/// # Examples
///
/// ```
/// use existdb::ClientConfig;
///
/// let config = ClientConfig::new()
///     .collection("/apps/mail")
///     .with_credentials("admin", "secret");
/// assert_eq!(Some("/apps/mail"), config.collection_path());
/// assert_eq!("admin", config.credentials().unwrap().username());
/// ```
///
/// [`Client`]: crate::Client
/// [`Client::new`]: crate::Client::new
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    collection: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl ClientConfig {
    /// Creates an empty configuration: the `/db` root collection, no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scopes all requests to a sub-collection of `/db`. The `path` must start with `/`.
    pub fn collection(mut self, path: impl Into<String>) -> Self {
        self.collection = Some(path.into());
        self
    }

    /// Sets the username used for HTTP Basic authentication.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password used for HTTP Basic authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets both the username and the password.
    pub fn with_credentials(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username(username).password(password)
    }

    /// Returns the collection path, treating an empty path as no collection.
    pub fn collection_path(&self) -> Option<&str> {
        self.collection.as_deref().filter(|path| !path.is_empty())
    }

    /// Returns the credentials only if both the username and the password are set and non-empty.
    pub fn credentials(&self) -> Option<Credentials> {
        let username = self.username.as_deref().filter(|username| !username.is_empty())?;
        let password = self.password.as_deref().filter(|password| !password.is_empty())?;

        Some(Credentials::new(username, password))
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("collection", &self.collection)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
