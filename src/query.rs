use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Namespace of the query envelope accepted by the REST interface.
pub const QUERY_NAMESPACE: &str = "http://exist.sourceforge.net/NS/exist";

const NAMESPACE_ATTRIBUTE: &str = "xmlns";

/// Query text together with the attributes of its envelope, ready to be posted with [`Client::query`].
///
/// The envelope always carries the [`QUERY_NAMESPACE`]; an `xmlns` option cannot override it.
///
/// # Examples
///
/// ```
/// use existdb::QueryRequest;
///
/// let request = QueryRequest::new("count(//message)").max(10);
/// assert_eq!(
///     r#"<query xmlns="http://exist.sourceforge.net/NS/exist" max="10"><text>count(//message)</text></query>"#,
///     request.build()
/// );
/// ```
///
/// [`Client::query`]: crate::Client::query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    text: String,
    options: BTreeMap<String, String>,
}

impl QueryRequest {
    /// Creates a request for the XQuery `text` with no extra attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, BTreeMap::new())
    }

    /// Creates a request for the XQuery `text` with the given envelope attributes.
    pub fn with_options(text: impl Into<String>, options: BTreeMap<String, String>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Sets an envelope attribute.
    ///
    /// The `name` must be a valid XML attribute name such as `max` or `session-id`; attributes with other names are
    /// left out of the envelope.
    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Index of the first item to return, starting at 1.
    pub fn start(self, start: usize) -> Self {
        self.option("start", start.to_string())
    }

    /// Maximum number of items to return.
    pub fn max(self, max: usize) -> Self {
        self.option("max", max.to_string())
    }

    /// Whether the server wraps the items into an `exist:result` element.
    pub fn wrap(self, wrap: bool) -> Self {
        self.option("wrap", yes_no(wrap))
    }

    /// Whether the server caches the result for paging through it later.
    pub fn cache(self, cache: bool) -> Self {
        self.option("cache", yes_no(cache))
    }

    /// Returns the XQuery text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the envelope attributes as given, including any ignored `xmlns`.
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Serializes the envelope:
    /// `<query xmlns="http://exist.sourceforge.net/NS/exist" ...><text>...</text></query>`.
    pub fn build(&self) -> String {
        let mut writer = Writer::new(Vec::new());
        if let Err(e) = self.write_to(&mut writer) {
            tracing::error!(error = %e, "failed to serialize query envelope");
        }

        String::from_utf8(writer.into_inner()).unwrap_or_default()
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> quick_xml::Result<()> {
        let mut query = BytesStart::new("query");
        query.push_attribute((NAMESPACE_ATTRIBUTE, QUERY_NAMESPACE));
        for (name, value) in &self.options {
            if name.as_str() == NAMESPACE_ATTRIBUTE {
                continue;
            }
            if !is_xml_name(name) {
                tracing::warn!(name = name.as_str(), "skipped query option with invalid attribute name");
                continue;
            }
            query.push_attribute((name.as_str(), value.as_str()));
        }

        writer.write_event(Event::Start(query))?;
        writer.write_event(Event::Start(BytesStart::new("text")))?;
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(&self.text))))?;
        writer.write_event(Event::End(BytesEnd::new("text")))?;
        writer.write_event(Event::End(BytesEnd::new("query")))?;
        Ok(())
    }
}

impl Display for QueryRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<&str> for QueryRequest {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for QueryRequest {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Simplified XML `Name` production: a letter, `_` or `:` followed by letters, digits,
/// `-`, `.`, `_` or `:`.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
        }
        _ => false,
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
