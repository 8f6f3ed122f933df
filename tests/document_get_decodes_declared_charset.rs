#![cfg(feature = "reqwest")]

use existdb::{Client, ClientConfig, Result};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_document_get_decodes_declared_charset() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exist/rest/db/menu.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"<a>caf\xe9</a>".to_vec(), "application/xml; charset=ISO-8859-1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri(), ClientConfig::new())?;

    assert_eq!("<a>caf\u{e9}</a>", client.get("/menu.xml").await?);
    Ok(())
}
