#![cfg(feature = "reqwest")]

use existdb::{Client, ClientConfig, Result};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_document_get_returns_body_verbatim() -> Result<()> {
    let document = "<?xml version=\"1.0\"?>\n<message>\n    <body>Hello</body>\n</message>\n";
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exist/rest/db/mail/inbox/1.xml"))
        .and(header("Accept", "application/xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(document))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri(), ClientConfig::new().collection("/mail"))?;

    assert_eq!(document, client.get("/inbox/1.xml").await?);
    Ok(())
}
