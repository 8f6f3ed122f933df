#![cfg(feature = "reqwest")]

use existdb::{Client, ClientConfig, Result};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_delete_of_missing_document_succeeds() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/exist/rest/db/doc-that-doesnt-exist"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Document /db/doc-that-doesnt-exist not found"))
        .expect(2)
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri(), ClientConfig::new())?;

    client.delete("/doc-that-doesnt-exist").await?;
    client.delete("/doc-that-doesnt-exist").await?;
    Ok(())
}
