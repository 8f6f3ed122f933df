#![cfg(feature = "reqwest")]

use existdb::{Client, ClientConfig, Result};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADMIN_AUTH: &str = "Basic YWRtaW46YWRtaW4=";

#[tokio::test]
async fn test_document_put_then_exists_succeeds() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/exist/rest/db/c/test.xml"))
        .and(header("Content-Type", "application/xml"))
        .and(header("Authorization", ADMIN_AUTH))
        .and(body_string("<message><body>Hello</body></message>"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/exist/rest/db/c/test.xml"))
        .and(header("Authorization", ADMIN_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<message><body>Hello</body></message>"))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new().with_credentials("admin", "admin");
    let client = Client::connect(&server.uri(), config)?;

    let response = client.put("/c/test.xml", "<message><body>Hello</body></message>").await?;
    assert_eq!(201, response.status);
    assert!(client.exists("/c/test.xml").await?);
    Ok(())
}
