#![cfg(feature = "reqwest")]

use existdb::{Client, ClientConfig, ClientError};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_invalid_uri_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri(), ClientConfig::new()).unwrap();

    assert!(matches!(client.put("c/test.xml", "<a/>").await, Err(ClientError::Validation(_))));
    assert!(matches!(client.get("c/test.xml").await, Err(ClientError::Validation(_))));
    assert!(matches!(client.delete("c/test.xml").await, Err(ClientError::Validation(_))));
    assert!(matches!(client.exists("c/test.xml").await, Err(ClientError::Validation(_))));
    assert!(matches!(client.store_query("c/q.xq", "1").await, Err(ClientError::Validation(_))));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
