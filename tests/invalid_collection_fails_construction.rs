#![cfg(feature = "reqwest")]

use existdb::{Client, ClientConfig, ClientError};

#[test]
fn test_invalid_collection_fails_construction() {
    let actual_error = Client::connect("http://localhost", ClientConfig::new().collection("my-collection"))
        .err()
        .expect("Operation must fail");

    assert!(matches!(actual_error, ClientError::Configuration(_)));
}
