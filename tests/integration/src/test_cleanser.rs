//! End-to-end cleanser tests against a live S3-compatible endpoint.

#[cfg(test)]
mod tests {
    use aws_sdk_s3::primitives::ByteStream;
    use storesync_core::{
        Cleanser, CleanserConfig, CleanserError, OUTPUT_KEY, S3ObjectStore, StoreDataValidator,
    };
    use storesync_model::S3Event;

    use crate::{cleanup_bucket, create_test_bucket, s3_client};

    const VALID_DOC: &str =
        r#"{"stores":[{"storeId":"42","storeLocation":"London","storePrefix":"LN"}]}"#;

    fn event_for(bucket: &str, key: &str) -> S3Event {
        serde_json::from_str(&format!(
            r#"{{"Records":[{{"eventName":"ObjectCreated:Put",
                "s3":{{"bucket":{{"name":"{bucket}"}},"object":{{"key":"{key}"}}}}}}]}}"#
        ))
        .expect("event json")
    }

    fn cleanser_for(source: &str, destination: &str) -> Cleanser<S3ObjectStore> {
        let config = CleanserConfig::builder()
            .source_bucket(source.to_owned())
            .destination_bucket(destination.to_owned())
            .build();
        Cleanser::new(
            config,
            S3ObjectStore::new(s3_client()),
            StoreDataValidator::new().expect("schema compiles"),
        )
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_forward_valid_upload_to_destination() {
        let client = s3_client();
        let source = create_test_bucket(&client, "cleanser-src").await;
        let destination = create_test_bucket(&client, "cleanser-dst").await;

        client
            .put_object()
            .bucket(&source)
            .key("stores.json")
            .body(ByteStream::from_static(VALID_DOC.as_bytes()))
            .content_type("application/json")
            .send()
            .await
            .expect("seed upload");

        let cleanser = cleanser_for(&source, &destination);
        cleanser
            .handle(&event_for(&source, "stores.json"))
            .await
            .expect("valid document forwards");

        let resp = client
            .get_object()
            .bucket(&destination)
            .key(OUTPUT_KEY)
            .send()
            .await
            .expect("destination object");
        assert_eq!(resp.content_type(), Some("application/json"));

        let data = resp
            .body
            .collect()
            .await
            .expect("collect body")
            .into_bytes();
        assert_eq!(data.as_ref(), VALID_DOC.as_bytes());

        cleanup_bucket(&client, &source).await;
        cleanup_bucket(&client, &destination).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_non_conforming_upload() {
        let client = s3_client();
        let source = create_test_bucket(&client, "cleanser-badsrc").await;
        let destination = create_test_bucket(&client, "cleanser-baddst").await;

        client
            .put_object()
            .bucket(&source)
            .key("stores.json")
            .body(ByteStream::from_static(
                br#"{"stores":[{"storeId":"12a","storeLocation":"London","storePrefix":"LN"}]}"#,
            ))
            .content_type("application/json")
            .send()
            .await
            .expect("seed upload");

        let cleanser = cleanser_for(&source, &destination);
        let err = cleanser
            .handle(&event_for(&source, "stores.json"))
            .await
            .expect_err("non-digit storeId");
        assert!(matches!(err, CleanserError::Validation { .. }));

        // Nothing was written downstream.
        let get = client
            .get_object()
            .bucket(&destination)
            .key(OUTPUT_KEY)
            .send()
            .await;
        assert!(get.is_err(), "destination must stay empty");

        cleanup_bucket(&client, &source).await;
        cleanup_bucket(&client, &destination).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_fail_fetch_for_missing_upload() {
        let client = s3_client();
        let source = create_test_bucket(&client, "cleanser-nosrc").await;
        let destination = create_test_bucket(&client, "cleanser-nodst").await;

        let cleanser = cleanser_for(&source, &destination);
        let err = cleanser
            .handle(&event_for(&source, "never-uploaded.json"))
            .await
            .expect_err("object missing from source");
        assert!(matches!(err, CleanserError::Fetch { .. }));

        cleanup_bucket(&client, &source).await;
        cleanup_bucket(&client, &destination).await;
    }
}
