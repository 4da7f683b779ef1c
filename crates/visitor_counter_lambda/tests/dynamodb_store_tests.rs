use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_types::body::SdkBody;
use serde_json::{json, Value};
use visitor_counter_core::contract::CounterKey;
use visitor_counter_core::error::StoreError;
use visitor_counter_lambda::adapters::counter_store::CounterStore;
use visitor_counter_lambda::adapters::dynamodb::DynamoCounterStore;

const TABLE: &str = "ExampleDynamoDBTable";

fn replay_client(status: u16, body: &str) -> StaticReplayClient {
    StaticReplayClient::new(vec![ReplayEvent::new(
        http::Request::builder()
            .uri("https://dynamodb.us-east-1.amazonaws.com/")
            .body(SdkBody::empty())
            .expect("request should build"),
        http::Response::builder()
            .status(status)
            .header("content-type", "application/x-amz-json-1.0")
            .body(SdkBody::from(body.to_string()))
            .expect("response should build"),
    )])
}

fn store_with(http_client: &StaticReplayClient) -> DynamoCounterStore {
    let config = aws_sdk_dynamodb::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
        .http_client(http_client.clone())
        .build();
    DynamoCounterStore::new(aws_sdk_dynamodb::Client::from_conf(config), TABLE)
}

fn sent_bodies(http_client: &StaticReplayClient) -> Vec<Value> {
    http_client
        .actual_requests()
        .map(|request| {
            let bytes = request.body().bytes().expect("request body should be in memory");
            serde_json::from_slice(bytes).expect("request body should be JSON")
        })
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn sends_conditional_increment_and_returns_updated_count() {
    let http_client = replay_client(200, r#"{"Attributes":{"visitorCount":{"N":"11"}}}"#);
    let store = store_with(&http_client);

    let count = store.increment(&CounterKey::visitor_count(), 1);

    assert_eq!(count, Ok(11));
    assert_eq!(
        sent_bodies(&http_client),
        vec![json!({
            "TableName": "ExampleDynamoDBTable",
            "Key": {"id": {"S": "visitor_count"}},
            "UpdateExpression": "SET #count = #count + :inc",
            "ConditionExpression": "attribute_exists(#count)",
            "ExpressionAttributeNames": {"#count": "visitorCount"},
            "ExpressionAttributeValues": {":inc": {"N": "1"}},
            "ReturnValues": "UPDATED_NEW"
        })]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_condition_reports_missing_record() {
    let http_client = replay_client(
        400,
        r#"{"__type":"com.amazonaws.dynamodb.v20120810#ConditionalCheckFailedException","message":"The conditional request failed"}"#,
    );
    let store = store_with(&http_client);

    let error = store
        .increment(&CounterKey::visitor_count(), 1)
        .expect_err("failed condition should surface");

    assert_eq!(error, StoreError::missing_record(TABLE, "visitor_count"));
    assert_eq!(sent_bodies(&http_client).len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn response_without_count_is_malformed() {
    let http_client = replay_client(200, r#"{"Attributes":{}}"#);
    let store = store_with(&http_client);

    let error = store
        .increment(&CounterKey::visitor_count(), 1)
        .expect_err("missing attribute should fail");

    assert!(matches!(error, StoreError::MalformedValue(_)));
}
