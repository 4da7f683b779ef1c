use lambda_runtime::{service_fn, Error};
use visitor_counter_lambda::adapters::dynamodb::DynamoCounterStore;
use visitor_counter_lambda::config::CounterLambdaConfig;
use visitor_counter_lambda::handlers::counter::handle_lambda_event;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let config = CounterLambdaConfig::from_env();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoCounterStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name,
    );
    tracing::info!(table = store.table_name(), "counter lambda initialized");

    let store = &store;
    lambda_runtime::run(service_fn(move |event| async move {
        handle_lambda_event(event, store)
    }))
    .await
}
