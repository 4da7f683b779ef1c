use lambda_runtime::LambdaEvent;
use visitor_counter_core::contract::{CounterInvocation, CounterKey, INCREMENT_STEP};
use visitor_counter_core::error::StoreError;
use visitor_counter_core::response::{counter_response, ApiGatewayResponse};

use crate::adapters::counter_store::CounterStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterHandlerError {
    Store(StoreError),
}

impl From<StoreError> for CounterHandlerError {
    fn from(error: StoreError) -> Self {
        Self::Store(error)
    }
}

impl std::fmt::Display for CounterHandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(error) => write!(f, "failed to increment visitor counter: {error}"),
        }
    }
}

impl std::error::Error for CounterHandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(error) => Some(error),
        }
    }
}

/// Adds one visit to the counter record and returns the new count.
///
/// The invocation payload is not inspected. Store failures are returned as-is
/// with no retry and no fallback response.
pub fn handle_counter_event(
    _event: CounterInvocation,
    store: &dyn CounterStore,
) -> Result<ApiGatewayResponse, CounterHandlerError> {
    let key = CounterKey::visitor_count();
    let count = store.increment(&key, INCREMENT_STEP).map_err(|error| {
        tracing::error!(record_id = %key.partition_key_value, %error, "counter increment failed");
        error
    })?;

    tracing::info!(record_id = %key.partition_key_value, count, "visitor counter incremented");
    Ok(counter_response(count))
}

/// Runtime-facing entry point. The invocation context is dropped and handler
/// errors become `lambda_runtime::Error` for the platform to report.
pub fn handle_lambda_event(
    event: LambdaEvent<CounterInvocation>,
    store: &dyn CounterStore,
) -> Result<ApiGatewayResponse, lambda_runtime::Error> {
    handle_counter_event(event.payload, store).map_err(lambda_runtime::Error::from)
}
