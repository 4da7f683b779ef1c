use std::collections::HashMap;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use visitor_counter_core::contract::CounterKey;
use visitor_counter_core::error::StoreError;

use crate::adapters::counter_store::CounterStore;

pub const COUNT_ATTRIBUTE_PLACEHOLDER: &str = "#count";
pub const INCREMENT_VALUE_PLACEHOLDER: &str = ":inc";
pub const INCREMENT_UPDATE_EXPRESSION: &str = "SET #count = #count + :inc";
// Without this DynamoDB would create a bare item for an absent key and then
// reject the arithmetic with a generic validation error.
pub const RECORD_EXISTS_CONDITION: &str = "attribute_exists(#count)";

/// Counter store backed by a single DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoCounterStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoCounterStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl CounterStore for DynamoCounterStore {
    fn increment(&self, key: &CounterKey, delta: u64) -> Result<u64, StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let key = key.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .update_item()
                    .table_name(&table_name)
                    .key(
                        &key.partition_key_name,
                        AttributeValue::S(key.partition_key_value.clone()),
                    )
                    .update_expression(INCREMENT_UPDATE_EXPRESSION)
                    .condition_expression(RECORD_EXISTS_CONDITION)
                    .expression_attribute_names(COUNT_ATTRIBUTE_PLACEHOLDER, &key.count_attribute)
                    .expression_attribute_values(
                        INCREMENT_VALUE_PLACEHOLDER,
                        increment_value(delta),
                    )
                    .return_values(ReturnValue::UpdatedNew)
                    .send()
                    .await
                    .map_err(|error| classify_update_error(error, &table_name, &key))?;

                parse_updated_count(output.attributes(), &key)
            })
        })
    }
}

pub fn increment_value(delta: u64) -> AttributeValue {
    AttributeValue::N(delta.to_string())
}

pub fn classify_update_error<R>(
    error: SdkError<UpdateItemError, R>,
    table_name: &str,
    key: &CounterKey,
) -> StoreError
where
    R: std::fmt::Debug,
{
    match error.as_service_error() {
        Some(service_error) => classify_service_error(service_error, table_name, key),
        None => StoreError::request(DisplayErrorContext(&error).to_string()),
    }
}

pub fn classify_service_error(
    error: &UpdateItemError,
    table_name: &str,
    key: &CounterKey,
) -> StoreError {
    if error.is_conditional_check_failed_exception() {
        StoreError::missing_record(table_name, &key.partition_key_value)
    } else {
        StoreError::request(DisplayErrorContext(error).to_string())
    }
}

/// Reads the post-update count out of an `UPDATED_NEW` attribute map.
pub fn parse_updated_count(
    attributes: Option<&HashMap<String, AttributeValue>>,
    key: &CounterKey,
) -> Result<u64, StoreError> {
    let attribute = &key.count_attribute;
    let value = attributes
        .and_then(|values| values.get(attribute))
        .ok_or_else(|| {
            StoreError::malformed_value(format!("update response is missing '{attribute}'"))
        })?;
    let number = value
        .as_n()
        .map_err(|_| StoreError::malformed_value(format!("'{attribute}' is not a number")))?;

    number.parse::<u64>().map_err(|error| {
        StoreError::malformed_value(format!(
            "'{attribute}' value '{number}' is not a non-negative integer: {error}"
        ))
    })
}
