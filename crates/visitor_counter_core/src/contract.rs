use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

pub const COUNTER_PARTITION_KEY: &str = "id";
pub const VISITOR_COUNT_RECORD_ID: &str = "visitor_count";
pub const VISITOR_COUNT_ATTRIBUTE: &str = "visitorCount";
pub const DEFAULT_COUNTER_TABLE: &str = "ExampleDynamoDBTable";
pub const INCREMENT_STEP: u64 = 1;

/// Identity of a counter record inside the key-value table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CounterKey {
    pub partition_key_name: String,
    pub partition_key_value: String,
    pub count_attribute: String,
}

impl CounterKey {
    pub fn new(
        partition_key_name: impl Into<String>,
        partition_key_value: impl Into<String>,
        count_attribute: impl Into<String>,
    ) -> Self {
        Self {
            partition_key_name: partition_key_name.into(),
            partition_key_value: partition_key_value.into(),
            count_attribute: count_attribute.into(),
        }
    }

    /// The single record the site visitor counter lives in.
    pub fn visitor_count() -> Self {
        Self::new(
            COUNTER_PARTITION_KEY,
            VISITOR_COUNT_RECORD_ID,
            VISITOR_COUNT_ATTRIBUTE,
        )
    }
}

/// Input of a counter invocation.
///
/// The trigger payload is never read, so this accepts any JSON value and
/// throws the contents away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterInvocation;

impl<'de> Deserialize<'de> for CounterInvocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(CounterInvocation)
    }
}
