use std::collections::HashMap;
use std::sync::Mutex;

use visitor_counter_core::contract::CounterKey;
use visitor_counter_core::error::StoreError;

/// Atomic "add delta, return the updated value" against a counter record.
pub trait CounterStore {
    fn increment(&self, key: &CounterKey, delta: u64) -> Result<u64, StoreError>;
}

/// Process-local store used by tests and local runs.
///
/// Unknown keys are reported as [`StoreError::MissingRecord`], the same way
/// the DynamoDB adapter treats an unprovisioned record.
#[derive(Debug)]
pub struct InMemoryCounterStore {
    table_name: String,
    records: Mutex<HashMap<CounterKey, u64>>,
}

impl InMemoryCounterStore {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            records: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_record(self, key: CounterKey, initial: u64) -> Self {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, initial);
        self
    }

    pub fn value(&self, key: &CounterKey) -> Option<u64> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .copied()
    }
}

impl CounterStore for InMemoryCounterStore {
    fn increment(&self, key: &CounterKey, delta: u64) -> Result<u64, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::request("in-memory counter store lock poisoned"))?;
        let Some(count) = records.get_mut(key) else {
            return Err(StoreError::missing_record(
                &self.table_name,
                &key.partition_key_value,
            ));
        };

        *count = count.checked_add(delta).ok_or_else(|| {
            StoreError::malformed_value(format!(
                "incrementing {} by {delta} overflows",
                key.count_attribute
            ))
        })?;
        Ok(*count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_provisioned_record() {
        let key = CounterKey::visitor_count();
        let store = InMemoryCounterStore::new("counters").with_record(key.clone(), 10);

        assert_eq!(store.increment(&key, 1), Ok(11));
        assert_eq!(store.increment(&key, 2), Ok(13));
        assert_eq!(store.value(&key), Some(13));
    }

    #[test]
    fn missing_record_is_an_explicit_failure() {
        let store = InMemoryCounterStore::new("counters");
        let error = store
            .increment(&CounterKey::visitor_count(), 1)
            .expect_err("unprovisioned record should fail");

        assert_eq!(error, StoreError::missing_record("counters", "visitor_count"));
        assert_eq!(store.value(&CounterKey::visitor_count()), None);
    }

    #[test]
    fn overflow_leaves_count_untouched() {
        let key = CounterKey::visitor_count();
        let store = InMemoryCounterStore::new("counters").with_record(key.clone(), u64::MAX);

        let error = store.increment(&key, 1).expect_err("overflow should fail");
        assert!(matches!(error, StoreError::MalformedValue(_)));
        assert_eq!(store.value(&key), Some(u64::MAX));
    }
}
