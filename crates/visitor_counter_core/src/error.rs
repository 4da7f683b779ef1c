/// Failures reported by a counter store.
///
/// None of these are recovered from: the handler hands them straight back to
/// the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The counter record (or its count attribute) has not been provisioned.
    MissingRecord { table: String, record_id: String },
    /// The store could not be reached or rejected the request.
    Request(String),
    /// The store answered, but without a usable counter value.
    MalformedValue(String),
}

impl StoreError {
    pub fn missing_record(table: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self::MissingRecord {
            table: table.into(),
            record_id: record_id.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    pub fn malformed_value(message: impl Into<String>) -> Self {
        Self::MalformedValue(message.into())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRecord { table, record_id } => write!(
                f,
                "counter record '{record_id}' is not provisioned in table '{table}'"
            ),
            Self::Request(message) => write!(f, "counter store request failed: {message}"),
            Self::MalformedValue(message) => {
                write!(f, "counter store returned a malformed value: {message}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
