use visitor_counter_core::contract::DEFAULT_COUNTER_TABLE;

pub const COUNTER_TABLE_NAME_ENV: &str = "COUNTER_TABLE_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterLambdaConfig {
    pub table_name: String,
}

impl CounterLambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table_name = lookup(COUNTER_TABLE_NAME_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_COUNTER_TABLE.to_string());

        Self { table_name }
    }
}
