use async_trait::async_trait;
use greeter_core::fact::{Fact, FactProvider, FetchError};

/// Serves the same fact on every call. Used for offline runs.
#[derive(Debug, Clone)]
pub struct StaticFactProvider {
    fact: Fact,
}

impl StaticFactProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            fact: Fact::new(text),
        }
    }
}

#[async_trait]
impl FactProvider for StaticFactProvider {
    async fn fetch_fact(&self) -> Result<Fact, FetchError> {
        if self.fact.text.trim().is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(self.fact.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
