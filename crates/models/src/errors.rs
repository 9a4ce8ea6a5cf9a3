use thiserror::Error;

/// Every failed field check for one candidate record, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .0.join(", "))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] { &self.0 }

    pub fn into_messages(self) -> Vec<String> { self.0 }
}
