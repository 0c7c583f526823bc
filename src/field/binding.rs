/// Explicit getter/setter pair standing in for by-name property binding:
/// the field pushes each new masked value through `set`, the host reads it
/// back through `get`.
pub trait ValueBinding {
    fn get(&self) -> String;
    fn set(&mut self, value: &str);
}

/// Owned string cell, the simplest binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateCell {
    value: String,
}

impl StateCell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ValueBinding for StateCell {
    fn get(&self) -> String {
        self.value.clone()
    }

    fn set(&mut self, value: &str) {
        self.value = value.to_string();
    }
}
