use super::{ConfigError, FetchError, ValidationError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for FetchError {
    fn from(message: &'static str) -> Self {
        FetchError::TestExpectation { message }
    }
}

impl From<String> for FetchError {
    fn from(value: String) -> Self {
        FetchError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
