use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid header format: '{value}'. Expected 'Key: Value'")]
    InvalidHeaderFormat { value: String },
    #[error("Invalid timestamp '{value}'. Use RFC 3339 (2024-01-01T00:00:00Z) or YYYY-MM-DD.")]
    InvalidTimestamp { value: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Missing server URL (set --server or provide it in config).")]
    MissingServer,
    #[error("Basic auth requires both --user and --password.")]
    IncompleteBasicAuth,
    #[error("Cannot combine --token with --user/--password.")]
    AuthConflict,
    #[error("Cannot combine --period with --from/--to.")]
    PeriodConflict,
    #[error("Period '{period}' could not be resolved in the local time zone.")]
    PeriodUnresolvable { period: &'static str },
    #[error("Replay needs a device, a start time and an end time.")]
    ReplayFilterIncomplete,
    #[error("Index {index} is out of range for {len} positions.")]
    ScrubIndexOutOfRange { index: usize, len: usize },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
