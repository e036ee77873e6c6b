/// Rejection of a lookup candidate before the store is consulted.
///
/// This is the only user-facing failure of the analyzer. A candidate that is
/// long enough but matches nothing is a [`LookupOutcome::NotFound`], not an
/// error.
///
/// [`LookupOutcome::NotFound`]: crate::LookupOutcome::NotFound
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter a valid hash (at least {min} characters).")]
    TooShort { min: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid latency '{value}': expected a whole number of milliseconds")]
    InvalidLatency {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{var} is set but is not valid unicode")]
    NotUnicode { var: &'static str },
}
