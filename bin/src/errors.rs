/// Failure kinds of the CLI. The discriminant is the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, num_enum::TryFromPrimitive, num_enum::IntoPrimitive, derive_more::Display)]
#[repr(u8)]
pub enum CliError {
    InputUnreadable = 2,
    InputInvalid = 3,
    KeyNotFound = 4,
    Duplicate = 5,
    OutputFailed = 6,
}

impl<K, V> From<bidict::BidictError<K, V>> for CliError {
    fn from(err: bidict::BidictError<K, V>) -> Self {
        if err.is_duplicate() {
            Self::Duplicate
        } else {
            Self::KeyNotFound
        }
    }
}
