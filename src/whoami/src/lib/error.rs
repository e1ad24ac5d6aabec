/// The type to represent whoami results.
pub type WhoamiResult<T = ()> = anyhow::Result<T>;

/// The type to represent whoami errors.
pub type WhoamiError = anyhow::Error;
