use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable or constant could not be parsed into the expected form
    /// (URL, header value, socket address).
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue {
        /// Name of the variable or endpoint that failed to parse
        name: String,
        /// Parser error message
        reason: String,
    },
}
