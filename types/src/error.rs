use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A serializable error for client rendering.
///
/// "No rows" is never an error; reads that can come back empty return `Option` or an
/// empty `Vec` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Error {
    /// The data store could not answer: transport, auth, server or decode failure.
    QueryFailed { table: String, message: String },
    /// The request carried no usable session.
    Unauthenticated,
    /// The auth provider rejected or failed a request.
    Auth(String),
    Config(String),
}

/// The error and every cause under it, on one line.
fn chain(error: impl Into<anyhow::Error>) -> String {
    format!("{:#}", error.into())
}

impl Error {
    pub fn query_failed(table: impl Into<String>, error: impl Into<anyhow::Error>) -> Self {
        Self::QueryFailed {
            table: table.into(),
            message: chain(error),
        }
    }

    pub fn auth(error: impl Into<anyhow::Error>) -> Self {
        Self::Auth(chain(error))
    }

    pub fn config(error: impl Into<anyhow::Error>) -> Self {
        Self::Config(chain(error))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::QueryFailed { table, message } => {
                write!(f, "query on '{table}' failed: {message}")
            }
            Error::Unauthenticated => write!(f, "not signed in"),
            Error::Auth(message) => write!(f, "auth provider error: {message}"),
            Error::Config(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for Error {}
