//! Errors crossing the guest boundary

/// An alias for Result<T, Error> for convenience.
pub type FunctionResult<T> = std::result::Result<T, Error>;

/// An error during the execution of a Function.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An error already classified for the host.
    #[error(transparent)]
    InvocationError(#[from] InvocationError),

    /// A catch-all error with a message.
    #[error("{0}")]
    MessageError(String),
}

/// The failure reported to the host when an invocation does not produce a response.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// The request payload could not be handled.
    #[error("Request error: {0}")]
    RequestError(String),

    /// The Function or its environment failed independently of the request.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl InvocationError {
    /// Who is at fault, without the details. Details may quote the payload.
    pub fn fault(&self) -> &'static str {
        match self {
            InvocationError::RequestError(_) => "request",
            InvocationError::InternalError(_) => "internal",
        }
    }
}

impl From<Error> for InvocationError {
    fn from(e: Error) -> Self {
        match e {
            Error::InvocationError(e) => e,
            Error::MessageError(msg) => InvocationError::RequestError(msg),
        }
    }
}
