use hello_functions_guest::{Error, InvocationError};
use serde_json::error::Category;

/// Why a payload could not be turned into a greeting.
#[derive(thiserror::Error, Debug)]
pub enum GreetingError {
    /// The payload is not syntactically valid JSON.
    #[error("malformed input: {source}")]
    MalformedInput { source: serde_json::Error },

    /// The payload is JSON, but not a person.
    #[error("schema mismatch: {source}")]
    SchemaMismatch { source: serde_json::Error },

    /// The stream the payload was read from failed.
    #[error("i/o failure: {source}")]
    IoFailure { source: serde_json::Error },
}

/// The kind of a [GreetingError], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedInput,
    SchemaMismatch,
    IoFailure,
}

impl GreetingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GreetingError::MalformedInput { .. } => ErrorKind::MalformedInput,
            GreetingError::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            GreetingError::IoFailure { .. } => ErrorKind::IoFailure,
        }
    }
}

impl From<serde_json::Error> for GreetingError {
    fn from(source: serde_json::Error) -> Self {
        match source.classify() {
            Category::Syntax | Category::Eof => GreetingError::MalformedInput { source },
            Category::Data => GreetingError::SchemaMismatch { source },
            Category::Io => GreetingError::IoFailure { source },
        }
    }
}

impl From<GreetingError> for Error {
    fn from(e: GreetingError) -> Self {
        let error = match e {
            GreetingError::MalformedInput { .. } | GreetingError::SchemaMismatch { .. } => {
                InvocationError::RequestError(e.to_string())
            }
            GreetingError::IoFailure { .. } => InvocationError::InternalError(e.to_string()),
        };
        Error::InvocationError(error)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::Greeter;

    struct ClosedStream;

    impl io::Read for ClosedStream {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream closed"))
        }
    }

    #[test]
    fn decoder_categories_map_to_kinds() {
        let eof = serde_json::from_str::<serde_json::Value>("{").expect_err("eof");
        assert_eq!(GreetingError::from(eof).kind(), ErrorKind::MalformedInput);

        let data = serde_json::from_str::<u8>("300").expect_err("out of range");
        assert_eq!(GreetingError::from(data).kind(), ErrorKind::SchemaMismatch);
    }

    #[test]
    fn request_faults_blame_the_request() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").expect_err("syntax");
        let error: InvocationError = Error::from(GreetingError::from(source)).into();
        match error {
            InvocationError::RequestError(message) => {
                assert!(message.starts_with("malformed input:"), "{message}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn io_faults_are_internal() {
        let failure = Greeter::default()
            .apply_reader(ClosedStream)
            .expect_err("stream fails");
        let error: InvocationError = Error::from(failure).into();
        assert_eq!(
            error,
            InvocationError::InternalError("i/o failure: stream closed".to_string())
        );
    }
}
