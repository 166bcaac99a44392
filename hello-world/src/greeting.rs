//! Turning a person payload into a greeting.

use std::io;

use crate::{GreetingError, Person};

/// How the age is joined to the greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreetingStyle {
    /// `Hello Mr. Alice Happy30`: byte-for-byte what existing callers receive.
    #[default]
    Compatible,
    /// `Hello Mr. Alice Happy 30`
    Corrected,
}

/// Greets the person described by a JSON payload.
///
/// ```rust
/// use hello_world::{Greeter, GreetingStyle};
///
/// let greeter = Greeter::new(GreetingStyle::Corrected);
/// assert_eq!(
///     greeter.apply(r#"{"name":"Alice","age":30}"#).unwrap(),
///     "Hello Mr. Alice Happy 30"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Greeter {
    style: GreetingStyle,
}

impl Greeter {
    pub fn new(style: GreetingStyle) -> Self {
        Self { style }
    }

    pub fn apply(&self, input: &str) -> Result<String, GreetingError> {
        self.greet(serde_json::from_str(input))
    }

    /// Like [Greeter::apply], for payloads that have not been checked for UTF-8.
    pub fn apply_slice(&self, input: &[u8]) -> Result<String, GreetingError> {
        self.greet(serde_json::from_slice(input))
    }

    /// Like [Greeter::apply], reading the payload from a stream.
    ///
    /// A failing reader is reported as [GreetingError::IoFailure].
    pub fn apply_reader(&self, reader: impl io::Read) -> Result<String, GreetingError> {
        self.greet(serde_json::from_reader(reader))
    }

    fn greet(&self, person: serde_json::Result<Person>) -> Result<String, GreetingError> {
        let person = person.map_err(|e| {
            let error = GreetingError::from(e);
            log::debug!("could not decode person: {error}");
            error
        })?;
        Ok(person.greeting(self.style))
    }
}

/// Greets the person in `input` with the [GreetingStyle::Compatible] style.
pub fn apply(input: &str) -> Result<String, GreetingError> {
    Greeter::default().apply(input)
}
