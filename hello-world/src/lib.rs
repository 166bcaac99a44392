//! Hello world Function
//!
//! Decodes a JSON person such as `{"name":"Alice","age":30}` and answers
//! `Hello Mr. Alice Happy30`.
//!
//! The host invokes [Function], which is exported with
//! [hello_functions_guest::invoke!]. A payload that does not describe a person fails the
//! invocation with a [hello_functions_guest::InvocationError] instead of producing a greeting.
//!
//! [GreeterConfig] reads `HELLO_WORLD_GREETING_STYLE` (`compatible` or `corrected`) and
//! `HELLO_WORLD_LOG_LEVEL` and `HELLO_WORLD_LOG_STREAM` (`stderr` or `stdout`) from the
//! environment the first time the Function runs.

use std::sync::OnceLock;

use hello_functions_bytes::Data;
use hello_functions_guest::{Error, FunctionResult, invoke};

pub mod config;
mod error;
pub mod greeting;
mod person;

pub use config::{ConfigError, GreeterConfig};
pub use error::{ErrorKind, GreetingError};
pub use greeting::{Greeter, GreetingStyle, apply};
pub use person::Person;

static CONFIG: OnceLock<Result<GreeterConfig, ConfigError>> = OnceLock::new();

/// The configuration for this process, loaded and applied on first use.
pub fn runtime_config() -> Result<&'static GreeterConfig, &'static ConfigError> {
    CONFIG
        .get_or_init(|| {
            let config = GreeterConfig::from_env()?;
            let logging =
                hello_functions_log::configure_logging(config.log_level, config.log_mode);
            if let Err(e) = logging {
                // The host installed its own logger; keep using it.
                log::debug!("{e}");
            }
            Ok(config)
        })
        .as_ref()
}

invoke!(hello_world);
pub fn hello_world(request: Data) -> FunctionResult<String> {
    let config = runtime_config().map_err(Error::from)?;
    let greeting = Greeter::new(config.style).apply_slice(request.as_slice())?;
    Ok(greeting)
}
