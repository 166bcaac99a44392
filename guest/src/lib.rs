//! Guest bindings for hello functions
//!
//! A host invokes a Function through the [Guest] trait. The [invoke!] macro
//! exports a plain Rust function as a [Guest], extracting its typed input from
//! the request [bytes::Data] and converting its output with [IntoResponse].
//!
//! You are likely to be interested in the sibling crates:
//! * `hello-functions-bytes`: Payload buffers and encodings.
//! * `hello-functions-log`: Standard `log` adapter.

mod error;
mod function;
mod into_response;
mod response;

pub use hello_functions_bytes as bytes;

pub use error::{Error, FunctionResult, InvocationError};
pub use function::{Guest, invoke_template};
pub use into_response::IntoResponse;
pub use response::Response;
