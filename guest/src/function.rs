use hello_functions_bytes::{Data, encoding::Extract};

use crate::{FunctionResult, IntoResponse, InvocationError, Response};

/// The entry point a host calls for each invocation.
///
/// You normally do not implement this yourself: [crate::invoke!] implements it
/// for a plain Rust function.
pub trait Guest {
    fn invoke(request: Data) -> Result<Response, InvocationError>;
}

/// Export a handler that accepts a request payload and returns a response.
///
/// You can accept the raw [Data] or UTF-8 text ([String]) as input, or any type for which
/// [Extract] is implemented. If the input bytes cannot be extracted into the specified input
/// type, the host receives an [InvocationError::RequestError] with the extraction details. If
/// you would rather classify extraction errors yourself, accept [Data] and decode it in your
/// handler.
///
/// Your handler returns a [FunctionResult] whose value implements [IntoResponse]:
/// [String] becomes a 200 `text/plain` response and [Data] a 200 `application/octet-stream` one.
/// A handler error is returned to the host as an [InvocationError]; only its fault is logged
/// above `debug`, since the details may quote the payload.
///
/// The macro defines `pub struct Function`, which implements [Guest].
///
/// ```rust
/// use hello_functions_guest::{FunctionResult, invoke};
///
/// invoke!(greet);
/// fn greet(name: String) -> FunctionResult<String> {
///     Ok(format!("Hello, {name}!"))
/// }
/// ```
#[macro_export]
macro_rules! invoke {
    ($handler: ident) => {
        /// The exported Function.
        pub struct Function;

        #[automatically_derived]
        impl $crate::Guest for Function {
            fn invoke(
                request: $crate::bytes::Data,
            ) -> ::std::result::Result<$crate::Response, $crate::InvocationError> {
                $crate::invoke_template(request, $handler)
            }
        }
    };
}

/// An internal helper for the invoke! macro.
#[doc(hidden)]
pub fn invoke_template<TExtract, TResponse>(
    payload: Data,
    handler: fn(request: TExtract) -> FunctionResult<TResponse>,
) -> Result<Response, InvocationError>
where
    TExtract: Extract,
    TResponse: IntoResponse,
{
    let request = TExtract::extract(payload).map_err(|e| {
        InvocationError::RequestError(format!("failed to extract request: {e}"))
    })?;
    match handler(request) {
        Ok(response) => Ok(response.response()),
        Err(e) => {
            let error = InvocationError::from(e);
            log::warn!("invocation failed with a {} error", error.fault());
            log::debug!("invocation failed: {error}");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn greet(name: String) -> FunctionResult<String> {
        if name.is_empty() {
            return Err(Error::MessageError("name is empty".to_string()));
        }
        Ok(format!("Hello, {name}!"))
    }

    fn echo(request: Data) -> FunctionResult<Data> {
        Ok(request)
    }

    #[test]
    fn handler_output_becomes_response() {
        let response = invoke_template(Data::from("kvc"), greet).expect("greeting");
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_slice(), b"Hello, kvc!");
    }

    #[test]
    fn extract_failure_is_a_request_error() {
        let error =
            invoke_template(Data::from(vec![0xffu8, 0xfe]), greet).expect_err("not utf-8");
        match error {
            InvocationError::RequestError(message) => {
                assert!(message.starts_with("failed to extract request:"), "{message}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn handler_error_reaches_the_host() {
        let error = invoke_template(Data::from(""), greet).expect_err("empty");
        assert_eq!(
            error,
            InvocationError::RequestError("name is empty".to_string())
        );
    }

    #[test]
    fn raw_payloads_pass_through() {
        let response = invoke_template(Data::from(vec![0u8, 1, 2]), echo).expect("echo");
        assert_eq!(response.body.as_slice(), &[0, 1, 2]);
        assert_eq!(
            response.header_value("content-type"),
            Some("application/octet-stream")
        );
    }

    mod exported {
        use crate::FunctionResult;

        crate::invoke!(shout);
        fn shout(request: String) -> FunctionResult<String> {
            Ok(request.to_uppercase())
        }
    }

    #[test]
    fn invoke_macro_exports_a_guest() {
        let response = <exported::Function as Guest>::invoke(Data::from("hey")).expect("shout");
        assert_eq!(response.body.as_slice(), b"HEY");
    }
}
