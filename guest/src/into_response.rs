use hello_functions_bytes::Data;

use crate::Response;

/// Values returned by a function exported with the [crate::invoke!] macro must implement this trait.
pub trait IntoResponse {
    fn response(self) -> Response;
}

fn ok(content_type: &str, body: Data) -> Response {
    Response {
        status: 200,
        headers: vec![("content-type".to_string(), content_type.to_string())],
        body,
    }
}

impl IntoResponse for String {
    fn response(self) -> Response {
        ok("text/plain; charset=utf-8", self.into())
    }
}

impl IntoResponse for Data {
    fn response(self) -> Response {
        ok("application/octet-stream", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_plain_utf8() {
        let response = "Hello Mr. Alice Happy30".to_string().response();
        assert_eq!(response.status, 200);
        assert_eq!(
            response.header_value("Content-Type"),
            Some("text/plain; charset=utf-8")
        );
        assert_eq!(response.body.as_slice(), b"Hello Mr. Alice Happy30");
    }

    #[test]
    fn data_is_an_octet_stream() {
        let response = Data::from(vec![0u8, 1, 2]).response();
        assert_eq!(response.status, 200);
        assert_eq!(
            response.header_value("content-type"),
            Some("application/octet-stream")
        );
        assert_eq!(response.body.as_slice(), &[0, 1, 2]);
    }
}
