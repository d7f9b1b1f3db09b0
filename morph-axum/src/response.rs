use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use morph_core::ShapedResponse;

/// Writes a [`ShapedResponse`] to the wire, decoding base64 file payloads.
#[derive(Debug)]
pub struct HttpResponse(pub ShapedResponse);

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let shaped = self.0;

        let body = match shaped.body_bytes() {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(error = %err, "shaped body is not valid base64");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain")],
                    "Internal server error",
                )
                    .into_response();
            }
        };

        let status =
            StatusCode::from_u16(shaped.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in &shaped.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "dropping unrepresentable header"),
            }
        }

        response
    }
}
