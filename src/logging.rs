//! Middleware for logging requests and responses.

use axum::{
    body::to_bytes,
    extract::Request,
    http::{Method, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};

/// How many bytes of a request or response body are logged at the `info`
/// level before the rest is deferred to the `debug` level.
const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Password fields in form submissions are redacted before logging.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let body_text = String::from_utf8_lossy(&body_bytes).to_string();

    let is_form_post = parts.method == Method::POST
        && parts.headers.get(CONTENT_TYPE)
            == Some(&"application/x-www-form-urlencoded".parse().unwrap());

    if is_form_post {
        let display_text = redact_field(&body_text, "password");
        let display_text = redact_field(&display_text, "confirm_password");
        log_body(&format!("Received request: {parts:#?}"), &display_text);
    } else {
        log_body(&format!("Received request: {parts:#?}"), &body_text);
    }

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let body_text = String::from_utf8_lossy(&body_bytes).to_string();
    log_body(&format!("Sending response: {parts:#?}"), &body_text);

    Response::from_parts(parts, body_bytes.into())
}

/// Replace the value of `field_name` in a URL-encoded form body with asterisks.
fn redact_field(form_text: &str, field_name: &str) -> String {
    let prefix = format!("{field_name}=");

    let start = match form_text.find(&prefix) {
        Some(position) => position,
        None => return form_text.to_string(),
    };
    let end = form_text[start..]
        .find('&')
        .map(|offset| start + offset)
        .unwrap_or(form_text.len());

    form_text.replace(&form_text[start..end], &format!("{field_name}=********"))
}

fn log_body(summary: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("{summary}\nbody: {}...", &body[..LOG_BODY_LENGTH_LIMIT]);
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{summary}\nbody: {body:?}");
    }
}

#[cfg(test)]
mod redact_field_tests {
    use super::redact_field;

    #[test]
    fn redacts_password_in_middle_of_form() {
        let form = "email=a%40b.com&password=hunter2&remember_me=on";

        let got = redact_field(form, "password");

        assert_eq!(got, "email=a%40b.com&password=********&remember_me=on");
    }

    #[test]
    fn redacts_password_at_end_of_form() {
        let form = "email=a%40b.com&password=hunter2";

        let got = redact_field(form, "password");

        assert_eq!(got, "email=a%40b.com&password=********");
    }

    #[test]
    fn leaves_form_without_field_unchanged() {
        let form = "email=a%40b.com&remember_me=on";

        assert_eq!(redact_field(form, "password"), form);
    }
}
