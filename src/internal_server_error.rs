//! The 500 Internal Server Error page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The description and suggested fix shown on the internal server error page.
pub struct InternalServerErrorPageTemplate<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerErrorPageTemplate<'_> {
    fn default() -> Self {
        Self {
            description: "Internal Server Error",
            fix: "Sorry, something went wrong. Try again later or check the server logs.",
        }
    }
}

/// Route handler for the internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    render_internal_server_error(InternalServerErrorPageTemplate::default())
}

/// Renders the internal server error page with the given description and fix.
pub fn render_internal_server_error(template: InternalServerErrorPageTemplate) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(
            error_view(
                "Internal Server Error",
                "500",
                template.description,
                template.fix,
            )
            .into_string(),
        ),
    )
        .into_response()
}
