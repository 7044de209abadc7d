//! The 404 Not Found page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// Route handler for the 404 not found page.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Renders the 404 not found page.
///
/// Useful for returning a 404 response outside of the route handler.
pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(
            error_view(
                "Not Found",
                "404",
                "Page Not Found",
                "Sorry, the page you are looking for does not exist.",
            )
            .into_string(),
        ),
    )
        .into_response()
}

#[cfg(test)]
mod not_found_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::routing::build_router;
    use crate::test_utils::new_test_state;

    #[tokio::test]
    async fn unknown_route_returns_not_found_page() {
        let server = TestServer::new(build_router(new_test_state()));

        let response = server.get("/this-page-does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text_contains("404");
        response.assert_text_contains("Page Not Found");
    }
}
