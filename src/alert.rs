//! Alert messages for displaying success and error notifications to users.
//!
//! Alerts are rendered as an out-of-band swap targeting the alert container
//! that the base page template places at the bottom of every page, so an
//! htmx request handler can show a notification without replacing the
//! element that triggered the request.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// Alert message types for styling.
#[derive(Debug, Clone, Copy)]
enum AlertType {
    Success,
    Error,
}

/// An alert message with a short headline and an explanatory detail line.
pub struct AlertTemplate<'a> {
    alert_type: AlertType,
    message: &'a str,
    details: &'a str,
}

impl<'a> AlertTemplate<'a> {
    /// Create a new success alert.
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Success,
            message,
            details,
        }
    }

    /// Create a new error alert.
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
    }

    fn into_html(self) -> Markup {
        let (container_style, icon) = match self.alert_type {
            AlertType::Success => (
                "flex items-start p-4 mb-4 text-green-800 rounded-lg bg-green-50
                dark:bg-gray-800 dark:text-green-400 shadow-lg",
                "✓",
            ),
            AlertType::Error => (
                "flex items-start p-4 mb-4 text-red-800 rounded-lg bg-red-50
                dark:bg-gray-800 dark:text-red-400 shadow-lg",
                "✗",
            ),
        };

        html! {
            div id="alert-container" hx-swap-oob="true"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class=(container_style) role="alert" {
                    span class="text-xl me-3" aria-hidden="true" { (icon) }
                    div {
                        p class="font-medium" { (self.message) }
                        @if !self.details.is_empty() {
                            p class="text-sm" { (self.details) }
                        }
                    }
                    button
                        type="button"
                        class="ms-3 -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex h-8 w-8
                            hover:bg-gray-200 dark:hover:bg-gray-700"
                        aria-label="Close"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }
}

/// Renders `template` as an HTML response with the given `status_code`.
pub fn render_alert(status_code: StatusCode, template: AlertTemplate) -> Response {
    (status_code, Html(template.into_html().into_string())).into_response()
}

#[cfg(test)]
mod alert_tests {
    use super::AlertTemplate;

    #[test]
    fn error_alert_contains_message_and_details() {
        let html = AlertTemplate::error("Something failed", "Here is why.")
            .into_html()
            .into_string();

        assert!(html.contains("Something failed"));
        assert!(html.contains("Here is why."));
        assert!(html.contains("hx-swap-oob"));
    }

    #[test]
    fn success_alert_omits_empty_details() {
        let html = AlertTemplate::success("All good", "").into_html().into_string();

        assert!(html.contains("All good"));
        assert!(!html.contains("text-sm"));
    }
}
