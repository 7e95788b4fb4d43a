//! Alert fragments for displaying error messages to users.
//!
//! Form posts go through htmx with `hx-target-error="#alert-container"`, so
//! error responses are rendered as small fragments that land in the page's
//! alert container instead of replacing the whole page.

use maud::{Markup, html};

/// Renders alert messages with appropriate styling.
pub struct AlertTemplate<'a> {
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> AlertTemplate<'a> {
    /// Create a new error alert.
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_markup(self) -> Markup {
        html!(
            div
                role="alert"
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50
                    dark:bg-gray-800 dark:text-red-400 border border-red-300
                    dark:border-red-800 shadow"
            {
                span class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    " " (self.details)
                }
            }
        )
    }
}
