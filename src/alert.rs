//! Alerts for displaying error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element of the page when a request fails.

use maud::{Markup, html};

/// An error message with an optional detail line.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        html! {
            div
                id="alert-message"
                role="alert"
                class="flex items-start p-4 mb-4 text-red-800 rounded-lg bg-red-50 \
                    dark:bg-gray-800 dark:text-red-400 shadow-lg"
                data-alert-type="error"
            {
                div class="ms-3 text-sm font-medium grow"
                {
                    p class="font-semibold" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="mt-1" { (self.details) }
                    }
                }

                button
                    type="button"
                    aria-label="Close"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex h-8 w-8
                        items-center justify-center hover:bg-gray-200 dark:hover:bg-gray-700"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    span class="sr-only" { "Close" }
                    "×"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn error_alert_shows_message_and_details() {
        let markup = Alert::error("Invalid amount", "Enter a number").into_html();
        let html = Html::parse_fragment(&markup.into_string());

        let selector = Selector::parse("[role=alert]").unwrap();
        let alert = html.select(&selector).next().expect("no alert rendered");

        assert_eq!(alert.value().attr("data-alert-type"), Some("error"));
        let text = alert.text().collect::<String>();
        assert!(text.contains("Invalid amount"), "got text {text:?}");
        assert!(text.contains("Enter a number"), "got text {text:?}");
    }

    #[test]
    fn details_are_omitted_when_empty() {
        let markup = Alert::error("Missing category", "").into_html();
        let html = Html::parse_fragment(&markup.into_string());

        let selector = Selector::parse("[role=alert] p").unwrap();
        assert_eq!(html.select(&selector).count(), 1);
    }
}
