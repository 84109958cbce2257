//! Browser board UI.
//!
//! A single self-contained page embedded at compile time. It renders the
//! three lanes and talks to the server only through the REST API.

use axum::response::Html;

/// The board page.
pub const BOARD_TEMPLATE: &str = include_str!("templates/board.html");

/// GET / - serves the board page.
pub async fn index() -> Html<&'static str> {
    Html(BOARD_TEMPLATE)
}
