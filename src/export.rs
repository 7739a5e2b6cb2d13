//! Rendering favourites for people
//!
//! JSON export lives on [`FavoritesStore`](crate::FavoritesStore); this
//! module renders a list of ideas as a plain-text report ([`text`]) or as a
//! standalone HTML document meant to be printed to PDF ([`html`]).

mod html;
mod text;

pub use html::html;
pub use text::text;

/// Date format used in report headers and per-idea footers.
const DATE_FORMAT: &str = "%Y-%m-%d";
