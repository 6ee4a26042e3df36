//! Line-oriented Markdown styling for the preview pane.
//!
//! [`apply_styling`] turns raw text into [`StyledLine`]s. [`to_markup`]
//! serializes those into bracket-tag markup; [`style`] does both.

mod markup;
mod span;
mod styler;

pub use markup::{to_markup, RESET_TAG};
pub use span::{Color, SpanStyle, StyledLine, StyledSpan};
pub use styler::{apply_styling, DIVIDER_WIDTH, FENCE_MARKER};

/// Style raw Markdown text straight to markup.
pub fn style(text: &str) -> String {
    to_markup(&apply_styling(text))
}
