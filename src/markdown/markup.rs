use super::span::{SpanStyle, StyledLine};

/// Tag that clears foreground, background and attributes.
pub const RESET_TAG: &str = "[-:-:-]";

/// Serialize styled lines to bracket-tag markup, one line per input line.
///
/// A styled span is written as `[fg::attrs]text` and closed with
/// [`RESET_TAG`]; a line containing any styled span always ends with a
/// reset. Unstyled lines are written unchanged.
pub fn to_markup(lines: &[StyledLine]) -> String {
    let mut out = String::new();

    for line in lines {
        for span in &line.spans {
            if span.style.is_plain() {
                out.push_str(&span.text);
            } else {
                out.push_str(&open_tag(&span.style));
                out.push_str(&span.text);
                out.push_str(RESET_TAG);
            }
        }

        if line.is_styled() && !out.ends_with(RESET_TAG) {
            out.push_str(RESET_TAG);
        }
        out.push('\n');
    }

    out
}

fn open_tag(style: &SpanStyle) -> String {
    let fg = style.fg.map(|c| c.markup_name()).unwrap_or_default();

    let mut attrs = String::new();
    if style.bold {
        attrs.push('b');
    }
    if style.underline {
        attrs.push('u');
    }
    if style.italic {
        attrs.push('i');
    }
    if style.dim {
        attrs.push('d');
    }

    format!("[{}::{}]", fg, attrs)
}
