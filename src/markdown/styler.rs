use super::span::{Color, SpanStyle, StyledLine, StyledSpan};

/// Opening and closing marker of a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Width of the rule drawn around fenced code.
pub const DIVIDER_WIDTH: usize = 46;

const DIVIDER_CHAR: char = '━';
const INLINE_CODE_MARKER: char = '`';
const INLINE_CODE_GREY: Color = Color::Rgb(0x7e, 0x7e, 0x7e);

/// Per-call scanner state.
#[derive(Debug, Default)]
struct StyleState {
    inside_fence: bool,
    fence_language: String,
}

/// Convert Markdown text into styled lines in one forward pass.
///
/// Fence delimiter lines toggle code mode; code lines are copied verbatim.
/// Outside a fence the first matching rule styles the whole line: `# `,
/// `## `, `### `, `**…**`, `__…__`, then inline code spans. Unbalanced
/// backticks and unterminated fences are accepted as-is.
pub fn apply_styling(text: &str) -> Vec<StyledLine> {
    let mut state = StyleState::default();
    let mut out = Vec::new();

    for line in text.lines() {
        if line.starts_with(FENCE_MARKER) {
            if state.inside_fence {
                state.inside_fence = false;
                state.fence_language.clear();
                out.push(divider());
            } else {
                state.inside_fence = true;
                state.fence_language = line[FENCE_MARKER.len()..].trim().to_string();
                out.push(StyledLine::styled(
                    state.fence_language.clone(),
                    SpanStyle::plain().bold(),
                ));
                out.push(divider());
            }
            continue;
        }

        if state.inside_fence {
            out.push(StyledLine::plain(line));
            continue;
        }

        out.push(style_line(line));
    }

    out
}

/// Style a single line outside any fence.
fn style_line(line: &str) -> StyledLine {
    if let Some(rest) = line.strip_prefix("# ") {
        return StyledLine::styled(
            rest,
            SpanStyle::plain().fg(Color::Yellow).bold().underline(),
        );
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return StyledLine::styled(rest, SpanStyle::plain().fg(Color::Blue).bold());
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return StyledLine::styled(rest, SpanStyle::plain().fg(Color::Red).underline());
    }
    if let Some(inner) = wrapped_in(line, "**") {
        return StyledLine::styled(inner, SpanStyle::plain().bold());
    }
    if let Some(inner) = wrapped_in(line, "__") {
        return StyledLine::styled(inner, SpanStyle::plain().italic());
    }
    if line.contains(INLINE_CODE_MARKER) {
        return inline_code(line);
    }

    StyledLine::plain(line)
}

/// Inner text if `line` both starts and ends with `marker` without the two
/// overlapping.
fn wrapped_in<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    if line.len() < marker.len() * 2 {
        return None;
    }
    line.strip_prefix(marker)?.strip_suffix(marker)
}

/// Alternate plain and code spans at every backtick.
fn inline_code(line: &str) -> StyledLine {
    let code_style = SpanStyle::plain().fg(INLINE_CODE_GREY).dim().bold();

    let spans = line
        .split(INLINE_CODE_MARKER)
        .enumerate()
        .filter(|(_, section)| !section.is_empty())
        .map(|(i, section)| {
            if i % 2 == 0 {
                StyledSpan::raw(section)
            } else {
                StyledSpan::new(section, code_style)
            }
        })
        .collect();

    StyledLine::new(spans)
}

fn divider() -> StyledLine {
    StyledLine::styled(
        DIVIDER_CHAR.to_string().repeat(DIVIDER_WIDTH),
        SpanStyle::plain().fg(Color::Green).dim(),
    )
}
