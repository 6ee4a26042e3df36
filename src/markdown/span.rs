/// Foreground colours used by the styler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Yellow,
    Blue,
    Red,
    Green,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Name of the colour as written inside a markup tag.
    pub fn markup_name(&self) -> String {
        match self {
            Color::Yellow => "yellow".to_string(),
            Color::Blue => "blue".to_string(),
            Color::Red => "red".to_string(),
            Color::Green => "green".to_string(),
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// Rendering attributes of one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub fg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub italic: bool,
    pub dim: bool,
}

impl SpanStyle {
    /// No attributes at all.
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bold: false,
            underline: false,
            italic: false,
            dim: false,
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }
}

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: SpanStyle,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::plain())
    }
}

/// One output line of the styler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    pub fn new(spans: Vec<StyledSpan>) -> Self {
        Self { spans }
    }

    /// A line emitted untouched.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![StyledSpan::raw(text)])
    }

    /// A line made of a single styled span.
    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self::new(vec![StyledSpan::new(text, style)])
    }

    /// True if any span carries an attribute.
    pub fn is_styled(&self) -> bool {
        self.spans.iter().any(|s| !s.style.is_plain())
    }

    /// The line's text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
