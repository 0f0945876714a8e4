//! Segment renderer.
//!
//! A [`Prompt`] collects colored [`Segment`]s in append order and draws them
//! into one escape-coded string. Each separator is painted over the *next*
//! segment's background (or reset after the last segment), which produces the
//! powerline "arrow" look.

use anstyle::{Ansi256Color, Reset};

use crate::shell::Shell;
use crate::styling::{self, SeparatorMode};

/// One colored block of the prompt line.
///
/// `None` colors mean "terminal default": no escape is emitted for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    pub separator: String,
    pub separator_fg: Option<u8>,
}

/// Ordered segments plus the rendering configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Prompt {
    shell: Shell,
    mode: SeparatorMode,
    segments: Vec<Segment>,
}

impl Prompt {
    pub fn new(shell: Shell, mode: SeparatorMode) -> Self {
        Self {
            shell,
            mode,
            segments: Vec::new(),
        }
    }

    pub fn shell(&self) -> Shell {
        self.shell
    }

    /// Default separator glyph
    pub fn separator(&self) -> &'static str {
        self.mode.separator()
    }

    /// Thin separator glyph used between path components
    pub fn separator_thin(&self) -> &'static str {
        self.mode.separator_thin()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment using the default separator and separator color.
    pub fn append(
        &mut self,
        text: impl Into<String>,
        fg: impl Into<Option<u8>>,
        bg: impl Into<Option<u8>>,
    ) {
        self.append_with(text, fg, bg, None, None);
    }

    /// Append a segment with an explicit separator.
    ///
    /// `None` for either separator argument selects the prompt default.
    pub fn append_with(
        &mut self,
        text: impl Into<String>,
        fg: impl Into<Option<u8>>,
        bg: impl Into<Option<u8>>,
        separator: Option<&str>,
        separator_fg: Option<u8>,
    ) {
        self.segments.push(Segment {
            text: text.into(),
            fg: fg.into(),
            bg: bg.into(),
            separator: separator.unwrap_or(self.separator()).to_string(),
            separator_fg: Some(separator_fg.unwrap_or(styling::SEPARATOR_FG)),
        });
    }

    /// Render all segments, followed by a reset and one trailing space.
    pub fn draw(&self) -> String {
        let mut out = String::new();
        for (idx, segment) in self.segments.iter().enumerate() {
            out.push_str(&self.fg(segment.fg));
            out.push_str(&self.bg(segment.bg));
            out.push_str(&segment.text);
            match self.segments.get(idx + 1) {
                Some(next) => out.push_str(&self.bg(next.bg)),
                None => out.push_str(&self.reset()),
            }
            out.push_str(&self.fg(segment.separator_fg));
            out.push_str(&segment.separator);
        }
        out.push_str(&self.reset());
        out.push(' ');
        out
    }

    fn fg(&self, code: Option<u8>) -> String {
        code.map(|c| self.shell.wrap_escape(&Ansi256Color(c).render_fg().to_string()))
            .unwrap_or_default()
    }

    fn bg(&self, code: Option<u8>) -> String {
        code.map(|c| self.shell.wrap_escape(&Ansi256Color(c).render_bg().to_string()))
            .unwrap_or_default()
    }

    fn reset(&self) -> String {
        self.shell.wrap_escape(&Reset.render().to_string())
    }
}
