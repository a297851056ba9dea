#![forbid(unsafe_code)]

//! Rule-based line highlighting.
//!
//! A [`Highlighter`] is an ordered list of [`HighlightRule`]s plus the file
//! pattern it applies to. [`highlight_line`] turns one line into coloured
//! [`HighlightSpan`]s:
//!
//! - Rules are applied last to first, so later rules claim text first.
//! - A match is painted only if none of its bytes is already claimed; a
//!   match is never partially painted.
//! - Empty matches are ignored.
//! - Whatever no rule claims is emitted in the default foreground, so the
//!   spans always tile the whole line in order.
//!
//! Highlighting is recomputed on every draw and holds no state.

use std::ops::Range;
use std::sync::Arc;

use regex::Regex;
use slate_render::PackedRgba;
use slate_style::Palette;

/// A regex and the colour names its matches are drawn in.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    pub pattern: Regex,
    /// Foreground colour name, resolved through the palette.
    pub fg: String,
    /// Optional background colour name.
    pub bg: Option<String>,
}

impl HighlightRule {
    /// Compile `pattern` into a rule drawn in `fg`.
    pub fn new(pattern: &str, fg: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            fg: fg.into(),
            bg: None,
        })
    }

    #[must_use]
    pub fn with_background(mut self, bg: impl Into<String>) -> Self {
        self.bg = Some(bg.into());
        self
    }
}

/// A highlighting profile for one kind of file.
#[derive(Debug, Clone)]
pub struct Highlighter {
    name: String,
    file_pattern: Regex,
    comment_prefix: String,
    rules: Vec<HighlightRule>,
}

impl Highlighter {
    #[must_use]
    pub fn new(name: impl Into<String>, file_pattern: Regex) -> Self {
        Self {
            name: name.into(),
            file_pattern,
            comment_prefix: String::new(),
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: HighlightRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push_rule(&mut self, rule: HighlightRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn file_pattern(&self) -> &Regex {
        &self.file_pattern
    }

    /// Line comment marker, empty if the language has none.
    #[must_use]
    pub fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    /// Whether this profile applies to `path`.
    #[must_use]
    pub fn matches_path(&self, path: &str) -> bool {
        self.file_pattern.is_match(path)
    }
}

/// A coloured byte range of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub range: Range<usize>,
    pub fg: PackedRgba,
    pub bg: Option<PackedRgba>,
}

/// Colour `line` with `rules`.
///
/// Unknown foreground names fall back to
/// [`UNKNOWN_COLOR`](slate_style::UNKNOWN_COLOR); unknown background names
/// are dropped.
#[must_use]
pub fn highlight_line(
    line: &str,
    rules: &[HighlightRule],
    palette: &Palette,
    default_fg: PackedRgba,
) -> Vec<HighlightSpan> {
    // claims[i] = index into `painted` of the match that owns byte i.
    let mut claims: Vec<Option<usize>> = vec![None; line.len()];
    let mut painted: Vec<(PackedRgba, Option<PackedRgba>)> = Vec::new();

    for rule in rules.iter().rev() {
        let fg = palette.highlight_fg(&rule.fg);
        let bg = rule.bg.as_deref().and_then(|name| palette.named(name));
        for m in rule.pattern.find_iter(line) {
            let range = m.range();
            if range.is_empty() || claims[range.clone()].iter().any(Option::is_some) {
                continue;
            }
            let id = painted.len();
            painted.push((fg, bg));
            claims[range].fill(Some(id));
        }
    }

    let mut spans = Vec::new();
    let mut start = 0;
    while start < line.len() {
        let owner = claims[start];
        let mut end = start + 1;
        while end < line.len() && claims[end] == owner {
            end += 1;
        }
        let (fg, bg) = owner.map_or((default_fg, None), |id| painted[id]);
        spans.push(HighlightSpan {
            range: start..end,
            fg,
            bg,
        });
        start = end;
    }
    spans
}

/// Known highlighter profiles, looked up by file path or name.
#[derive(Debug, Clone, Default)]
pub struct HighlighterRegistry {
    profiles: Vec<Arc<Highlighter>>,
}

impl HighlighterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile and return the shared handle editors attach.
    pub fn register(&mut self, highlighter: Highlighter) -> Arc<Highlighter> {
        let shared = Arc::new(highlighter);
        tracing::debug!(name = shared.name(), "registered highlighter");
        self.profiles.push(Arc::clone(&shared));
        shared
    }

    /// First registered profile whose file pattern matches `path`.
    #[must_use]
    pub fn for_path(&self, path: &str) -> Option<Arc<Highlighter>> {
        self.profiles
            .iter()
            .find(|h| h.matches_path(path))
            .cloned()
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<Arc<Highlighter>> {
        self.profiles.iter().find(|h| h.name() == name).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|h| h.name())
    }
}
