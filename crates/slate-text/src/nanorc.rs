#![forbid(unsafe_code)]

//! Parser for nanorc-style highlighter definitions.
//!
//! Supported directives:
//!
//! ```text
//! syntax go "\.go$"
//! comment "//"
//! color brightblue "\b(func|return)\b"
//! color green,black "//.*" "/\*.*\*/"
//! icolor yellow "\btodo\b"
//! # comment lines and blank lines are ignored
//! ```
//!
//! `syntax` must come first and is the only directive whose failure is
//! fatal. A `color` rule with a bad regex is skipped with a warning so one
//! typo does not disable the whole profile. Directives this highlighter has
//! no use for (`header`, `linter`, multi-line `start=`/`end=` regions, ...)
//! are skipped.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::highlight::{HighlightRule, Highlighter};

/// Errors that make a definition unusable.
#[derive(Debug)]
pub enum HighlighterError {
    /// No `syntax` directive before the first rule, or none at all.
    MissingSyntax,
    /// A `syntax` directive without a name or a quoted file pattern.
    MalformedSyntax { line: usize },
    /// The file pattern of the `syntax` directive does not compile.
    InvalidFilePattern { line: usize, source: regex::Error },
}

impl fmt::Display for HighlighterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSyntax => write!(f, "definition has no syntax directive"),
            Self::MalformedSyntax { line } => {
                write!(f, "line {line}: expected `syntax NAME \"regex\"`")
            }
            Self::InvalidFilePattern { line, source } => {
                write!(f, "line {line}: invalid file pattern: {source}")
            }
        }
    }
}

impl std::error::Error for HighlighterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFilePattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse a definition into a [`Highlighter`].
pub fn parse_nanorc(source: &str) -> Result<Highlighter, HighlighterError> {
    let mut highlighter: Option<Highlighter> = None;

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(k, r)| (k, r.trim_start()));

        match keyword {
            "syntax" => {
                if highlighter.is_some() {
                    tracing::warn!(line = line_no, "ignoring second syntax directive");
                    continue;
                }
                highlighter = Some(parse_syntax(rest, line_no)?);
            }
            "comment" => {
                let Some(current) = highlighter.take() else {
                    return Err(HighlighterError::MissingSyntax);
                };
                highlighter = Some(match quoted_args(rest).as_deref() {
                    Some([prefix]) => current.with_comment_prefix(prefix.as_str()),
                    _ => {
                        tracing::warn!(line = line_no, "malformed comment directive");
                        current
                    }
                });
            }
            "color" | "icolor" => {
                let Some(current) = highlighter.as_mut() else {
                    return Err(HighlighterError::MissingSyntax);
                };
                for rule in parse_color(rest, keyword == "icolor", line_no) {
                    current.push_rule(rule);
                }
            }
            other => {
                tracing::debug!(line = line_no, directive = other, "skipping directive");
            }
        }
    }

    highlighter.ok_or(HighlighterError::MissingSyntax)
}

fn parse_syntax(rest: &str, line: usize) -> Result<Highlighter, HighlighterError> {
    let (name, patterns) = rest
        .split_once(char::is_whitespace)
        .ok_or(HighlighterError::MalformedSyntax { line })?;
    let name = name.trim_matches('"');
    let pattern = quoted_args(patterns.trim_start())
        .and_then(|args| args.into_iter().next())
        .ok_or(HighlighterError::MalformedSyntax { line })?;
    if name.is_empty() {
        return Err(HighlighterError::MalformedSyntax { line });
    }
    let file_pattern =
        Regex::new(&pattern).map_err(|source| HighlighterError::InvalidFilePattern { line, source })?;
    Ok(Highlighter::new(name, file_pattern))
}

/// Rules of one `color`/`icolor` line. Bad regexes are skipped.
fn parse_color(rest: &str, case_insensitive: bool, line: usize) -> Vec<HighlightRule> {
    let Some((spec, patterns)) = rest.split_once(char::is_whitespace) else {
        tracing::warn!(line, "color directive without a pattern");
        return Vec::new();
    };
    let (fg, bg) = match spec.split_once(',') {
        Some((fg, bg)) => (fg, (!bg.is_empty()).then(|| bg.to_owned())),
        None => (spec, None),
    };
    let Some(patterns) = quoted_args(patterns.trim_start()) else {
        tracing::warn!(line, "unsupported color directive (regions are not supported)");
        return Vec::new();
    };

    patterns
        .iter()
        .filter_map(|pattern| {
            match RegexBuilder::new(pattern)
                .case_insensitive(case_insensitive)
                .build()
            {
                Ok(regex) => Some(HighlightRule {
                    pattern: regex,
                    fg: fg.to_owned(),
                    bg: bg.clone(),
                }),
                Err(err) => {
                    tracing::warn!(line, %err, "skipping color rule with invalid regex");
                    None
                }
            }
        })
        .collect()
}

/// Split `"a" "b c"` into `["a", "b c"]`.
///
/// A quoted argument ends at a `"` followed by whitespace or the end of the
/// line, so patterns may contain bare quotes. Returns `None` if anything
/// other than quoted arguments is present, or if there are none.
fn quoted_args(s: &str) -> Option<Vec<String>> {
    let mut args = Vec::new();
    let mut rest = s.trim();
    while !rest.is_empty() {
        let body = rest.strip_prefix('"')?;
        let close = body
            .char_indices()
            .find(|&(i, c)| {
                c == '"'
                    && body[i + 1..]
                        .chars()
                        .next()
                        .is_none_or(char::is_whitespace)
            })
            .map(|(i, _)| i)?;
        args.push(body[..close].to_owned());
        rest = body[close + 1..].trim_start();
    }
    (!args.is_empty()).then_some(args)
}
