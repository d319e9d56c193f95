use std::sync::OnceLock;

use regex::Regex;

/// Matches a fenced block, delimiters and contents, across lines.
fn fenced_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```.*?```").unwrap())
}

fn backtick_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`{3,}").unwrap())
}

/// Clean a model response that should contain only annotated source code.
///
/// Drops every fenced span and any stray run of three or more backticks,
/// then trims. Applying it twice gives the same result as applying it once.
pub fn strip_fences(text: &str) -> String {
    let text = fenced_block().replace_all(text.trim(), "");
    let text = backtick_run().replace_all(&text, "");
    text.trim().to_string()
}

/// Outcome of the line filter for a single line of Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    /// `def name` / `class Name` heads.
    PythonSignature,
    /// Modifier, type, name and a parameter list, nothing after.
    CStyleSignature,
    /// `[export] function|class name(...)`, matched as a prefix.
    ScriptSignature,
    /// Indented by four or more whitespace characters, or by a tab.
    IndentedBody,
    Prose,
}

impl LineVerdict {
    pub fn keeps(self) -> bool {
        !matches!(self, LineVerdict::IndentedBody)
    }
}

// Identifiers are ASCII word characters only; whitespace stays Unicode-aware.
fn python_signature() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(def|class)\s+(?-u:\w)+").unwrap())
}

fn c_style_signature() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*(public|private|protected|static|final)?\s*[A-Za-z0-9_<>\[\],\s]+\s+(?-u:\w)+\s*\([^)]*\)\s*;?$",
        )
        .unwrap()
    })
}

// No end anchor: `export function foo(a, b) {` must match.
fn script_signature() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(export\s+)?(function|class)\s+(?-u:\w)+\s*\([^)]*\)").unwrap()
    })
}

fn indented_body() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\s{4,}|\t)").unwrap())
}

/// Classify a line. Rules are tried in order and the first match wins, so a
/// signature is kept even when it is indented.
pub fn classify_line(line: &str) -> LineVerdict {
    if python_signature().is_match(line) {
        LineVerdict::PythonSignature
    } else if c_style_signature().is_match(line) {
        LineVerdict::CStyleSignature
    } else if script_signature().is_match(line) {
        LineVerdict::ScriptSignature
    } else if indented_body().is_match(line) {
        LineVerdict::IndentedBody
    } else {
        LineVerdict::Prose
    }
}

/// Clean a model response that should contain only Markdown documentation.
///
/// Fenced blocks are removed with their contents, then lines that look like
/// indented code bodies are dropped while single-line signatures survive.
pub fn sanitize_markdown(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let text = fenced_block().replace_all(markdown, "");

    text.split('\n')
        .filter(|line| classify_line(line).keeps())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
