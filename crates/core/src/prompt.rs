/// Language label used when the caller did not name one.
pub const UNSPECIFIED_LANGUAGE: &str = "unspecified";

/// Title used in the documentation heading when no filename is given.
pub const DEFAULT_FILENAME: &str = "File";

fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Build the prompt asking the model to return the same code with inline comments.
pub fn build_comment_prompt(code: &str, language: Option<&str>) -> String {
    let language = or_default(language, UNSPECIFIED_LANGUAGE);

    format!(
        "You are a senior developer who writes clean, well-documented code.
Return the SAME code with concise, inline comments inserted.
- Language: {language}
- Keep original logic and structure intact.
- Use correct comment style for the language.
- Do NOT include any markdown fences or headings.
- Do NOT add surrounding explanatory text; return only the code with comments.

Source code:
{code}"
    )
}

/// Build the prompt asking the model for a Markdown API summary of the code.
///
/// The section layout is fixed so every response shares the same outline.
pub fn build_markdown_prompt(code: &str, language: Option<&str>, filename: Option<&str>) -> String {
    let language = or_default(language, UNSPECIFIED_LANGUAGE);
    let filename = or_default(filename, DEFAULT_FILENAME);

    format!(
        "You are generating documentation only. Never repeat or rewrite the source code.
Output Markdown only with the following structure:
# {filename} – API Documentation

## Overview
<1-3 concise paragraphs>

## Public API
- List public function/class signatures only (no bodies).

## Parameters
- For each public API entry, list parameters and short descriptions.

## Returns
- For each entry, state return type/value.

## Raises/Errors
- Possible errors/exceptions.

## Complexity
- Time/space complexity if relevant.

## Side Effects
- IO, mutation, external calls.

## Examples
- Minimal pseudo-signatures or tiny snippets (no bodies).

## Notes
- Caveats and usage notes.

Rules:
- Do NOT include the full source code anywhere.
- Do NOT include fenced blocks with code bodies.
- If no public API is detected, write: \"No public API detected\" under Public API.
- Language: {language}

Source code:
{code}"
    )
}
