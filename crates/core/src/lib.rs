//! Core library for codedoc
//!
//! This crate implements the **Functional Core** of the codedoc service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`codedoc_core`** (this crate): Pure transformation functions with zero I/O
//! - **`codedoc`**: HTTP server, CLI, and the model client (the Imperative Shell)
//!
//! Every request runs the same pipeline: validate the body, render a prompt,
//! call the model, sanitize the reply. Only the model call lives in the shell;
//! everything else is here and can be tested with plain strings.
//!
//! # Module Organization
//!
//! - [`request`]: The request body and its validation
//! - [`prompt`]: The two fixed instruction templates
//! - [`sanitize`]: Cleanup of raw model output (fence stripping, line filtering)
//!
//! # Example Usage
//!
//! ```rust
//! use codedoc_core::{build_markdown_prompt, sanitize_markdown, CodeRequest};
//!
//! let request = CodeRequest::new("def add(a, b):\n    return a + b").with_language("python");
//! let code = request.validate().unwrap();
//! let prompt = build_markdown_prompt(code, request.language.as_deref(), None);
//! assert!(prompt.contains("# File – API Documentation"));
//!
//! // Pretend the model echoed the body anyway.
//! let reply = "## Public API\ndef add(a, b):\n    return a + b";
//! assert_eq!(sanitize_markdown(reply), "## Public API\ndef add(a, b):");
//! ```

pub mod prompt;
pub mod request;
pub mod sanitize;

pub use prompt::{build_comment_prompt, build_markdown_prompt};
pub use request::{CodeRequest, ValidationError};
pub use sanitize::{sanitize_markdown, strip_fences};
