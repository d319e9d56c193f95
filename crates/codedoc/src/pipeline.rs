use codedoc_core::{
    build_comment_prompt, build_markdown_prompt, sanitize_markdown, strip_fences, CodeRequest,
};
use log::debug;

use crate::error::Error;
use crate::model::Generator;

/// Return the request's code with inline comments added by the model.
///
/// Validation runs before anything else; an invalid request never reaches the
/// generator.
pub async fn document_code<G: Generator>(
    generator: &G,
    request: &CodeRequest,
) -> Result<String, Error> {
    let code = request.validate()?;
    let prompt = build_comment_prompt(code, request.language.as_deref());
    debug!("Built comment prompt ({} chars)", prompt.len());

    let raw = generator.generate(&prompt).await?;

    Ok(strip_fences(&raw))
}

/// Return a Markdown API summary of the request's code.
pub async fn generate_markdown_docs<G: Generator>(
    generator: &G,
    request: &CodeRequest,
) -> Result<String, Error> {
    let code = request.validate()?;
    let prompt = build_markdown_prompt(
        code,
        request.language.as_deref(),
        request.filename.as_deref(),
    );
    debug!("Built markdown prompt ({} chars)", prompt.len());

    let raw = generator.generate(&prompt).await?;

    Ok(sanitize_markdown(raw.trim()))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::error::Error;
    use crate::model::Generator;

    /// Generator that replays a canned reply and records the prompts it saw.
    pub struct FakeGenerator {
        reply: Result<String, String>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    impl Generator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(Error::Upstream)
        }
    }
}
