use crate::model::{GeminiGenerator, ModelConfig};
use crate::pipeline;
use crate::prelude::{eprintln, println, *};
use codedoc_core::CodeRequest;
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Args)]
pub struct CommentOptions {
    /// Source file to annotate
    pub file: PathBuf,

    /// Language of the source file (e.g. python, rust)
    #[arg(short, long)]
    pub language: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct DocsOptions {
    /// Source file to document
    pub file: PathBuf,

    /// Language of the source file (e.g. python, rust)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Title used in the documentation heading (defaults to the file name)
    #[arg(long)]
    pub filename: Option<String>,
}

async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read file '{}'", path.display()))
}

fn generator(global: &crate::Global) -> GeminiGenerator {
    let config = ModelConfig::from(global);

    if global.verbose {
        eprintln!("Model: {}", config.model);
    }

    GeminiGenerator::new(config)
}

fn comment_request(options: &CommentOptions, code: String) -> CodeRequest {
    CodeRequest {
        code: Some(code),
        language: options.language.clone(),
        filename: None,
    }
}

fn docs_request(options: &DocsOptions, code: String) -> CodeRequest {
    let filename = options.filename.clone().or_else(|| {
        options
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });

    CodeRequest {
        code: Some(code),
        language: options.language.clone(),
        filename,
    }
}

pub async fn comment(options: CommentOptions, global: crate::Global) -> Result<()> {
    let code = read_source(&options.file).await?;
    let request = comment_request(&options, code);

    let documented = pipeline::document_code(&generator(&global), &request).await?;

    println!("{documented}");

    Ok(())
}

pub async fn docs(options: DocsOptions, global: crate::Global) -> Result<()> {
    let code = read_source(&options.file).await?;
    let request = docs_request(&options, code);

    let markdown = pipeline::generate_markdown_docs(&generator(&global), &request).await?;

    println!("{markdown}");

    Ok(())
}
