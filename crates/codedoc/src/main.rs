use crate::prelude::*;
use clap::Parser;

mod error;
mod generate;
mod model;
mod pipeline;
mod prelude;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Annotate source code with comments or summarize it as Markdown API docs using Gemini"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Gemini API key
    #[clap(long, env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model identifier
    #[clap(long, env = "CODEDOC_MODEL", global = true, default_value = model::DEFAULT_MODEL)]
    model: String,

    /// Whether to display additional information.
    #[clap(long, env = "CODEDOC_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the documentation endpoints over HTTP
    Serve(crate::server::ServeOptions),

    /// Print a source file with inline comments added
    Comment(crate::generate::CommentOptions),

    /// Print Markdown API documentation for a source file
    Docs(crate::generate::DocsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Comment(options) => crate::generate::comment(options, app.global).await,
        SubCommands::Docs(options) => crate::generate::docs(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let app = App::try_parse_from(["codedoc", "serve"]).unwrap();
        match app.command {
            SubCommands::Serve(options) => {
                assert_eq!(options.host, "127.0.0.1");
                assert_eq!(options.port, 3000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_docs_with_global_flags() {
        let app = App::try_parse_from([
            "codedoc",
            "docs",
            "lib.py",
            "--language",
            "python",
            "--model",
            "gemini-1.5-pro",
            "--api-key",
            "test-key",
        ])
        .unwrap();

        assert_eq!(app.global.model, "gemini-1.5-pro");
        assert_eq!(app.global.api_key.as_deref(), Some("test-key"));
        match app.command {
            SubCommands::Docs(options) => {
                assert_eq!(options.file.to_str(), Some("lib.py"));
                assert_eq!(options.language.as_deref(), Some("python"));
                assert_eq!(options.filename, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        App::command().debug_assert();
    }
}
