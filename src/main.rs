use anyhow::{Context, Result};
use maud::Render;
use markview::components::code_block::HighlightedCodeBlock;
use markview::components::layout::page_wrapper;
use markview::{Config, Highlighter, MarkdownRenderer, assets};
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber; `RUST_LOG` takes precedence.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Reads markdown from the configured file or standard input.
fn read_input(config: &Config) -> Result<String> {
    if config.reads_stdin() {
        return io::read_to_string(io::stdin()).context("Failed to read markdown from stdin");
    }

    fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read markdown file: {}", config.input.display()))
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_level);
    config.validate().context("Invalid configuration")?;

    let markdown = read_input(&config)?;

    let highlighter = Highlighter::with_theme(&config.theme)
        .with_context(|| format!("Failed to load theme: {}", config.theme))?;
    if let Some(path) = &config.stylesheet {
        assets::write_stylesheet(path, &highlighter)?;
        tracing::info!(path = %path.display(), "Wrote stylesheet");
    }
    let page_css = if config.standalone {
        Some(assets::stylesheet(&highlighter).context("Failed to bundle stylesheet")?)
    } else {
        None
    };

    let renderer =
        MarkdownRenderer::with_code_block(HighlightedCodeBlock::with_highlighter(highlighter))
            .with_semantic_strong(config.semantic_strong);

    let tree = renderer.render(&markdown);

    let html = match &page_css {
        Some(css) => page_wrapper(&config.document_title(), css, tree.render()).into_string(),
        None => tree.to_html(),
    };

    match &config.output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "Wrote HTML");

            if config.open {
                open::that(path)
                    .with_context(|| format!("Failed to open output: {}", path.display()))?;
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write HTML to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
