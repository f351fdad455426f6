//! CLI for modmark - sanitizing Markdown to HTML renderer

use clap::{Parser, Subcommand};
use modmark::{image_placeholder, MarkdownRenderer, PlaceholderOptions, Result};
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render Markdown to sanitized HTML
    Render {
        /// Input Markdown file path (reads stdin if not specified or "-")
        input: Option<PathBuf>,

        /// Output HTML file path (prints to stdout if not specified)
        output: Option<PathBuf>,
    },
    /// Print an SVG placeholder image as a data URI
    Placeholder {
        /// Text shown in the middle of the image
        label: String,

        /// Output file path (prints to stdout if not specified)
        output: Option<PathBuf>,

        /// Image width in pixels
        #[arg(long, default_value_t = 400)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 400)]
        height: u32,

        /// Background colour (#rgb or #rrggbb)
        #[arg(long, default_value = "#1d4ed8")]
        background: String,

        /// Text colour (#rgb or #rrggbb)
        #[arg(long, default_value = "#ffffff")]
        foreground: String,

        /// Font size in pixels (defaults to 12% of the shorter side)
        #[arg(long)]
        font_size: Option<u32>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { input, output } => {
            let markdown = read_input(input.as_ref())?;
            let html = MarkdownRenderer::new().render(&markdown);
            tracing::debug!(
                input_bytes = markdown.len(),
                output_bytes = html.len(),
                "rendered markdown"
            );
            write_output(output.as_ref(), &html)
        }
        Command::Placeholder {
            label,
            output,
            width,
            height,
            background,
            foreground,
            font_size,
        } => {
            let options = PlaceholderOptions {
                width,
                height,
                background,
                foreground,
                font_size,
            };
            let uri = image_placeholder(&label, &options)?;
            write_output(output.as_ref(), &uri)
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
