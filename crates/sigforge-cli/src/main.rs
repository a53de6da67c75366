//! sigforge CLI: render HTML email signatures from a form file.
//!
//! Provides four commands: `templates`, `init`, `render`, and `gallery`.
//!
//! Every command works from one JSON form file (`signature.json` by default),
//! validated by [`sigforge_core::SignatureForm::validate`] before rendering.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sigforge_core::config::DEFAULT_FORM_FILE;

#[derive(Parser)]
#[command(
    name = "sigforge",
    about = "Email signature generator with 25 table-based HTML templates",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the signature form file
    #[arg(long, global = true, default_value = DEFAULT_FORM_FILE)]
    form: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available signature templates
    Templates {
        /// Print template metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a new signature form file to fill in
    Init {
        /// Template id to preselect (prompts if omitted)
        #[arg(long)]
        template: Option<String>,

        /// Font family label, e.g. "Georgia" (prompts if omitted together with --template)
        #[arg(long)]
        font: Option<String>,

        /// Overwrite an existing form file
        #[arg(long)]
        force: bool,
    },

    /// Render the signature described by the form file
    Render {
        /// Override the template id stored in the form
        #[arg(long, short)]
        template: Option<String>,

        /// Wrap the signature in a standalone HTML page (saved as signature-<name>.html
        /// unless --output is given)
        #[arg(long)]
        document: bool,

        /// HTML-escape every interpolated value
        #[arg(long)]
        escape: bool,

        /// Output file (prints to stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Render every template into a directory with an index page
    Gallery {
        /// Directory to write the pages to
        #[arg(long, default_value = "gallery")]
        out_dir: PathBuf,

        /// HTML-escape every interpolated value
        #[arg(long)]
        escape: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Templates { json } => {
            commands::templates::run(json).await?;
        }
        Commands::Init {
            template,
            font,
            force,
        } => {
            commands::init::run(&cli.form, template.as_deref(), font.as_deref(), force).await?;
        }
        Commands::Render {
            template,
            document,
            escape,
            output,
        } => {
            commands::render::run(
                &cli.form,
                template.as_deref(),
                document,
                escape,
                output.as_deref(),
            )
            .await?;
        }
        Commands::Gallery { out_dir, escape } => {
            commands::gallery::run(&cli.form, &out_dir, escape).await?;
        }
    }

    Ok(())
}
