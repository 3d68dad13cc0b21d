use clap::{Parser, Subcommand};

use typeahead_cli::commands::{complete_ops, config_ops, demo, serve_ops, stats};

#[derive(Parser)]
#[command(name = "typeahead", about = "Weighted prefix autocomplete")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,

    /// Directory for the JSON trace log (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Complete a single prefix
    Complete {
        /// Prefix to complete (may be empty)
        prefix: String,
        /// Vocabulary file, `word<TAB>frequency` per line (default: built-in)
        #[arg(long)]
        vocab: Option<String>,
        /// Number of completions (default from settings)
        #[arg(short)]
        k: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Include frequencies
        #[arg(long)]
        scores: bool,
    },
    /// Queue every request in a file and serve them by priority
    Serve {
        /// Request file, `<priority> <prefix> [k]` per line
        requests_file: String,
        /// Vocabulary file (default: built-in)
        #[arg(long)]
        vocab: Option<String>,
        /// Output one JSON object per completion
        #[arg(long)]
        json: bool,
        /// Serve on a background worker thread
        #[arg(long)]
        background: bool,
    },
    /// Run the built-in demonstration
    Demo,
    /// Show vocabulary statistics
    Stats {
        /// Vocabulary file (default: built-in)
        #[arg(long)]
        vocab: Option<String>,
        /// Number of globally most frequent words to list
        #[arg(long, default_value = "10")]
        top: usize,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        typeahead_engine::trace_init::init_tracing(std::path::Path::new(dir));
    }
    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Complete {
            prefix,
            vocab,
            k,
            json,
            scores,
        } => complete_ops::complete(vocab.as_deref(), &prefix, k, json, scores),
        Command::Serve {
            requests_file,
            vocab,
            json,
            background,
        } => serve_ops::serve(vocab.as_deref(), &requests_file, json, background),
        Command::Demo => demo::demo(),
        Command::Stats { vocab, top } => stats::stats(vocab.as_deref(), top),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
