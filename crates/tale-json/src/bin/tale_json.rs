//! tale-json - inspect and re-encode compiled story JSON.
//!
//! ```text
//! tale-json decode story.json
//! tale-json roundtrip story.json --compact
//! tale-json opcodes
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tale_json::{MnemonicTable, StoryDocument};
use tale_runtime::{Container, RuntimeObject};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "tale-json", version, about = "Decode compiled story JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a story file and print a summary of its root container.
    Decode {
        /// Story JSON file, or `-` for stdin.
        file: PathBuf,
    },
    /// Decode a story file and write it back out as JSON.
    Roundtrip {
        file: PathBuf,
        /// Single-line output instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
    /// List the control command mnemonics.
    Opcodes,
}

/// Use `RUST_LOG` to override the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tale_json=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            error!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Decode { file } => {
            let story = load(&file)?;
            if let Some(version) = story.ink_version {
                println!("inkVersion: {version}");
            }
            print_summary(&story.root, 0);
            Ok(())
        }
        Command::Roundtrip { file, compact } => {
            let story = load(&file)?;
            let out = story.to_json().map_err(|e| e.to_string())?;
            let text = if compact {
                serde_json::to_string(&out)
            } else {
                serde_json::to_string_pretty(&out)
            }
            .map_err(|e| e.to_string())?;
            println!("{text}");
            Ok(())
        }
        Command::Opcodes => {
            let table = MnemonicTable::global().map_err(|e| e.to_string())?;
            for (command, mnemonic) in table.iter() {
                println!("{:<10} {command:?}", mnemonic);
            }
            Ok(())
        }
    }
}

fn load(file: &Path) -> Result<StoryDocument, String> {
    let mut text = String::new();
    if file.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("stdin: {e}"))?;
    } else {
        text = std::fs::read_to_string(file).map_err(|e| format!("{}: {e}", file.display()))?;
    }
    let json: Value =
        serde_json::from_str(&text).map_err(|e| format!("{}: {e}", file.display()))?;
    let story = StoryDocument::from_json(&json).map_err(|e| e.to_string())?;
    info!(file = %file.display(), "decoded story");
    Ok(story)
}

fn print_summary(container: &Container, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{indent}{} content={} named={} flags={}",
        container.name.as_deref().unwrap_or("<anonymous>"),
        container.content.len(),
        container.named_only_content().len(),
        container.count_flags.bits(),
    );
    let children = container
        .content
        .iter()
        .chain(container.named_only_content().values());
    for child in children {
        if let RuntimeObject::Container(c) = child {
            print_summary(c, depth + 1);
        }
    }
}
