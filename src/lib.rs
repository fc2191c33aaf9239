//! Regkeygen library crate
//!
//! This crate provides the core functionality for the `regkeygen` CLI. It is
//! organized into small modules: `template` (the registry-entry template and
//! placeholder substitution), `registry` (the supported-extension list and
//! block assembly), and `clipboard` (cross-platform clipboard helper). The
//! binary `src/main.rs` calls `regkeygen_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod clipboard;
pub mod registry;
pub mod template;

use clap::{ArgAction, Parser};

use crate::clipboard::copy_to_clipboard;
use crate::registry::{SUPPORTED_EXTENSIONS, registry_entries, section_text};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Render entries for these extensions instead of the built-in list
    #[arg(short = 'e', long = "extension")]
    extensions: Vec<String>,

    /// Write the entries to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Copy the entries to the clipboard
    #[arg(long = "clipboard", action = ArgAction::SetTrue)]
    clipboard: bool,
}

/// Run the regkeygen CLI.
///
/// This function is the high-level entrypoint used by the `regkeygen`
/// binary. With no arguments it renders one registry-entry block per
/// built-in extension to stdout, which is the tool's whole job; the flags
/// only select a different extension set or destination. Errors are printed
/// to stderr and cause the process to exit with a non-zero code where
/// appropriate.
///
/// Behavior summary:
/// - default: print every block for the built-in list, in list order, each
///   followed by a blank line.
/// - `--extension`: render the given extensions instead (repeatable; order
///   preserved, duplicates kept).
/// - `--output`: write the same bytes to a file instead of stdout.
/// - `--clipboard`: also copy the emitted document to the clipboard for
///   pasting into the `.iss` file; failure is a warning, not an error.
///
/// Example:
///
/// ```no_run
/// regkeygen_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();

    let extensions: Vec<&str> = if cli.extensions.is_empty() {
        SUPPORTED_EXTENSIONS.to_vec()
    } else {
        cli.extensions.iter().map(String::as_str).collect()
    };

    let entries = registry_entries(&extensions).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    match &cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, section_text(&entries)) {
                eprintln!("error: failed to write {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => {
            for block in &entries {
                println!("{}", block);
            }
        }
    }

    if cli.clipboard && let Err(e) = copy_to_clipboard(&section_text(&entries)) {
        eprintln!("warning: failed to copy to clipboard: {}", e);
    }
}
