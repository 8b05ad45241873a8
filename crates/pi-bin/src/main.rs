//! Parindent entrypoint: feed a file (or stdin) through an editing command.
//!
//! Dev harness around the library crates: builds an in-memory editor state,
//! places carets, dispatches one command, and writes the mutated buffer to
//! stdout. Logs go to stderr via tracing so stdout stays clean for the text.

use anyhow::Result;
use clap::Parser;
use core_actions::{action_for_command, dispatch};
use core_state::EditorState;
use core_text::{Buffer, Region};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "parindent",
    version,
    about = "Align carets to the column beneath the nearest unmatched open parenthesis"
)]
struct Args {
    /// Optional path to read (UTF-8 text). Reads stdin when omitted.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `parindent.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Caret offsets in characters; repeatable. Defaults to a single caret at
    /// the end of the input.
    #[arg(long = "caret")]
    pub carets: Vec<usize>,
    /// Command name to dispatch.
    #[arg(long = "command", default_value = "align_to_open_paren")]
    pub command: String,
}

fn read_input(path: Option<&PathBuf>) -> Result<(String, String)> {
    match path {
        Some(p) => Ok((p.display().to_string(), std::fs::read_to_string(p)?)),
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(("<stdin>".to_string(), content))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let action = action_for_command(&args.command)
        .ok_or_else(|| anyhow::anyhow!("unknown command: {}", args.command))?;

    let (name, content) = read_input(args.path.as_ref())?;
    let config = core_config::load_from(args.config.clone())?;

    let buffer = Buffer::from_str(name, &content)?;
    let end = buffer.len_chars();
    let mut state = EditorState::new(buffer);
    let carets: Vec<Region> = if args.carets.is_empty() {
        vec![Region::caret(end)]
    } else {
        args.carets
            .iter()
            .map(|&offset| Region::caret(offset.min(end)))
            .collect()
    };
    state.selections_mut().replace_all(carets);

    info!(
        target: "runtime",
        command = %args.command,
        selections = state.selections().len(),
        chars = end,
        "dispatch"
    );
    let result = dispatch(action, &mut state, &config);

    print!("{}", state.buffer().contents());

    let final_carets: Vec<usize> = state.selections().iter().map(|r| r.start).collect();
    info!(target: "runtime", dirty = result.dirty, carets = ?final_carets, "done");
    Ok(())
}
