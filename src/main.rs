use std::{env, process};

use anyhow::Result;
use lazy_static::lazy_static;
use mimetypes::*;
use tracing_subscriber::EnvFilter;

mod config;
use crate::config::*;

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const COMMIT_ID: &str = env!("GIT_COMMITID");

const STDIN_INPUT: &str = "-";

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_filter())
        .with_writer(std::io::stderr)
        .init();

    if CONFIG.verbose {
        eprintln!("{} {} ({})", PKG_NAME, PKG_VERSION, COMMIT_ID);
        tracing::debug!(mode = ?CONFIG.mode, inputs = ?CONFIG.inputs, "parsed command line");
    }

    let table = mimetypes::init();

    match CONFIG.mode {
        Mode::List => {
            let mut entries: Vec<(&str, &str)> = table.iter().collect();
            entries.sort_unstable();
            for (ext, mime) in entries {
                println!("{}\t{}\t{}", ext, mime, get_mime_category(mime));
            }
        }
        Mode::Content => sniff_inputs(&CONFIG.inputs).await?,
        Mode::Category => {
            require_inputs();
            for input in &CONFIG.inputs {
                println!("{}\t{}", input, get_mime_category(input.as_str()));
            }
        }
        Mode::Extension | Mode::Url => {
            require_inputs();
            for input in &CONFIG.inputs {
                let mime = match CONFIG.mode {
                    Mode::Url => get_mime_type_for_url(input),
                    _ => get_mime_type(input.as_str()),
                };
                println!("{}\t{}\t{}", input, mime, get_mime_category(mime));
            }
        }
    }

    Ok(())
}

fn require_inputs() {
    if CONFIG.inputs.is_empty() {
        Config::usage();
    }
}

// Sniffs every input, reporting failures without stopping at the first one
async fn sniff_inputs(inputs: &[String]) -> Result<()> {
    let stdin_only = [String::from(STDIN_INPUT)];
    let inputs = if inputs.is_empty() { &stdin_only[..] } else { inputs };

    let mut failures = 0usize;
    for input in inputs {
        let sniffed = if input == STDIN_INPUT {
            let mut stdin = tokio::io::stdin();
            get_mime_type_by_content_from_async_reader(&mut stdin).await
        } else {
            get_mime_type_by_content_async(input).await
        };

        match sniffed {
            Ok(mime) => println!("{}\t{}\t{}", input, mime, get_mime_category(mime)),
            Err(e) => {
                eprintln!("{}: {}", input, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(anyhow::anyhow!("{} of {} input(s) could not be sniffed", failures, inputs.len()));
    }
    Ok(())
}
