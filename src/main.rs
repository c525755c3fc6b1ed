use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::repl::run;

mod frontend;
mod repl;
mod system;

#[derive(Parser)]
#[clap(about, version, author)]
struct Args {
    /// Read equations from this file instead of stdin
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// Do not print the greeting banner
    #[clap(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    let system = match args.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("unable to open {}", path.display()))?;
            run(BufReader::new(file), &mut stdout, !args.no_banner)?
        }
        None => run(io::stdin().lock(), &mut stdout, !args.no_banner)?,
    };

    if system.is_empty() {
        log::info!("no equations entered");
    } else {
        let terms: usize = system.equations().iter().map(|terms| terms.len()).sum();
        log::debug!("read {} equations with {} terms", system.len(), terms);
    }
    Ok(())
}
