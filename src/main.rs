//! # Forth
//!
//! Interactive interpreter for a Forth-style stack language.
//!

use clap::Parser;
use std::path::PathBuf;

mod term;

#[derive(Parser, Debug)]
#[command(name = "forth", version, about)]
pub struct Args {
    /// Files to run line by line instead of starting an interactive session.
    pub files: Vec<PathBuf>,

    /// Print errors without ANSI styling.
    #[arg(long)]
    pub plain: bool,

    /// Text shown while waiting for a line.
    #[arg(long, default_value = "")]
    pub prompt: String,
}

fn main() {
    term::main(Args::parse());
}
