extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::Args;
use ansi_term::Style;
use forth::lang::Column;
use forth::mach::Runtime;
use linefeed::{Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `FORTH_LOG=debug`.
const LOG_ENV: &str = "FORTH_LOG";

pub fn main(args: Args) {
    init_tracing();
    let result = if args.files.is_empty() {
        main_loop(&args)
    } else {
        run_files(&args)
    };
    if let Err(error) = result {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main_loop(args: &Args) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("forth")?;
    command.set_prompt(&args.prompt)?;
    command.set_report_signal(Signal::Interrupt, true);

    loop {
        let line = match command.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                command.lock_reader().cancel_read_line()?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let output = runtime.execute_line(&line);
        command.write_fmt(format_args!(
            "{}\n",
            decorate(&runtime, &line, &output, !args.plain)
        ))?;
        if !line.trim().is_empty() {
            command.add_history_unique(line);
        }
    }
    Ok(())
}

fn run_files(args: &Args) -> std::io::Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C will not stop the run");
    }
    let mut runtime = Runtime::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in &args.files {
        info!(path = %path.display(), "running file");
        for line in open(path)?.lines() {
            if interrupted.load(Ordering::SeqCst) {
                warn!(path = %path.display(), "interrupted");
                return Ok(());
            }
            let line = line?;
            let output = runtime.execute_line(&line);
            writeln!(out, "{}", decorate(&runtime, &line, &output, !args.plain))?;
        }
    }
    Ok(())
}

fn open(path: &Path) -> std::io::Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(error) => Err(std::io::Error::new(
            error.kind(),
            format!("{}: {}", path.display(), error),
        )),
    }
}

/// Display text for a line, with the error in bold and the failing word
/// underlined in an echo of the line.
fn decorate(runtime: &Runtime, line: &str, output: &str, styled: bool) -> String {
    let error = match runtime.last_error() {
        Some(error) if styled => error,
        _ => return output.to_string(),
    };
    let message = error.to_string();
    let printed = output.strip_suffix(message.as_str()).unwrap_or("");
    let mut s = String::new();
    if error.is_located() {
        s.push_str(&underline(line, error.column()));
        s.push('\n');
    }
    s.push_str(printed);
    s.push_str(&Style::new().bold().paint(message).to_string());
    s
}

fn underline(ins: &str, column: &Column) -> String {
    match (ins.get(..column.start), ins.get(column.clone()), ins.get(column.end..)) {
        (Some(before), Some(word), Some(after)) => format!(
            "{}{}{}",
            before,
            Style::new().underline().paint(word),
            after
        ),
        _ => ins.to_string(),
    }
}
