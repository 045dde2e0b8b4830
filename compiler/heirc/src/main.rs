//! The `heir` command.

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;
use std::{env, fs};

use heir_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use heirc::{expand_file, DriverError, ExpandOptions};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: heir [options] <input> [<output>]

Expand struct inheritance in a C source file.

Arguments:
  <input>     C file to process
  <output>    destination path; `-` or omitted writes to stdout

Options:
      --raw    treat the input as already preprocessed
      --dump   print the struct hierarchy instead of the rewritten file
  -h, --help   show this help
";

struct Args {
    input: String,
    output: Option<String>,
    opts: ExpandOptions,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("heir: {message}");
            eprint!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    run(&args)
}

fn parse_args() -> Result<Option<Args>, String> {
    let mut opts = ExpandOptions::default();
    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{USAGE}");
                return Ok(None);
            }
            "--raw" => opts.raw = true,
            "--dump" => opts.dump = true,
            other if other.starts_with('-') && other != "-" => {
                return Err(format!("unknown option `{other}`"));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let Some(input) = positional.next() else {
        return Err("missing input file".to_owned());
    };
    let output = positional.next();
    if positional.next().is_some() {
        return Err("too many arguments".to_owned());
    }
    Ok(Some(Args {
        input,
        output,
        opts,
    }))
}

fn run(args: &Args) -> ExitCode {
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, io::stderr().is_terminal());
    let expansion = match expand_file(Path::new(&args.input), args.opts) {
        Ok(expansion) => expansion,
        Err(DriverError::Fatal(diag)) => {
            emitter.emit(&diag);
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("heir: {err}");
            return ExitCode::FAILURE;
        }
    };

    for diag in expansion.queue.iter() {
        emitter.emit(diag);
    }
    if expansion.queue.has_errors() {
        // Never write output for a run that reported errors.
        return ExitCode::FAILURE;
    }

    if let Some(tree) = expansion.tree {
        print!("{tree}");
        return ExitCode::SUCCESS;
    }

    match args.output.as_deref() {
        None | Some("-") => {
            let mut stdout = io::stdout().lock();
            if stdout.write_all(expansion.output.as_bytes()).is_err() {
                return ExitCode::FAILURE;
            }
        }
        Some(path) => {
            if let Err(source) = fs::write(path, &expansion.output) {
                let err = DriverError::Write {
                    path: path.into(),
                    source,
                };
                eprintln!("heir: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
