//! Phalanx -- a platoon battle-arrangement engine.
//!
//! Reads the attacker roster from the first line of stdin and the
//! defender roster from the second, then writes the winning arrangement
//! (or the no-chance sentinel) to stdout. With `--json`, writes the full
//! deployment report as JSON instead.

use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use phalanx::engine::{plan, Deployment};

/// Reads one roster line from the input, trimming the trailing newline.
fn read_line<R: BufRead>(input: &mut R, side: &str) -> Result<String, String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Err(format!("missing {} roster on stdin", side)),
        Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(e) => Err(format!("failed to read {} roster: {}", side, e)),
    }
}

/// Writes the deployment result in the requested format.
fn write_result<W: Write>(out: &mut W, deployment: &Deployment, json: bool) -> io::Result<()> {
    if json {
        match deployment.to_json() {
            Ok(report) => writeln!(out, "{}", report),
            Err(e) => Err(io::Error::other(e)),
        }
    } else {
        writeln!(out, "{}", deployment.render())
    }
}

fn main() -> ExitCode {
    let json = std::env::args().any(|arg| arg == "--json");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let attacker_line = match read_line(&mut input, "attacker") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let defender_line = match read_line(&mut input, "defender") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let deployment = match plan(&attacker_line, &defender_line) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = write_result(&mut out, &deployment, json) {
        eprintln!("failed to write result: {}", e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = out.flush() {
        eprintln!("failed to write result: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
