use std::process::ExitCode;

use orgtree::cli::handlers::exit_code;

fn main() -> ExitCode {
    if let Err(err) = orgtree::run() {
        eprintln!("error: {err:#}");
        return ExitCode::from(exit_code(&err));
    }
    ExitCode::SUCCESS
}
