use std::process::ExitCode;

fn main() -> ExitCode {
    gitmini::cli::run()
}
