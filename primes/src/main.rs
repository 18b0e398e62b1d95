use std::process::ExitCode;

use primality_driver::Primes;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let logger = primality_log::Builder::from_env_or(primality_log::DEFAULT_FILTER_ENV, "warn");
    let mut stdout = std::io::stdout().lock();
    match Primes::run(std::env::args_os(), logger, &mut stdout) {
        Ok(code) => code,
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}
