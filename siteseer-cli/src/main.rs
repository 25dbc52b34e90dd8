//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = siteseer_cli::run() {
        eprintln!("siteseer: {err}");
        std::process::exit(1);
    }
}
