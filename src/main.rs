//! Entry point for the GranaCalc binary.
//!
//! All of the behaviour lives in the library; the binary only runs the
//! command line flow and turns an error into a non-zero exit code.  The
//! error message printed here is the same alert text the original form
//! shows inline.

fn main() {
    if let Err(err) = granacalc::cli::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
