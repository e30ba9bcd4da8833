pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use clap::Parser;

/// Parse the command line and check the combination of options.
///
/// # Errors
///
/// Will return `Err` if the options do not describe a usable store
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::from(args))
}
