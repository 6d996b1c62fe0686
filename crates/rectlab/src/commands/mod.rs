pub mod check;
pub mod evaluate;
pub mod init;
pub mod list;
pub mod pair;
pub mod scene;

use std::fmt::Display;

/// Prints an error and exits with status 1.
pub fn fail(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
