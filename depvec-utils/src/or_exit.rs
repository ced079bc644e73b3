use std::fmt::Display;
use std::process;

use colored::Colorize;

/// Exit the program with an error message when a result is an error.
pub trait OrExit<T> {
    fn or_exit(self) -> T;
}

impl<T, E> OrExit<T> for ::std::result::Result<T, E>
where
    E: Display,
{
    fn or_exit(self) -> T {
        match self {
            Ok(val) => val,
            Err(err) => {
                stderr!("{} {}", "error:".red().bold(), err);
                process::exit(1)
            }
        }
    }
}
