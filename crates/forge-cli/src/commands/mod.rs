/// Unwrap a `Result` or print the error to stderr and exit with status 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod generate_ops;
pub mod input_ops;
pub mod lexicon_ops;
pub mod shell_ops;
