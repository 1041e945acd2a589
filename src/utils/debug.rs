use once_cell::sync::Lazy;

/// Global debug mode flag, initialized once at startup
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("PAXLINE_DEBUG").is_ok());

/// Conditional debug output macro
///
/// Prints to stderr only when `PAXLINE_DEBUG` is set.
///
/// # Examples
///
/// ```
/// paxline::debug_println!("Projecting {} rows", 50);
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if *$crate::utils::debug::DEBUG_MODE {
            eprintln!($($arg)*);
        }
    };
}

/// Re-export for internal use
pub use debug_println;
