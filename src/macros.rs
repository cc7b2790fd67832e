/// Prints a user-facing diagnostic to stderr. Completion mode owns
/// stdout (the shell reads candidates from it), so everything else goes
/// here.
#[macro_export]
macro_rules! print_err {
    ($fmt:expr) => {
        eprintln!(concat!("compline: ", $fmt));
    };
    ($fmt:expr, $($arg:tt)*) => {
        eprintln!(concat!("compline: ", $fmt), $($arg)*);
    };
}
