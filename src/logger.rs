//! An optional log-file backend for host programs.
use std::path::PathBuf;

use backtrace::Backtrace;
use log::Level;

fn log_file_path(name: &str) -> PathBuf {
    dirs::home_dir()
        .expect("where's your home dir?")
        .join(format!(".{}.log", name))
}

/// Installs a `log` backend that appends into `~/.<name>.log`.
///
/// Completion mode cannot log to the terminal: the shell consumes stdout
/// and anything on stderr ends up in the middle of the user's prompt.
/// Host programs that want completion diagnostics preserved somewhere can
/// call this once, early in `main`. Panics are logged too.
pub fn install_logger(name: &str) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let color = match record.level() {
                Level::Error => "\x1b[1;31m",
                Level::Warn => "\x1b[1;33m",
                _ => "\x1b[34m",
            };

            out.finish(format_args!(
                "{}[{}] {}:\x1b[0m {}",
                color,
                record.level(),
                record.target(),
                message
            ))
        })
        .level(if cfg!(debug_assertions) {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        })
        .chain(fern::log_file(log_file_path(name)).expect("failed to open the log file"))
        .apply()
        .expect("failed to initialize the logger");

    std::panic::set_hook(Box::new(|info| {
        error!("{}", info);
        error!("{:?}", Backtrace::new());
    }));
}
