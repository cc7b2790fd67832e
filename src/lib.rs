//! Programmable tab completion and `key = value` config files for
//! command-line programs.
//!
//! Programs using this crate implement their shell completion entirely in
//! Rust, next to the normal program code, reusing the flags they already
//! declare. The same flag set doubles as the schema for a per-user
//! configuration file.
//!
//! ```no_run
//! use compline::{complete_if_requested, load_config, FlagCompleter, FlagSet, SetCompleter};
//!
//! let mut flags = FlagSet::new();
//! flags.add_bool("verbose", false, "Print what is going on.");
//! flags.add_str("remote", "origin", "The remote to push to.");
//!
//! // Apply `~/.pushrc` onto the flags, if it exists.
//! load_config(&mut flags, "pushrc").expect("failed to load ~/.pushrc");
//!
//! // If this is the shell asking for completions, answer and exit.
//! let completer = FlagCompleter::new(&flags, SetCompleter::new(vec!["staging", "production"]));
//! complete_if_requested(&completer);
//!
//! // Normal program execution continues here.
//! ```
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod completion;
pub mod config;
pub mod dispatch;
pub mod flags;
pub mod line_parser;
pub mod logger;

pub use crate::completion::{Completer, FlagCompleter, SetCompleter};
pub use crate::config::{load_config, load_config_from, parse_config, ConfigError};
pub use crate::dispatch::{complete_if_requested, completion_requested, run_completion, COMPLETION_ARG};
pub use crate::flags::{Flag, FlagError, FlagSet, Value};
pub use crate::line_parser::{parse_line, CommandLine};
