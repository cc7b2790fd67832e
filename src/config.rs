//! `key = value` configuration files applied onto a [`FlagSet`].
//!
//! The format is a plain line-oriented text file: blank lines and lines
//! starting with `#` are skipped, everything else must look like
//! `key = value`. Values are applied through the flag set's setter, so a
//! saved configuration uses exactly the same names and types as the
//! program's command-line flags.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use failure::Error;

use crate::flags::FlagSet;

#[derive(Debug, Fail)]
pub enum ConfigError {
    #[fail(display = "illegal config line `{}'", line)]
    IllegalLine { line: String },
    #[fail(display = "unknown option `{}'", key)]
    UnknownOption { key: String },
}

/// Reads `key = value` lines from `reader` and applies them onto `flags`.
///
/// Whitespace around the key, the `=`, and the value is insignificant;
/// everything after the first `=` (including further `=` characters)
/// belongs to the value. Processing stops at the first error and flags
/// set by earlier lines stay set.
pub fn parse_config<R: BufRead>(flags: &mut FlagSet, reader: R) -> Result<(), Error> {
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = match line.find('=') {
            Some(i) => (line[..i].trim(), line[i + 1..].trim()),
            None => {
                return Err(ConfigError::IllegalLine {
                    line: line.to_owned(),
                }
                .into());
            }
        };

        if flags.lookup(key).is_none() {
            return Err(ConfigError::UnknownOption {
                key: key.to_owned(),
            }
            .into());
        }

        flags.set(key, value)?;
    }

    Ok(())
}

/// Like [`load_config`], but against an explicit path instead of the
/// home directory.
pub fn load_config_from<P: AsRef<Path>>(flags: &mut FlagSet, path: P) -> Result<(), Error> {
    let file = match File::open(path.as_ref()) {
        Ok(file) => file,
        // No saved configuration. Leave the defaults as they are.
        Err(ref err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    parse_config(flags, BufReader::new(file))
}

/// Loads `~/.<basename>` onto `flags`. A missing file is not an error:
/// the flags simply keep their defaults.
pub fn load_config(flags: &mut FlagSet, basename: &str) -> Result<(), Error> {
    let home = match dirs::home_dir() {
        Some(home) => home,
        None => return Err(format_err!("failed to locate the home directory")),
    };

    load_config_from(flags, home.join(format!(".{}", basename)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn test_flags() -> FlagSet {
        let mut flags = FlagSet::new();
        flags.add_int("int", 0, "An int-valued flag");
        flags.add_str("string", "STRING", "A string-valued flag");
        flags
    }

    #[test]
    fn basic() {
        let mut flags = test_flags();
        let config = "# this is a comment\nint = 17\n\nstring = hello world\n";
        parse_config(&mut flags, config.as_bytes()).unwrap();
        assert_eq!(flags.get_int("int"), Some(17));
        assert_eq!(flags.get_str("string"), Some("hello world"));
    }

    #[test]
    fn no_such_flag() {
        let mut flags = test_flags();
        let err = parse_config(&mut flags, "notaflag = 7\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "unknown option `notaflag'");
    }

    #[test]
    fn missing_equal_sign() {
        let mut flags = test_flags();
        let err = parse_config(&mut flags, "foo \n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "illegal config line `foo'");
    }

    #[test]
    fn value_of_the_wrong_type() {
        let mut flags = test_flags();
        let err = parse_config(&mut flags, "int = seventeen\n".as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid integer value `seventeen' for flag `int'"
        );
        // Processing stops at the failing line, earlier lines stay applied.
        let mut flags = test_flags();
        let config = "string = first\nint = oops\nstring = second\n";
        parse_config(&mut flags, config.as_bytes()).unwrap_err();
        assert_eq!(flags.get_str("string"), Some("first"));
    }

    #[test]
    fn whitespace_is_insignificant() {
        let mut flags = test_flags();
        let config =
            "# this is a comment\n    int  = 128\n\n   \t\t \n\tstring\t =      value#with spaces\t\t\n";
        parse_config(&mut flags, config.as_bytes()).unwrap();
        assert_eq!(flags.get_int("int"), Some(128));
        // A `#` inside the value is literal content, never a comment.
        assert_eq!(flags.get_str("string"), Some("value#with spaces"));
    }

    #[test]
    fn value_may_contain_equal_signs() {
        let mut flags = test_flags();
        parse_config(&mut flags, "string = a=b=c\n".as_bytes()).unwrap();
        assert_eq!(flags.get_str("string"), Some("a=b=c"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut flags = test_flags();
        load_config_from(&mut flags, dir.path().join(".no-such-rc")).unwrap();
        assert_eq!(flags.get_int("int"), Some(0));
        assert_eq!(flags.get_str("string"), Some("STRING"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".testrc");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "int = 42").unwrap();
        drop(file);

        let mut flags = test_flags();
        load_config_from(&mut flags, &path).unwrap();
        assert_eq!(flags.get_int("int"), Some(42));
    }
}
