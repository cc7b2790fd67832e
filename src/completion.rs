//! Pluggable tab completion strategies.
//!
//! A [`Completer`] takes the words typed so far and proposes candidates for
//! the final word. Programs compose the building blocks in this module --
//! a fixed word set, a flag-aware wrapper around a flag set, or any plain
//! function -- and hand the result to
//! [`complete_if_requested`](crate::dispatch::complete_if_requested).
use crate::flags::FlagSet;
use crate::line_parser::CommandLine;

/// The primary interface to tab completion. A `Completer` takes a
/// `CommandLine` and returns the possible completions for its final word.
pub trait Completer {
    fn complete(&self, cl: &CommandLine) -> Vec<String>;
}

/// Any plain function (or closure) over a command line is a completer.
impl<F> Completer for F
where
    F: Fn(&CommandLine) -> Vec<String>,
{
    fn complete(&self, cl: &CommandLine) -> Vec<String> {
        self(cl)
    }
}

/// Completes from a fixed set of possible words.
///
/// Candidates are matched by prefix against the current word,
/// case-sensitively, and returned in their original order.
pub struct SetCompleter {
    words: Vec<String>,
}

impl SetCompleter {
    pub fn new<T: Into<String>>(words: Vec<T>) -> SetCompleter {
        SetCompleter {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl Completer for SetCompleter {
    fn complete(&self, cl: &CommandLine) -> Vec<String> {
        self.words
            .iter()
            .filter(|word| word.starts_with(cl.current_word()))
            .cloned()
            .collect()
    }
}

/// Augments an inner completer to be aware of the flags in a [`FlagSet`].
///
/// If the word being completed looks like a flag, available flag names are
/// completed from the flag set. If it is the value of a preceding flag,
/// completion is suppressed. If the word is empty and the command line
/// contains no non-flag word yet, both the flag names and the inner
/// completer's results are returned, flags first. Everything from the
/// first non-flag word onward is handed to the inner completer verbatim.
pub struct FlagCompleter<'a, C: Completer> {
    flags: &'a FlagSet,
    inner: C,
}

impl<'a, C: Completer> FlagCompleter<'a, C> {
    pub fn new(flags: &'a FlagSet, inner: C) -> FlagCompleter<'a, C> {
        FlagCompleter { flags, inner }
    }
}

impl<'a, C: Completer> Completer for FlagCompleter<'a, C> {
    fn complete(&self, cl: &CommandLine) -> Vec<String> {
        let (mut completions, rest) = complete_flags(cl.words(), self.flags);
        if let Some(rest) = rest {
            let inner_cl = CommandLine::new(rest.to_vec());
            completions.extend(self.inner.complete(&inner_cl));
        }

        completions
    }
}

/// Scans the leading flag words and decides what the final word is: a flag
/// name, a flag value, or an ordinary argument.
///
/// Returns the completions to offer and, when the inner completer should
/// run as well, the remaining words to hand to it (`None` suppresses the
/// delegation). A `--` word ends flag scanning and is excluded from the
/// remaining words.
fn complete_flags<'a>(cl: &'a [String], flags: &FlagSet) -> (Vec<String>, Option<&'a [String]>) {
    if cl.is_empty() {
        return (Vec::new(), Some(cl));
    }

    let mut cl = cl;
    let mut in_flag: Option<&str> = None;
    while cl.len() > 1 {
        let w = &cl[0];
        if in_flag.is_some() {
            // The previous word was a value-taking flag: this word is its
            // value.
            in_flag = None;
        } else if w.len() > 1 && w.starts_with('-') && w != "--" {
            if !w.contains('=') {
                in_flag = Some(w.trim_start_matches('-'));
            }
            if let Some(name) = in_flag {
                if let Some(flag) = flags.lookup(name) {
                    if flag.is_bool() {
                        // A boolean flag never consumes the next word.
                        in_flag = None;
                    }
                }
            }
        } else {
            if w == "--" {
                cl = &cl[1..];
            }
            return (Vec::new(), Some(cl));
        }
        cl = &cl[1..];
    }

    if in_flag.is_some() {
        // Completing a flag value. Nothing to offer for now.
        return (Vec::new(), None);
    }

    let current = &cl[0];
    if !current.is_empty() && current.starts_with('-') {
        // Completing a flag name.
        let prefix = current.trim_start_matches('-');
        let completions = flags
            .iter()
            .filter(|flag| flag.name().starts_with(prefix))
            .map(|flag| format!("-{}", flag.name()))
            .collect();
        return (completions, None);
    }

    let mut completions = Vec::new();
    if current.is_empty() {
        completions.extend(flags.iter().map(|flag| format!("-{}", flag.name())));
    }

    (completions, Some(cl))
}
