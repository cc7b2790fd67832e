//! Named, typed command-line flags.
//!
//! There is no global registry here: each program constructs its own
//! [`FlagSet`], and both the config loader and the flag-aware completer
//! borrow it from the caller.
use std::collections::BTreeMap;
use std::fmt;

/// A flag value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// The name of the value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Str(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Fail)]
pub enum FlagError {
    #[fail(display = "no such flag `{}'", name)]
    NoSuchFlag { name: String },
    #[fail(display = "invalid {} value `{}' for flag `{}'", type_name, value, name)]
    InvalidValue {
        name: String,
        type_name: &'static str,
        value: String,
    },
}

/// A named, typed flag with a default and a current value.
#[derive(Debug)]
pub struct Flag {
    name: String,
    help: String,
    default: Value,
    value: Value,
}

impl Flag {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// Returns true if the flag is a no-argument boolean flag: its
    /// presence alone toggles it and it never consumes the following
    /// word as a value.
    pub fn is_bool(&self) -> bool {
        match self.value {
            Value::Bool(_) => true,
            _ => false,
        }
    }

    /// Parses `s` according to the flag's type and replaces the current
    /// value.
    fn set(&mut self, s: &str) -> Result<(), FlagError> {
        let parsed = match &self.value {
            Value::Bool(_) => s.parse().map(Value::Bool).ok(),
            Value::Int(_) => s.parse().map(Value::Int).ok(),
            Value::Float(_) => s.parse().map(Value::Float).ok(),
            Value::Str(_) => Some(Value::Str(s.to_owned())),
        };

        match parsed {
            Some(value) => {
                self.value = value;
                Ok(())
            }
            None => Err(FlagError::InvalidValue {
                name: self.name.clone(),
                type_name: self.value.type_name(),
                value: s.to_owned(),
            }),
        }
    }
}

/// A set of named flags, owned by the calling program.
#[derive(Debug, Default)]
pub struct FlagSet {
    flags: BTreeMap<String, Flag>,
}

impl FlagSet {
    pub fn new() -> FlagSet {
        FlagSet {
            flags: BTreeMap::new(),
        }
    }

    fn add(&mut self, name: &str, default: Value, help: &str) {
        let flag = Flag {
            name: name.to_owned(),
            help: help.to_owned(),
            default: default.clone(),
            value: default,
        };

        self.flags.insert(name.to_owned(), flag);
    }

    /// Defines a no-argument boolean flag.
    pub fn add_bool(&mut self, name: &str, default: bool, help: &str) {
        self.add(name, Value::Bool(default), help);
    }

    pub fn add_int(&mut self, name: &str, default: i64, help: &str) {
        self.add(name, Value::Int(default), help);
    }

    pub fn add_float(&mut self, name: &str, default: f64, help: &str) {
        self.add(name, Value::Float(default), help);
    }

    pub fn add_str(&mut self, name: &str, default: &str, help: &str) {
        self.add(name, Value::Str(default.to_owned()), help);
    }

    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    /// Sets the flag `name` from the string representation of a value.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), FlagError> {
        match self.flags.get_mut(name) {
            Some(flag) => flag.set(value),
            None => Err(FlagError::NoSuchFlag {
                name: name.to_owned(),
            }),
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.lookup(name).map(Flag::value) {
            Some(Value::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.lookup(name).map(Flag::value) {
            Some(Value::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.lookup(name).map(Flag::value) {
            Some(Value::Float(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.lookup(name).map(Flag::value) {
            Some(Value::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Iterates over the flags in the lexicographical order of their
    /// names.
    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    /// Renders a usage listing of all flags with their help texts and
    /// defaults.
    pub fn usage(&self) -> String {
        let mut usage = String::new();
        for flag in self.iter() {
            if flag.is_bool() {
                usage += &format!("  -{}\n", flag.name());
            } else {
                usage += &format!("  -{} {}\n", flag.name(), flag.value().type_name());
            }
            usage += &format!("        {} (default: {})\n", flag.help(), flag.default_value());
        }

        usage
    }
}
