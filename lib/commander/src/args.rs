//! # Program Arguments
//!
//! This module implements a typed builder for program arguments. Arguments
//! are declared on an [`ArgumentSchema`], which is then sealed and used to
//! parse an argument vector into [`ParsedArguments`].

pub mod help;
pub mod layout;
pub mod parse;
pub mod report;
pub mod value;

pub use layout::{ArgumentSchema, DeclarationId};
pub use report::{ParsedArguments, Positionals};
pub use value::{FromValue, KindTag, ParseValueError, TypeOf, Value, ValueKind};

/// Result alias for all fallible operations of the argument builder.
pub type Result<T> = core::result::Result<T, Error>;

/// Reason why a token could not be matched against the schema during
/// strict parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unmatched {
    /// The flag name is not declared.
    UnknownFlag,
    /// The flag is declared and takes a value, but no token follows it.
    MissingValue,
    /// All declared positional slots are already filled.
    ExtraPositional,
}

/// Enumeration of all errors that can be reported by the argument builder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A declaration named a value kind outside of the supported set.
    #[error("Unsupported type: {kind}")]
    UnsupportedType {
        kind: String,
    },

    /// A declaration was attempted after the schema was built.
    #[error("Can't add another argument after running.")]
    SchemaSealed,

    /// A token did not match the schema during strict parsing. `argument`
    /// carries the offending token, with the leading dash stripped for flags.
    #[error("{cause}: {argument}")]
    UnknownOrIncompleteArgument {
        argument: String,
        cause: Unmatched,
    },

    /// A token could not be converted to the declared value kind.
    #[error("Malformed {kind} value {value:?}: {source}")]
    MalformedValue {
        kind: ValueKind,
        value: String,
        #[source]
        source: ParseValueError,
    },
}

impl core::fmt::Display for Unmatched {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Unmatched::MissingValue => f.write_str("Need a value"),
            Unmatched::UnknownFlag | Unmatched::ExtraPositional => {
                f.write_str("Wrong argument")
            },
        }
    }
}

impl Error {
    /// Yield the offending token of an unmatched-argument error.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Error::UnknownOrIncompleteArgument { argument, .. } => Some(argument.as_str()),
            Error::MalformedValue { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }
}
