//! # Typed Program Argument Builder
//!
//! This library parses program arguments against a schema that is declared
//! ahead of time. A caller declares named flags (`-name value`) and
//! positional arguments together with their value kinds, hands the raw
//! argument vector to the schema, and receives a typed bag of values or a
//! descriptive error.
//!
//! ```
//! use commander::args::{ArgumentSchema, ValueKind};
//!
//! let schema = ArgumentSchema::strict();
//! schema.declare_named("out", ValueKind::String, Some("output file")).unwrap();
//! schema.declare_named_as::<i32>("jobs", None).unwrap();
//! schema.declare_positional("float64", None).unwrap();
//!
//! let parsed = schema.build(["-out", "a.txt", "-jobs", "4", "0.5"]).unwrap();
//!
//! assert_eq!(parsed.get::<str>("out"), Some("a.txt"));
//! assert_eq!(parsed.get::<i32>("jobs"), Some(&4));
//! assert_eq!(parsed.positionals().count(), 1);
//! ```
//!
//! Process entry points, retrieval of the arguments from the operating
//! system, and the installation of log subscribers are left to the caller.

pub mod args;

pub use args::{ArgumentSchema, Error, ParsedArguments, Result, Value, ValueKind};
