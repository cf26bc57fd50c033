//! # Usage Information for Program Arguments
//!
//! This module renders usage information from the declarations of an
//! [`args::ArgumentSchema`]. Rendering has no side effects and is valid
//! both before and after the schema was built.

use crate::args;
use super::layout::Layout;

/// Writer trait to format usage information to an output stream.
///
/// Usage information is written via a trait object of `Write`, which allows
/// custom styling. [`Plain`] produces the plain-text format of
/// [`args::ArgumentSchema::usage()`].
pub trait Write<E> {
    /// Write the header preceding all declarations.
    fn write_header(&mut self) -> core::ops::ControlFlow<E>;

    /// Write information on a single named argument. Named arguments are
    /// written in the order they were first declared.
    fn write_named(
        &mut self,
        name: &str,
        kind: args::ValueKind,
        description: &str,
    ) -> core::ops::ControlFlow<E>;

    /// Write information on a single positional argument. Positional
    /// arguments are written in declaration order, after all named ones.
    fn write_positional(
        &mut self,
        index: usize,
        kind: args::ValueKind,
        description: &str,
    ) -> core::ops::ControlFlow<E>;
}

/// Plain-text usage writer on top of any [`core::fmt::Write`].
///
/// Every declaration is written on its own tab-indented line, with its
/// fields separated by tabs:
///
/// ```text
/// Usage:
/// 	-<name>	<kind>	<description>
/// 	<kind>	<description>
/// ```
pub struct Plain<'this, W: ?Sized> {
    inner: &'this mut W,
}

impl<'this, W: core::fmt::Write + ?Sized> Plain<'this, W> {
    /// Create a new plain writer on top of `inner`.
    pub fn with(inner: &'this mut W) -> Self {
        Self {
            inner: inner,
        }
    }
}

fn flow(r: core::fmt::Result) -> core::ops::ControlFlow<core::fmt::Error> {
    match r {
        Ok(()) => core::ops::ControlFlow::Continue(()),
        Err(e) => core::ops::ControlFlow::Break(e),
    }
}

impl<'this, W: core::fmt::Write + ?Sized>
    Write<core::fmt::Error>
for
    Plain<'this, W>
{
    fn write_header(&mut self) -> core::ops::ControlFlow<core::fmt::Error> {
        flow(self.inner.write_str("Usage: \n"))
    }

    fn write_named(
        &mut self,
        name: &str,
        kind: args::ValueKind,
        description: &str,
    ) -> core::ops::ControlFlow<core::fmt::Error> {
        flow(writeln!(self.inner, "\t-{}\t{}\t{}", name, kind, description))
    }

    fn write_positional(
        &mut self,
        _index: usize,
        kind: args::ValueKind,
        description: &str,
    ) -> core::ops::ControlFlow<core::fmt::Error> {
        flow(writeln!(self.inner, "\t{}\t{}", kind, description))
    }
}

fn write<E>(
    w: &mut dyn Write<E>,
    layout: &Layout,
) -> core::ops::ControlFlow<E> {
    w.write_header()?;

    for (name, v) in layout.named.iter() {
        w.write_named(name, v.kind, &v.description)?;
    }

    for (index, v) in layout.positionals.iter().enumerate() {
        w.write_positional(index, v.kind, &v.description)?;
    }

    core::ops::ControlFlow::Continue(())
}

impl args::ArgumentSchema {
    /// Render usage information via a custom writer.
    pub fn write_usage<E>(&self, w: &mut dyn Write<E>) -> Result<(), E> {
        match write(w, &self.lock()) {
            core::ops::ControlFlow::Continue(()) => Ok(()),
            core::ops::ControlFlow::Break(v) => Err(v),
        }
    }

    /// Render plain-text usage information.
    pub fn usage(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for args::ArgumentSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_usage(&mut Plain::with(f))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn usage_empty() {
        let schema = args::ArgumentSchema::strict();

        assert_eq!(schema.usage(), "Usage: \n");
    }

    #[test]
    fn usage_format() {
        let schema = args::ArgumentSchema::strict();
        schema.declare_named("key1", "string", Some("it is key1")).unwrap();
        schema.declare_named("key2", "int32", Some("")).unwrap();
        schema.declare_positional("float64", None).unwrap();

        assert_eq!(
            schema.usage(),
            "Usage: \n\
             \t-key1\tstring\tit is key1\n\
             \t-key2\tint32\t\n\
             \tfloat64\t\n",
        );
    }

    #[test]
    fn usage_order() {
        let schema = args::ArgumentSchema::lenient();
        schema.declare_positional("int64", Some("first")).unwrap();
        schema.declare_named("z", "boolean", None).unwrap();
        schema.declare_named("a", "int16", None).unwrap();
        schema.declare_positional("float32", Some("second")).unwrap();
        schema.declare_named("z", "string", Some("redeclared")).unwrap();

        assert_eq!(
            schema.usage(),
            "Usage: \n\
             \t-z\tstring\tredeclared\n\
             \t-a\tint16\t\n\
             \tint64\tfirst\n\
             \tfloat32\tsecond\n",
        );
    }

    #[test]
    fn usage_idempotent() {
        let schema = args::ArgumentSchema::strict();
        schema.declare_named("n", "int32", Some("count")).unwrap();
        schema.declare_positional("string", None).unwrap();

        let before = schema.usage();
        assert_eq!(before, schema.usage());
        assert_eq!(before, schema.to_string());

        schema.build(["-n", "1", "x"]).unwrap();
        assert_eq!(before, schema.usage());
    }

    #[test]
    fn usage_custom_writer() {
        struct Names(Vec<String>);

        impl Write<()> for Names {
            fn write_header(&mut self) -> core::ops::ControlFlow<()> {
                core::ops::ControlFlow::Continue(())
            }

            fn write_named(
                &mut self,
                name: &str,
                _kind: args::ValueKind,
                _description: &str,
            ) -> core::ops::ControlFlow<()> {
                self.0.push(name.into());
                core::ops::ControlFlow::Continue(())
            }

            fn write_positional(
                &mut self,
                index: usize,
                _kind: args::ValueKind,
                _description: &str,
            ) -> core::ops::ControlFlow<()> {
                if index > 0 {
                    return core::ops::ControlFlow::Break(());
                }
                self.0.push(index.to_string());
                core::ops::ControlFlow::Continue(())
            }
        }

        let schema = args::ArgumentSchema::strict();
        schema.declare_named("a", "int32", None).unwrap();
        schema.declare_positional("string", None).unwrap();

        let mut names = Names(Vec::new());
        assert_eq!(schema.write_usage(&mut names), Ok(()));
        assert_eq!(names.0, ["a", "0"]);

        schema.declare_positional("string", None).unwrap();

        let mut names = Names(Vec::new());
        assert_eq!(schema.write_usage(&mut names), Err(()));
    }
}
