//! # Program Argument Parser
//!
//! Parse raw program arguments into [`args::ParsedArguments`], following the
//! layout declared on an [`args::ArgumentSchema`]. The parser performs a
//! single left-to-right pass over the arguments.

use crate::args;
use super::layout::Layout;

struct Parser<'this> {
    layout: &'this Layout,
    strict: bool,
    positional: usize,
    result: args::ParsedArguments,
}

impl<'this> Parser<'this> {
    fn with(layout: &'this Layout, strict: bool) -> Self {
        Self {
            layout: layout,
            strict: strict,
            positional: 0,
            result: args::ParsedArguments::new(),
        }
    }

    fn reject(
        &self,
        argument: &str,
        cause: args::Unmatched,
    ) -> args::Result<()> {
        // Strict parsers fail on unmatched arguments, lenient parsers drop
        // them and carry on.
        if self.strict {
            Err(args::Error::UnknownOrIncompleteArgument {
                argument: argument.into(),
                cause: cause,
            })
        } else {
            tracing::debug!(argument, ?cause, "skip unmatched argument");
            Ok(())
        }
    }

    fn convert(kind: args::ValueKind, raw: &str) -> args::Result<args::Value> {
        kind.parse(raw).map_err(|e| args::Error::MalformedValue {
            kind: kind,
            value: raw.into(),
            source: e,
        })
    }

    fn parse_flag<I, S>(&mut self, arguments: &mut I, name: &str) -> args::Result<()>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(kind) = self.layout.named.get(name).map(|v| v.kind) else {
            return self.reject(name, args::Unmatched::UnknownFlag);
        };

        if kind == args::ValueKind::Bool {
            // Boolean flags never consume a value.
            self.result.insert_named(name, args::Value::Bool(true));
            return Ok(());
        }

        // The value is taken verbatim, even if it starts with a dash.
        let Some(raw) = arguments.next() else {
            return self.reject(name, args::Unmatched::MissingValue);
        };

        let value = Self::convert(kind, raw.as_ref())?;
        self.result.insert_named(name, value);
        Ok(())
    }

    fn parse_positional(&mut self, arg: &str) -> args::Result<()> {
        let Some(kind) = self.layout.positionals.get(self.positional).map(|v| v.kind) else {
            return self.reject(arg, args::Unmatched::ExtraPositional);
        };

        let value = Self::convert(kind, arg)?;
        self.result.push_positional(value);
        self.positional += 1;
        Ok(())
    }

    fn parse<I, S>(mut self, mut arguments: I) -> args::Result<args::ParsedArguments>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        while let Some(arg) = arguments.next() {
            let arg = arg.as_ref();

            match arg.strip_prefix('-') {
                Some(name) => self.parse_flag(&mut arguments, name)?,
                None => self.parse_positional(arg)?,
            }
        }

        Ok(self.result)
    }
}

impl args::ArgumentSchema {
    /// Parse program arguments according to this schema.
    ///
    /// The first call seals the schema, regardless of its outcome. Any
    /// further declaration fails with [`args::Error::SchemaSealed`], but
    /// the schema can be built repeatedly.
    ///
    /// An argument starting with a dash is a flag. Boolean flags are
    /// recorded as `true`, all other declared flags consume the following
    /// argument as their value. Any other argument is matched against the
    /// next unfilled positional declaration.
    ///
    /// Strict schemas fail with
    /// [`args::Error::UnknownOrIncompleteArgument`] on unknown flags, flags
    /// without value, or excess positional arguments. Lenient schemas skip
    /// those. Values that do not convert to their declared kind fail with
    /// [`args::Error::MalformedValue`] in both modes.
    pub fn build<I, S>(&self, arguments: I) -> args::Result<args::ParsedArguments>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut layout = self.lock();

        if !layout.sealed {
            layout.sealed = true;
            tracing::debug!(
                named = layout.named.len(),
                positional = layout.positionals.len(),
                strict = self.is_strict(),
                "seal argument schema"
            );
        }

        let r = Parser::with(&layout, self.is_strict()).parse(arguments.into_iter());

        if let Ok(v) = &r {
            tracing::debug!(
                named = v.len_named(),
                positional = v.len_positional(),
                "built program arguments"
            );
        }

        r
    }
}
