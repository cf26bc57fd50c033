//! # Reports of Parsed Program Arguments
//!
//! The result of a successful build. It is detached from the schema it was
//! built from and cannot be modified by its owner.

use crate::args;

/// Typed bag of parsed program arguments.
///
/// Named values are looked up by name. A name that was never declared, that
/// was not given in the arguments, or that was skipped by a lenient parser
/// yields `None` alike.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedArguments {
    named: std::collections::HashMap<String, args::Value>,
    positionals: Vec<args::Value>,
}

/// An iterator over the positional values of [`ParsedArguments`], in the
/// order they were given.
#[derive(Clone, Debug)]
pub struct Positionals<'this>(core::slice::Iter<'this, args::Value>);

impl ParsedArguments {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn insert_named(&mut self, name: &str, value: args::Value) {
        self.named.insert(name.into(), value);
    }

    pub(super) fn push_positional(&mut self, value: args::Value) {
        self.positionals.push(value);
    }

    /// Yield the value of the named argument as `T`.
    ///
    /// Yields `None` if no value was recorded for `name`, or if the value is
    /// not of kind `T`.
    pub fn get<T: args::FromValue + ?Sized>(&self, name: &str) -> Option<&T> {
        self.value(name).and_then(T::from_value)
    }

    /// Yield the untyped value of the named argument.
    pub fn value(&self, name: &str) -> Option<&args::Value> {
        self.named.get(name)
    }

    /// Yield an iterator over all positional values. Every call starts over
    /// at the first value.
    pub fn positionals(&self) -> Positionals<'_> {
        Positionals(self.positionals.iter())
    }

    /// Yield the number of recorded named values.
    pub fn len_named(&self) -> usize {
        self.named.len()
    }

    /// Yield the number of recorded positional values.
    pub fn len_positional(&self) -> usize {
        self.positionals.len()
    }

    /// Check whether no values were recorded at all.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positionals.is_empty()
    }
}

impl<'this>
    core::iter::Iterator
for
    Positionals<'this>
{
    type Item = &'this args::Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'this>
    core::iter::ExactSizeIterator
for
    Positionals<'this>
{
}

impl<'this>
    core::iter::FusedIterator
for
    Positionals<'this>
{
}

impl<'this>
    core::iter::IntoIterator
for
    &'this ParsedArguments
{
    type Item = &'this args::Value;
    type IntoIter = Positionals<'this>;

    fn into_iter(self) -> Self::IntoIter {
        self.positionals()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> ParsedArguments {
        let mut v = ParsedArguments::new();
        v.insert_named("key1", args::Value::String("val1".into()));
        v.insert_named("key2", args::Value::I32(10));
        v.push_positional(args::Value::String("single1".into()));
        v.push_positional(args::Value::I32(2));
        v
    }

    #[test]
    fn report_lookup() {
        let v = sample();

        assert_eq!(v.get::<str>("key1"), Some("val1"));
        assert_eq!(v.get::<i32>("key2"), Some(&10));
        assert_eq!(v.get::<i64>("key2"), None);
        assert_eq!(v.get::<i32>("key3"), None);
        assert_eq!(v.value("key2"), Some(&args::Value::I32(10)));
        assert_eq!(v.len_named(), 2);
        assert!(!v.is_empty());
    }

    #[test]
    fn report_positionals() {
        let v = sample();

        let first: Vec<_> = v.positionals().collect();
        let second: Vec<_> = (&v).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            [&args::Value::String("single1".into()), &args::Value::I32(2)],
        );

        // Snapshots are independent of each other.
        let mut a = v.positionals();
        let b = a.clone();
        assert!(a.next().is_some());
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn report_empty() {
        let v = ParsedArguments::new();

        assert!(v.is_empty());
        assert_eq!(v.positionals().next(), None);
        assert_eq!(v.value("x"), None);
    }
}
