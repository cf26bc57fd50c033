//! # Program Argument Layout
//!
//! This module allows declaring the layout of program arguments, which is
//! then used to parse an argument vector.
//!
//! Program arguments consist of:
//!
//! - **Named Arguments**: Flags given as `-name`. Boolean flags stand on
//!   their own, all other flags take the following argument as value:
//!
//!   > ./program -verbose -jobs 4
//!
//!   Named arguments are identified by their name. Declaring the same name
//!   twice replaces the previous declaration, but retains its position in
//!   usage information.
//!
//! - **Positional Arguments**: All arguments that do not start with a dash.
//!   They are matched against the positional declarations in order. Their
//!   position is independent of interleaved named arguments:
//!
//!   > ./program input.txt -jobs 4 2.5
//!
//! A layout accepts declarations until it is built for the first time. From
//! then on it is sealed and every further declaration fails. Declarations and
//! the seal share a single lock, so a declaration racing a build is either
//! applied entirely before the seal, or rejected.

use crate::args;

/// Identifier of a single declaration of a schema.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationId {
    /// A named argument, identified by its name.
    Named(String),
    /// The positional argument at the given index.
    Positional(usize),
}

/// Top-level definition of a layout of program arguments.
///
/// The schema can be shared across threads. All declarations, lookups, and
/// builds are serialized on an internal lock.
#[derive(Debug)]
pub struct ArgumentSchema {
    strict: bool,
    state: std::sync::Mutex<Layout>,
}

// Properties of a single declaration.
#[derive(Clone, Debug)]
pub(super) struct Declaration {
    pub(super) kind: args::ValueKind,
    pub(super) description: String,
}

// Lock-protected state of a schema.
#[derive(Debug, Default)]
pub(super) struct Layout {
    pub(super) named: indexmap::IndexMap<String, Declaration>,
    pub(super) positionals: Vec<Declaration>,
    pub(super) sealed: bool,
}

impl Declaration {
    fn with(kind: args::ValueKind, description: Option<&str>) -> Self {
        Self {
            kind: kind,
            description: description.unwrap_or_default().into(),
        }
    }
}

impl ArgumentSchema {
    /// Create a new empty schema.
    ///
    /// `strict` selects the failure policy of the parser. A strict schema
    /// fails on unknown flags, flags lacking their value, and excess
    /// positional arguments. A lenient schema skips such arguments.
    pub fn with(strict: bool) -> Self {
        Self {
            strict: strict,
            state: std::sync::Mutex::new(Layout::default()),
        }
    }

    /// Create a new empty strict schema.
    pub fn strict() -> Self {
        Self::with(true)
    }

    /// Create a new empty lenient schema.
    pub fn lenient() -> Self {
        Self::with(false)
    }

    /// Yield whether this schema parses strictly.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub(super) fn lock(&self) -> std::sync::MutexGuard<'_, Layout> {
        // Declarations are applied in a single step, so the state is
        // consistent even if a holder of the lock panicked.
        self.state.lock().unwrap_or_else(|e| {
            tracing::warn!("argument schema lock was poisoned, recovering");
            e.into_inner()
        })
    }

    fn declare(
        &self,
        name: Option<&str>,
        tag: &dyn args::KindTag,
        description: Option<&str>,
    ) -> args::Result<()> {
        // Kinds are verified before the seal, so unsupported kinds are
        // reported regardless of the state of the schema.
        let kind = tag.resolve().map_err(|v| args::Error::UnsupportedType {
            kind: v,
        })?;

        let mut layout = self.lock();
        if layout.sealed {
            return Err(args::Error::SchemaSealed);
        }

        let declaration = Declaration::with(kind, description);
        match name {
            Some(v) => {
                tracing::trace!(name = v, kind = %kind, "declare named argument");
                layout.named.insert(v.into(), declaration);
            },
            None => {
                tracing::trace!(
                    index = layout.positionals.len(),
                    kind = %kind,
                    "declare positional argument"
                );
                layout.positionals.push(declaration);
            },
        }

        Ok(())
    }

    /// Append a positional argument of the given kind.
    ///
    /// Fails with [`args::Error::UnsupportedType`] if `kind` does not name a
    /// supported kind, and with [`args::Error::SchemaSealed`] if the schema
    /// was already built.
    pub fn declare_positional<K: args::KindTag>(
        &self,
        kind: K,
        description: Option<&str>,
    ) -> args::Result<()> {
        self.declare(None, &kind, description)
    }

    /// Declare a named argument of the given kind, replacing any previous
    /// declaration of the same name.
    ///
    /// Fails under the same conditions as
    /// [`ArgumentSchema::declare_positional()`].
    pub fn declare_named<K: args::KindTag>(
        &self,
        name: &str,
        kind: K,
        description: Option<&str>,
    ) -> args::Result<()> {
        self.declare(Some(name), &kind, description)
    }

    /// Append a positional argument with the kind of the Rust type `T`.
    pub fn declare_positional_as<T: ?Sized + 'static>(
        &self,
        description: Option<&str>,
    ) -> args::Result<()> {
        self.declare_positional(args::TypeOf::<T>::new(), description)
    }

    /// Declare a named argument with the kind of the Rust type `T`.
    pub fn declare_named_as<T: ?Sized + 'static>(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> args::Result<()> {
        self.declare_named(name, args::TypeOf::<T>::new(), description)
    }

    /// Yield whether the schema was built and no longer accepts
    /// declarations.
    pub fn is_sealed(&self) -> bool {
        self.lock().sealed
    }

    /// Yield the kind of the named argument, if declared.
    pub fn named_kind(&self, name: &str) -> Option<args::ValueKind> {
        self.lock().named.get(name).map(|v| v.kind)
    }

    /// Yield the kinds of all positional arguments in declaration order.
    pub fn positional_kinds(&self) -> Vec<args::ValueKind> {
        self.lock().positionals.iter().map(|v| v.kind).collect()
    }

    /// Yield the description of a declaration. Declarations without a
    /// description yield an empty string.
    pub fn description(&self, id: &DeclarationId) -> Option<String> {
        let layout = self.lock();
        let declaration = match id {
            DeclarationId::Named(v) => layout.named.get(v.as_str()),
            DeclarationId::Positional(v) => layout.positionals.get(*v),
        };

        declaration.map(|v| v.description.clone())
    }
}
