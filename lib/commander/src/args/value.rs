//! # Argument Values
//!
//! Arguments carry values of a small closed set of kinds. This module defines
//! the kinds, their textual conversion, and the typed values produced by
//! parsing.

use crate::args;

/// Enumeration of all value kinds an argument can be declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Presence flag. Always `true` when matched.
    Bool,
    /// Raw token, taken verbatim.
    String,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// 32-bit floating point number.
    F32,
    /// 64-bit floating point number.
    F64,
}

/// A parsed argument value, tagged with its kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    String(String),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

/// Conversion failure of a token into a numeric value kind. Renders the
/// diagnostic of the underlying conversion verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseValueError {
    #[error(transparent)]
    Int(#[from] core::num::ParseIntError),
    #[error(transparent)]
    Float(#[from] core::num::ParseFloatError),
}

/// Anything that can name a value kind in a declaration.
///
/// A tag either resolves to one of the supported [`ValueKind`]s, or yields
/// a human-readable name of what it refers to, which is then reported as
/// [`args::Error::UnsupportedType`].
pub trait KindTag {
    /// Resolve the tag to a supported kind.
    fn resolve(&self) -> Result<ValueKind, String>;
}

/// Kind tag naming a Rust type. Resolves for `bool`, `String`, `str`,
/// `i16`, `i32`, `i64`, `f32`, and `f64`.
pub struct TypeOf<T: ?Sized>(core::marker::PhantomData<fn() -> *const T>);

/// Typed extraction of a parsed [`Value`].
pub trait FromValue {
    /// Borrow the value as `Self`, or yield `None` if the value is of a
    /// different kind.
    fn from_value(value: &Value) -> Option<&Self>;
}

impl ValueKind {
    /// All supported kinds, in declaration order of the enumeration.
    pub const ALL: [ValueKind; 7] = [
        ValueKind::Bool,
        ValueKind::String,
        ValueKind::I16,
        ValueKind::I32,
        ValueKind::I64,
        ValueKind::F32,
        ValueKind::F64,
    ];

    /// Yield the name of the kind as used in usage information and tags.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "boolean",
            ValueKind::String => "string",
            ValueKind::I16 => "int16",
            ValueKind::I32 => "int32",
            ValueKind::I64 => "int64",
            ValueKind::F32 => "float32",
            ValueKind::F64 => "float64",
        }
    }

    /// Look up a kind by its name. Rust primitive names are accepted as
    /// aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "boolean" | "bool" => Some(ValueKind::Bool),
            "string" | "String" | "str" => Some(ValueKind::String),
            "int16" | "i16" => Some(ValueKind::I16),
            "int32" | "i32" => Some(ValueKind::I32),
            "int64" | "i64" => Some(ValueKind::I64),
            "float32" | "f32" => Some(ValueKind::F32),
            "float64" | "f64" => Some(ValueKind::F64),
            _ => None,
        }
    }

    /// Look up the kind matching the Rust type `T`.
    pub fn of<T: ?Sized + 'static>() -> Option<Self> {
        let id = core::any::TypeId::of::<T>();

        if id == core::any::TypeId::of::<bool>() {
            Some(ValueKind::Bool)
        } else if id == core::any::TypeId::of::<String>()
            || id == core::any::TypeId::of::<str>()
        {
            Some(ValueKind::String)
        } else if id == core::any::TypeId::of::<i16>() {
            Some(ValueKind::I16)
        } else if id == core::any::TypeId::of::<i32>() {
            Some(ValueKind::I32)
        } else if id == core::any::TypeId::of::<i64>() {
            Some(ValueKind::I64)
        } else if id == core::any::TypeId::of::<f32>() {
            Some(ValueKind::F32)
        } else if id == core::any::TypeId::of::<f64>() {
            Some(ValueKind::F64)
        } else {
            None
        }
    }

    /// Convert a raw token into a value of this kind.
    ///
    /// Boolean kinds ignore the token and always yield `true`. String kinds
    /// take the token verbatim. Numeric kinds use the locale-independent
    /// conversion of the standard library for the respective width.
    pub fn parse(self, raw: &str) -> Result<Value, ParseValueError> {
        Ok(match self {
            ValueKind::Bool => Value::Bool(true),
            ValueKind::String => Value::String(raw.into()),
            ValueKind::I16 => Value::I16(raw.parse()?),
            ValueKind::I32 => Value::I32(raw.parse()?),
            ValueKind::I64 => Value::I64(raw.parse()?),
            ValueKind::F32 => Value::F32(raw.parse()?),
            ValueKind::F64 => Value::F64(raw.parse()?),
        })
    }
}

impl Value {
    /// Yield the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::String(_) => ValueKind::String,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
        }
    }

    /// Borrow the value as `T`, if it is of the matching kind.
    pub fn as_type<T: FromValue + ?Sized>(&self) -> Option<&T> {
        T::from_value(self)
    }
}

impl<T: ?Sized> TypeOf<T> {
    /// Create a new tag for the type `T`.
    pub fn new() -> Self {
        Self(core::marker::PhantomData)
    }
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for ValueKind {
    type Err = args::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| args::Error::UnsupportedType {
            kind: s.into(),
        })
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Bool(v) => v.fmt(f),
            Value::String(v) => v.fmt(f),
            Value::I16(v) => v.fmt(f),
            Value::I32(v) => v.fmt(f),
            Value::I64(v) => v.fmt(f),
            Value::F32(v) => v.fmt(f),
            Value::F64(v) => v.fmt(f),
        }
    }
}

impl KindTag for ValueKind {
    fn resolve(&self) -> Result<ValueKind, String> {
        Ok(*self)
    }
}

impl KindTag for str {
    fn resolve(&self) -> Result<ValueKind, String> {
        ValueKind::from_name(self).ok_or_else(|| self.into())
    }
}

impl KindTag for String {
    fn resolve(&self) -> Result<ValueKind, String> {
        self.as_str().resolve()
    }
}

impl<T: KindTag + ?Sized> KindTag for &T {
    fn resolve(&self) -> Result<ValueKind, String> {
        (**self).resolve()
    }
}

impl<T: ?Sized + 'static> KindTag for TypeOf<T> {
    fn resolve(&self) -> Result<ValueKind, String> {
        ValueKind::of::<T>().ok_or_else(|| core::any::type_name::<T>().into())
    }
}

impl FromValue for str {
    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident,)*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    String => String,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use super::*;

    #[test]
    fn names() {
        for kind in ValueKind::ALL {
            assert_eq!(ValueKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string(), kind.name());
        }

        assert_eq!(ValueKind::from_name("i32"), Some(ValueKind::I32));
        assert_eq!(ValueKind::from_name("u8"), None);
        assert!(matches!(
            "char".parse::<ValueKind>(),
            Err(args::Error::UnsupportedType { kind }) if kind == "char",
        ));
    }

    #[test]
    fn type_dispatch() {
        assert_eq!(ValueKind::of::<bool>(), Some(ValueKind::Bool));
        assert_eq!(ValueKind::of::<String>(), Some(ValueKind::String));
        assert_eq!(ValueKind::of::<str>(), Some(ValueKind::String));
        assert_eq!(ValueKind::of::<i64>(), Some(ValueKind::I64));
        assert_eq!(ValueKind::of::<f32>(), Some(ValueKind::F32));
        assert_eq!(ValueKind::of::<u32>(), None);
        assert_eq!(ValueKind::of::<Vec<u8>>(), None);

        assert_eq!(TypeOf::<i16>::new().resolve(), Ok(ValueKind::I16));
        assert_eq!(TypeOf::<u64>::new().resolve(), Err("u64".to_string()));
        assert_eq!("float64".resolve(), Ok(ValueKind::F64));
        assert_eq!("decimal".resolve(), Err("decimal".to_string()));
    }

    #[rstest]
    #[case(ValueKind::Bool, "whatever", Value::Bool(true))]
    #[case(ValueKind::String, "-x y", Value::String("-x y".into()))]
    #[case(ValueKind::I16, "-32768", Value::I16(i16::MIN))]
    #[case(ValueKind::I32, "+10", Value::I32(10))]
    #[case(ValueKind::I64, "9223372036854775807", Value::I64(i64::MAX))]
    #[case(ValueKind::F32, "1.5", Value::F32(1.5))]
    #[case(ValueKind::F64, "5.5", Value::F64(5.5))]
    #[case(ValueKind::F64, "1e3", Value::F64(1000.0))]
    fn parse_valid(
        #[case] kind: ValueKind,
        #[case] raw: &str,
        #[case] expected: Value,
    ) {
        let v = kind.parse(raw).unwrap();

        assert_eq!(v, expected);
        assert_eq!(v.kind(), kind);
    }

    #[rstest]
    #[case(ValueKind::I16, "32768")]
    #[case(ValueKind::I32, "10.0")]
    #[case(ValueKind::I32, "")]
    #[case(ValueKind::I64, "0x10")]
    #[case(ValueKind::F32, "one")]
    #[case(ValueKind::F64, "5,5")]
    fn parse_malformed(#[case] kind: ValueKind, #[case] raw: &str) {
        assert!(kind.parse(raw).is_err());
    }

    #[test]
    fn typed_access() {
        let v = Value::String("val1".into());
        assert_eq!(v.as_type::<str>(), Some("val1"));
        assert_eq!(v.as_type::<String>().map(String::as_str), Some("val1"));
        assert_eq!(v.as_type::<i32>(), None);

        let v = Value::I32(10);
        assert_eq!(v.as_type::<i32>(), Some(&10));
        assert_eq!(v.as_type::<i64>(), None);
        assert_eq!(v.to_string(), "10");
    }
}
