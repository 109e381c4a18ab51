//! Cache Key Module
//!
//! Canonical string encoding of an argument list, used as the memoization key.

use std::collections::BTreeMap;

// == Key Argument ==
/// A single argument contributing to a cache key.
///
/// Records are held in a `BTreeMap`, so two records with the same fields
/// encode identically regardless of the order they were built in.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyArg {
    /// Any numeric argument, kept in its display form
    Number(String),
    /// A string argument
    String(String),
    /// A boolean argument
    Boolean(bool),
    /// A nested record of named fields
    Record(BTreeMap<String, KeyArg>),
}

impl KeyArg {
    /// Builds a record argument from `(field, value)` pairs.
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, KeyArg)>,
    {
        KeyArg::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    fn type_tag(&self) -> &'static str {
        match self {
            KeyArg::Number(_) => "number",
            KeyArg::String(_) => "string",
            KeyArg::Boolean(_) => "boolean",
            KeyArg::Record(_) => "object",
        }
    }

    fn write_to(&self, out: &mut String) {
        match self {
            KeyArg::Record(fields) => {
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push(';');
                    }
                    out.push_str(name);
                    out.push('<');
                    value.write_to(out);
                    out.push('>');
                }
            }
            KeyArg::Number(n) => push_tagged(out, self.type_tag(), n),
            KeyArg::String(s) => push_tagged(out, self.type_tag(), s),
            KeyArg::Boolean(b) => push_tagged(out, self.type_tag(), if *b { "true" } else { "false" }),
        }
    }
}

fn push_tagged(out: &mut String, tag: &str, value: &str) {
    out.push_str(tag);
    out.push('<');
    out.push_str(value);
    out.push('>');
}

// == Encode ==
/// Encodes an ordered argument list into its cache key.
///
/// Scalars become `tag<value>`, record fields become `name<encoded>` joined
/// by `;`, and arguments are joined by `,`.
pub fn encode_key(args: &[KeyArg]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        arg.write_to(&mut out);
    }
    out
}

// == Conversions ==
macro_rules! number_key_arg {
    ($($t:ty),*) => {
        $(
            impl From<$t> for KeyArg {
                fn from(value: $t) -> Self {
                    KeyArg::Number(value.to_string())
                }
            }
        )*
    };
}

number_key_arg!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl From<bool> for KeyArg {
    fn from(value: bool) -> Self {
        KeyArg::Boolean(value)
    }
}

impl From<&str> for KeyArg {
    fn from(value: &str) -> Self {
        KeyArg::String(value.to_string())
    }
}

impl From<String> for KeyArg {
    fn from(value: String) -> Self {
        KeyArg::String(value)
    }
}

impl From<&String> for KeyArg {
    fn from(value: &String) -> Self {
        KeyArg::String(value.clone())
    }
}

// == Cache Key Trait ==
/// Argument lists that can be turned into a cache key.
pub trait CacheKey {
    /// Returns the ordered argument list.
    fn key_args(&self) -> Vec<KeyArg>;

    /// Returns the encoded key.
    fn cache_key(&self) -> String {
        encode_key(&self.key_args())
    }
}

impl CacheKey for KeyArg {
    fn key_args(&self) -> Vec<KeyArg> {
        vec![self.clone()]
    }
}

impl CacheKey for Vec<KeyArg> {
    fn key_args(&self) -> Vec<KeyArg> {
        self.clone()
    }
}

impl CacheKey for String {
    fn key_args(&self) -> Vec<KeyArg> {
        vec![KeyArg::from(self)]
    }
}

impl CacheKey for &'static str {
    fn key_args(&self) -> Vec<KeyArg> {
        vec![KeyArg::from(*self)]
    }
}

macro_rules! tuple_cache_key {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name),+> CacheKey for ($($name,)+)
        where
            $($name: Clone + Into<KeyArg>),+
        {
            fn key_args(&self) -> Vec<KeyArg> {
                vec![$(self.$idx.clone().into()),+]
            }
        }
    };
}

tuple_cache_key!(A: 0);
tuple_cache_key!(A: 0, B: 1);
tuple_cache_key!(A: 0, B: 1, C: 2);
tuple_cache_key!(A: 0, B: 1, C: 2, D: 3);
