use core::{
    convert::Infallible,
    fmt::{Display, Formatter},
    ops::Deref,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Conversion rule applied to the raw text of a JSON object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    /// The text is the key.
    String,
    /// Base-10 signed integer; malformed or out of range text is rejected.
    SignedInteger,
    /// Base-10 unsigned integer; malformed or out of range text is rejected.
    UnsignedInteger,
    /// Decimal floating point number.
    Float,
    /// Exactly `true` or `false`.
    Bool,
    /// The text is decoded as a JSON string into the key type.
    Other,
}

impl Display for KeyCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::SignedInteger => "signed integer",
            Self::UnsignedInteger => "unsigned integer",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A type which can be the key of an ordered map decoded from JSON.
///
/// JSON object keys are always strings; the implementation converts the raw key text into the key.
/// Implementations are provided for strings, primitive numbers, `bool` and `char`.
/// Any other type which can be deserialized from a JSON string can be used through [`JsonKey`].
pub trait MapKey: Sized {
    /// Conversion rule of the key type.
    const CATEGORY: KeyCategory;

    /// Error of a failed conversion.
    type Err: Display;

    /// Converts the raw key `text` into the key.
    fn from_key_text(text: &str) -> Result<Self, Self::Err>;
}

macro_rules! impl_map_key_from_str {
    ($category:expr => $($t:ty),+) => {
        $(
            impl MapKey for $t {
                const CATEGORY: KeyCategory = $category;

                type Err = <$t as core::str::FromStr>::Err;

                fn from_key_text(text: &str) -> Result<Self, Self::Err> {
                    text.parse()
                }
            }
        )+
    };
}

impl_map_key_from_str!(KeyCategory::SignedInteger => i8, i16, i32, i64, i128, isize);
impl_map_key_from_str!(KeyCategory::UnsignedInteger => u8, u16, u32, u64, u128, usize);
impl_map_key_from_str!(KeyCategory::Float => f32, f64);
impl_map_key_from_str!(KeyCategory::Bool => bool);

impl MapKey for String {
    const CATEGORY: KeyCategory = KeyCategory::String;

    type Err = Infallible;

    fn from_key_text(text: &str) -> Result<Self, Self::Err> {
        Ok(text.to_owned())
    }
}

impl MapKey for Box<str> {
    const CATEGORY: KeyCategory = KeyCategory::String;

    type Err = Infallible;

    fn from_key_text(text: &str) -> Result<Self, Self::Err> {
        Ok(text.into())
    }
}

impl MapKey for char {
    const CATEGORY: KeyCategory = KeyCategory::Other;

    type Err = serde_json::Error;

    fn from_key_text(text: &str) -> Result<Self, Self::Err> {
        from_json_string(text)
    }
}

fn from_json_string<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_value(serde_json::Value::String(text.to_owned()))
}

/// Wrapper making any type which deserializes from a JSON string usable as the key of a decoded map,
/// such as unit-only enums.
///
/// The wrapper is transparent in encoding, comparison and hashing.
///
/// # Examples
///
/// ```
/// use orx_ordered_map::OrderedMap;
/// use orx_ordered_map::json::{self, JsonKey};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, PartialEq, Eq, Hash)]
/// #[serde(rename_all = "lowercase")]
/// enum Color { Red, Green }
///
/// let map: OrderedMap<JsonKey<Color>, u8> = json::decode(r#"{"green":1,"red":2}"#).unwrap();
/// let keys: Vec<_> = map.keys().map(|k| &k.0).collect();
/// assert_eq!(keys, [&Color::Green, &Color::Red]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JsonKey<T>(pub T);

impl<T> JsonKey<T> {
    /// Returns the wrapped key.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for JsonKey<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Display> Display for JsonKey<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: DeserializeOwned> MapKey for JsonKey<T> {
    const CATEGORY: KeyCategory = KeyCategory::Other;

    type Err = serde_json::Error;

    fn from_key_text(text: &str) -> Result<Self, Self::Err> {
        from_json_string(text).map(JsonKey)
    }
}
