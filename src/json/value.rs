use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};
use serde_json::value::RawValue;
use std::collections::BTreeMap;

/// A normalized JSON number.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// A number representable as a finite 64-bit float.
    ///
    /// Integers beyond 2^53 lose precision in this representation.
    Float(f64),
    /// Raw literal text of a number which does not fit into a finite 64-bit float, such as `1e400`,
    /// or which is nonzero but would underflow to zero, such as `1e-400`.
    Literal(String),
}

impl Number {
    /// Normalizes the JSON number literal `text`.
    ///
    /// ```
    /// use orx_ordered_map::json::Number;
    ///
    /// assert_eq!(Number::from_literal("2.5"), Number::Float(2.5));
    /// assert_eq!(Number::from_literal("1E400"), Number::Literal("1E400".to_string()));
    /// assert_eq!(Number::from_literal("-2e-999"), Number::Literal("-2e-999".to_string()));
    /// ```
    pub fn from_literal(text: &str) -> Self {
        match text.parse::<f64>() {
            Ok(x) if x.is_finite() && (x != 0.0 || has_zero_mantissa(text)) => Self::Float(x),
            _ => Self::Literal(text.to_owned()),
        }
    }

    /// Returns the number as a 64-bit float; None for a literal.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Literal(_) => None,
        }
    }

    /// Returns the number as an integer if it is a float with no fractional part within the `i64` range.
    ///
    /// Negative zero is not an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Float(x) if is_integral_within(*x, i64::MIN as f64, i64::MAX as f64) => {
                Some(*x as i64)
            }
            _ => None,
        }
    }

    /// Returns the number as an unsigned integer if it is a float with no fractional part within the `u64` range.
    ///
    /// Negative zero is not an integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Float(x) if is_integral_within(*x, 0.0, u64::MAX as f64) => Some(*x as u64),
            _ => None,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        if let Some(x) = self.as_i64() {
            return serde_json::Value::Number(x.into());
        }
        if let Some(x) = self.as_u64() {
            return serde_json::Value::Number(x.into());
        }
        match self {
            Self::Float(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::Literal(text) => match text.parse::<serde_json::Number>() {
                Ok(number) => serde_json::Value::Number(number),
                Err(_) => serde_json::Value::String(text.clone()),
            },
        }
    }
}

/// `lower <= x < upper`, where the bounds are powers of two exactly representable in f64.
fn is_integral_within(x: f64, lower: f64, upper: f64) -> bool {
    let negative_zero = x == 0.0 && x.is_sign_negative();
    !negative_zero && x.fract() == 0.0 && x >= lower && x < upper
}

/// True if every digit before the exponent of the number literal is zero.
fn has_zero_mantissa(text: &str) -> bool {
    text.split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().all(|b| matches!(b, b'-' | b'+' | b'.' | b'0')))
}

impl From<serde_json::Number> for Number {
    fn from(number: serde_json::Number) -> Self {
        Self::from_literal(&number.to_string())
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(x) = self.as_i64() {
            return serializer.serialize_i64(x);
        }
        if let Some(x) = self.as_u64() {
            return serializer.serialize_u64(x);
        }
        match self {
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Literal(text) => RawValue::from_string(text.clone())
                .map_err(<S::Error as serde::ser::Error>::custom)?
                .serialize(serializer),
        }
    }
}

/// A normalized JSON value.
///
/// This is the representation every decoded value goes through before it is converted into
/// the value type of the map. Using `Value` itself as the value type of the map accepts any JSON.
///
/// * Numbers are [`Number::Float`] whenever they fit into a finite `f64`, otherwise they keep their literal text.
/// * Arrays are normalized element-wise.
/// * Objects are normalized into a `BTreeMap`; hence, order of nested keys is **not** preserved.
///
/// Deserialization captures the raw JSON text of the value; hence, it is supported by `serde_json`
/// deserializers only.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Bool(bool),
    /// A number.
    Number(Number),
    /// A string.
    String(String),
    /// An array of values.
    Array(Vec<Value>),
    /// An object with sorted keys.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true if the value is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean if the value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the number if the value is a number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(x) => Some(x),
            _ => None,
        }
    }

    /// Returns the float if the value is a number representable as a finite `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    /// Returns the string slice if the value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(x) => Some(x),
            _ => None,
        }
    }

    /// Returns the elements if the value is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(x) => Some(x),
            _ => None,
        }
    }

    /// Returns the entries if the value is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(x) => Some(x),
            _ => None,
        }
    }

    /// Normalizes the raw JSON text of a single value.
    pub(crate) fn from_raw(raw: &RawValue) -> Result<Self, serde_json::Error> {
        let text = raw.get().trim();
        match text.as_bytes().first() {
            Some(b'{') => {
                let entries: BTreeMap<String, Box<RawValue>> = serde_json::from_str(text)?;
                entries
                    .into_iter()
                    .map(|(key, value)| Self::from_raw(&value).map(|value| (key, value)))
                    .collect::<Result<_, _>>()
                    .map(Self::Object)
            }
            Some(b'[') => {
                let elements: Vec<Box<RawValue>> = serde_json::from_str(text)?;
                elements
                    .iter()
                    .map(|value| Self::from_raw(value))
                    .collect::<Result<_, _>>()
                    .map(Self::Array)
            }
            Some(b'"') => serde_json::from_str(text).map(Self::String),
            Some(b't' | b'f') => serde_json::from_str(text).map(Self::Bool),
            Some(b'n') => serde_json::from_str::<()>(text).map(|()| Self::Null),
            _ => Ok(Self::Number(Number::from_literal(text))),
        }
    }

    /// Converts the value into `V` through its JSON text.
    pub(crate) fn to_typed<V: DeserializeOwned>(&self) -> Result<V, serde_json::Error> {
        let text = serde_json::to_string(self)?;
        serde_json::from_str(&text)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(x) => Self::Bool(x),
            serde_json::Value::Number(x) => Self::Number(x.into()),
            serde_json::Value::String(x) => Self::String(x),
            serde_json::Value::Array(x) => Self::Array(x.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(x) => {
                Self::Object(x.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(x) => Self::Bool(x),
            Value::Number(x) => x.to_json(),
            Value::String(x) => Self::String(x),
            Value::Array(x) => Self::Array(x.into_iter().map(Self::from).collect()),
            Value::Object(x) => Self::Object(x.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self::Object(value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(x) => serializer.serialize_bool(*x),
            Self::Number(x) => x.serialize(serializer),
            Self::String(x) => serializer.serialize_str(x),
            Self::Array(x) => serializer.collect_seq(x),
            Self::Object(x) => serializer.collect_map(x),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Self::from_raw(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> Value {
        serde_json::from_str(text).expect("valid json")
    }

    fn round_trip(text: &str) -> String {
        serde_json::to_string(&normalize(text)).expect("serializable")
    }

    #[test]
    fn integers_become_floats() {
        assert_eq!(normalize("12"), Value::Number(Number::Float(12.0)));
        assert_eq!(normalize("-3"), Value::Number(Number::Float(-3.0)));
        assert_eq!(normalize("0.25"), Value::Number(Number::Float(0.25)));
    }

    #[test]
    fn huge_literal_is_kept() {
        assert_eq!(
            normalize("1e400"),
            Value::Number(Number::Literal("1e400".to_owned()))
        );
        assert_eq!(round_trip("1e400"), "1e400");
        assert_eq!(round_trip("[-1E+400]"), "[-1E+400]");
    }

    #[test]
    fn underflowing_literal_is_kept() {
        assert_eq!(
            normalize("-2E-999"),
            Value::Number(Number::Literal("-2E-999".to_owned()))
        );
        assert_eq!(round_trip(r#"{"n":-2E-999}"#), r#"{"n":-2E-999}"#);
    }

    #[test]
    fn zero_literals_are_floats() {
        assert_eq!(normalize("0"), Value::Number(Number::Float(0.0)));
        assert_eq!(normalize("0.000e-999"), Value::Number(Number::Float(0.0)));
        assert_eq!(round_trip("0e5"), "0");
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        assert_eq!(Number::Float(-0.0).as_i64(), None);
        assert_eq!(Number::Float(-0.0).as_u64(), None);
        assert_eq!(Number::Float(0.0).as_i64(), Some(0));
        assert_eq!(round_trip("-0.0"), "-0.0");
    }

    #[test]
    fn conversion_to_typed_values() {
        assert_eq!(normalize("1e2").to_typed::<i64>().ok(), Some(100));
        assert_eq!(normalize("2.5").to_typed::<f32>().ok(), Some(2.5));
        assert!(normalize("2.5").to_typed::<u32>().is_err());
        assert_eq!(
            normalize("9e999").to_typed::<Value>().ok(),
            Some(Value::Number(Number::Literal("9e999".to_owned())))
        );
    }

    #[test]
    fn integral_floats_serialize_as_integers() {
        let array = normalize("[1, 2.5, -7, 9007199254740992]");
        assert_eq!(
            serde_json::to_string(&array).expect("serializable"),
            "[1,2.5,-7,9007199254740992]"
        );
    }

    #[test]
    fn nested_objects_are_sorted() {
        let object = normalize(r#"{"b": {"y": 1, "x": 2}, "a": null}"#);
        assert_eq!(
            serde_json::to_string(&object).expect("serializable"),
            r#"{"a":null,"b":{"x":2,"y":1}}"#
        );
    }
}
