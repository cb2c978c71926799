use super::{CodecError, MapKey, Value};
use crate::{MemoryPolicy, OrderedMap};
use core::{
    fmt::Formatter,
    hash::{BuildHasher, Hash},
};
use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, Error, MapAccess, Visitor},
};
use serde_json::value::RawValue;

/// Visitor setting the entries of a JSON object into the `map` one at a time,
/// in the order they appear in the input.
struct OrderedMapVisitor<'a, K, V, S, M>
where
    M: MemoryPolicy,
{
    map: &'a mut OrderedMap<K, V, S, M>,
    failure: Option<&'a mut Option<CodecError>>,
}

impl<K, V, S, M> OrderedMapVisitor<'_, K, V, S, M>
where
    M: MemoryPolicy,
{
    /// Records the structured `error` for the caller, if it listens, and converts it into the deserializer error.
    fn fail<E: Error>(&mut self, error: CodecError) -> E {
        let message = error.to_string();
        if let Some(failure) = self.failure.as_mut() {
            **failure = Some(error);
        }
        E::custom(message)
    }
}

impl<'de, K, V, S, M> Visitor<'de> for OrderedMapVisitor<'_, K, V, S, M>
where
    K: MapKey + Hash + Eq,
    V: DeserializeOwned,
    S: BuildHasher,
    M: MemoryPolicy,
{
    type Value = ();

    fn expecting(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A>(mut self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while let Some(text) = access.next_key::<String>()? {
            let raw = access.next_value::<Box<RawValue>>()?;
            let value = Value::from_raw(&raw).map_err(A::Error::custom)?;

            let key = match K::from_key_text(&text) {
                Ok(key) => key,
                Err(reason) => {
                    return Err(self.fail(CodecError::KeyConversion {
                        key: text,
                        target: core::any::type_name::<K>(),
                        category: K::CATEGORY,
                        reason: reason.to_string(),
                    }));
                }
            };

            let value = match value.to_typed::<V>() {
                Ok(value) => value,
                Err(source) => {
                    return Err(self.fail(CodecError::ValueTypeMismatch { key: text, source }));
                }
            };

            self.map.set(key, value);
        }
        Ok(())
    }
}

/// Deserializes a JSON object into a new map, keeping the order of the entries in the input.
///
/// Values are captured as raw JSON text; hence, this is supported by `serde_json` deserializers only.
impl<'de, K, V, S, M> Deserialize<'de> for OrderedMap<K, V, S, M>
where
    K: MapKey + Hash + Eq,
    V: DeserializeOwned,
    S: BuildHasher + Default,
    M: MemoryPolicy,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Self::default();
        let visitor = OrderedMapVisitor {
            map: &mut map,
            failure: None,
        };
        deserializer.deserialize_map(visitor)?;
        Ok(map)
    }
}

/// Decodes the JSON object `text` into a new map with the default hasher and memory policy,
/// keeping the order of the entries in the text.
///
/// Empty text decodes into an empty map.
///
/// # Examples
///
/// ```
/// use orx_ordered_map::{OrderedMap, json};
///
/// let map: OrderedMap<u32, String> = json::decode(r#"{"3":"c","1":"a","2":"b"}"#).unwrap();
/// assert!(map.keys().eq(&[3, 1, 2]));
///
/// let error = json::decode::<u32, String>(r#"{"x":"a"}"#).unwrap_err();
/// assert_eq!(error.key(), Some("x"));
/// ```
pub fn decode<K, V>(text: &str) -> Result<OrderedMap<K, V>, CodecError>
where
    K: MapKey + Hash + Eq,
    V: DeserializeOwned,
{
    decode_slice(text.as_bytes())
}

/// Decodes the JSON object `bytes` into a new map with the default hasher and memory policy,
/// keeping the order of the entries in the input.
///
/// Empty input decodes into an empty map.
pub fn decode_slice<K, V>(bytes: &[u8]) -> Result<OrderedMap<K, V>, CodecError>
where
    K: MapKey + Hash + Eq,
    V: DeserializeOwned,
{
    let mut map = OrderedMap::new();
    decode_bytes_into(&mut map, bytes)?;
    Ok(map)
}

/// Clears the `map` and decodes the JSON object `text` into it, keeping the order of the entries in the text.
///
/// Empty text leaves the map empty.
///
/// On failure, the map holds the entries decoded before the failing entry and must be discarded.
pub fn decode_into<K, V, S, M>(map: &mut OrderedMap<K, V, S, M>, text: &str) -> Result<(), CodecError>
where
    K: MapKey + Hash + Eq,
    V: DeserializeOwned,
    S: BuildHasher,
    M: MemoryPolicy,
{
    map.clear();
    decode_bytes_into(map, text.as_bytes())
}

fn decode_bytes_into<K, V, S, M>(
    map: &mut OrderedMap<K, V, S, M>,
    bytes: &[u8],
) -> Result<(), CodecError>
where
    K: MapKey + Hash + Eq,
    V: DeserializeOwned,
    S: BuildHasher,
    M: MemoryPolicy,
{
    if bytes.is_empty() {
        return Ok(());
    }

    let mut failure = None;
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let visitor = OrderedMapVisitor {
        map,
        failure: Some(&mut failure),
    };
    let result = (&mut deserializer)
        .deserialize_map(visitor)
        .and_then(|()| deserializer.end());

    result.map_err(|error| {
        let error = match failure {
            Some(failure) => failure,
            None => CodecError::MalformedInput(error),
        };
        log::debug!("failed to decode ordered map: {error}");
        error
    })
}
