use super::CodecError;
use crate::{MemoryPolicy, OrderedMap};
use core::fmt::Display;
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::io::Write;

/// Key of the map rendered as a JSON string through its `Display` implementation.
struct KeyText<'a, K>(&'a K);

impl<K: Display> Serialize for KeyText<'_, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self.0)
    }
}

/// Serializes the map as an object whose entries follow the insertion order.
impl<K, V, S, M> Serialize for OrderedMap<K, V, S, M>
where
    K: Display,
    V: Serialize,
    M: MemoryPolicy,
{
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut object = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            object.serialize_entry(&KeyText(key), value)?;
        }
        object.end()
    }
}

/// Encodes the `map` as a compact JSON object text whose entries follow the insertion order.
///
/// # Examples
///
/// ```
/// use orx_ordered_map::{OrderedMap, json};
///
/// let mut map = OrderedMap::new();
/// map.set("A", serde_json::json!(1));
/// map.set("B", serde_json::json!("x"));
/// assert_eq!(json::encode(&map).unwrap(), r#"{"A":1,"B":"x"}"#);
///
/// let empty = OrderedMap::<String, u8>::new();
/// assert_eq!(json::encode(&empty).unwrap(), "{}");
/// ```
pub fn encode<K, V, S, M>(map: &OrderedMap<K, V, S, M>) -> Result<String, CodecError>
where
    K: Display,
    V: Serialize,
    M: MemoryPolicy,
{
    serde_json::to_string(map).map_err(CodecError::Encode)
}

/// Encodes the `map` as compact JSON object bytes whose entries follow the insertion order.
pub fn encode_to_vec<K, V, S, M>(map: &OrderedMap<K, V, S, M>) -> Result<Vec<u8>, CodecError>
where
    K: Display,
    V: Serialize,
    M: MemoryPolicy,
{
    serde_json::to_vec(map).map_err(CodecError::Encode)
}

/// Writes the `map` into the `writer` as a compact JSON object whose entries follow the insertion order.
pub fn encode_to_writer<W, K, V, S, M>(
    writer: W,
    map: &OrderedMap<K, V, S, M>,
) -> Result<(), CodecError>
where
    W: Write,
    K: Display,
    V: Serialize,
    M: MemoryPolicy,
{
    serde_json::to_writer(writer, map).map_err(CodecError::Encode)
}
