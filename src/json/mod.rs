//! Order preserving JSON codec of the [`OrderedMap`].
//!
//! * Encoding writes a JSON object whose entries follow the insertion order of the map,
//!   rendering every key with its `Display` implementation.
//! * Decoding reads the entries of a JSON object one at a time in the order they appear in the
//!   text and `set`s them into the map, converting the raw key text through [`MapKey`] and the
//!   normalized [`Value`] into the value type.
//!
//! Only the top level object keeps its order. Nested objects are normalized into
//! [`Value::Object`] whose keys are sorted.
//!
//! # Examples
//!
//! ```
//! use orx_ordered_map::OrderedMap;
//! use orx_ordered_map::json::{self, Value};
//!
//! let mut map = OrderedMap::new();
//! map.set("z", 1);
//! map.set("y", 2);
//! map.set("x", 3);
//! assert_eq!(json::encode(&map).unwrap(), r#"{"z":1,"y":2,"x":3}"#);
//!
//! let map: OrderedMap<String, Value> = json::decode(r#"{"b":[1,2.5],"a":{"d":null,"c":true}}"#).unwrap();
//! assert!(map.keys().map(String::as_str).eq(["b", "a"]));
//! assert_eq!(json::encode(&map).unwrap(), r#"{"b":[1,2.5],"a":{"c":true,"d":null}}"#);
//! ```
//!
//! [`OrderedMap`]: crate::OrderedMap

mod de;
mod error;
mod key;
mod ser;
mod value;

pub use de::{decode, decode_into, decode_slice};
pub use error::CodecError;
pub use key::{JsonKey, KeyCategory, MapKey};
pub use ser::{encode, encode_to_vec, encode_to_writer};
pub use value::{Number, Value};
