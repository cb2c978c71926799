use super::KeyCategory;

/// Errors of encoding an ordered map into, or decoding it from, JSON text.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input is not a well-formed JSON object: invalid JSON, a value other than an object
    /// at the top level, a missing brace, or trailing characters after the object.
    #[error("malformed JSON object: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// The raw text of a key cannot be converted into the key type of the map.
    #[error("failed to convert key {key:?} into {target} ({category} key): {reason}")]
    KeyConversion {
        /// Raw key text as it appears in the input.
        key: String,
        /// Name of the key type of the map.
        target: &'static str,
        /// Conversion rule applied to the key type.
        category: KeyCategory,
        /// Description of the conversion failure.
        reason: String,
    },

    /// The value of a key cannot be assigned to the value type of the map.
    #[error("value of key {key:?} does not match the value type: {source}")]
    ValueTypeMismatch {
        /// Raw key text of the offending entry.
        key: String,
        /// Failure of converting the normalized value.
        source: serde_json::Error,
    },

    /// The map cannot be encoded, either because a value failed to serialize or the writer failed.
    #[error("failed to encode the map: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CodecError {
    /// Raw text of the key which caused the error, if the error is specific to an entry.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::KeyConversion { key, .. } | Self::ValueTypeMismatch { key, .. } => Some(key),
            Self::MalformedInput(_) | Self::Encode(_) => None,
        }
    }
}
