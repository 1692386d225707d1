use serde::{Deserialize, Deserializer, Serialize};

/// A single navigable entry of a list.
///
/// Missing or null fields decode as empty strings, and numeric or boolean
/// scalars (`tags: 2023`) are taken as their text. The capitalised aliases
/// accept payloads written by older releases, which serialized the record with
/// `Name`/`Tags`/`Url` keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, alias = "Name", deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, alias = "Tags", deserialize_with = "scalar_string")]
    pub tags: String,
    #[serde(default, alias = "Url", deserialize_with = "scalar_string")]
    pub url: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Str(s)) => s,
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::UInt(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
    })
}

impl Link {
    pub fn new(name: impl Into<String>, tags: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: tags.into(),
            url: url.into(),
        }
    }
}
