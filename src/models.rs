//! Frontend Models
//!
//! Data structures matching the `/menu` REST resource.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Menu item (matches the wire shape of `/menu`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Server-assigned id, absent on a new draft
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_id"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_sizes")]
    pub sizes: Vec<String>,
}

impl MenuItem {
    /// Id as a borrowed str, if the item has been persisted
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Price as transported: either a JSON string or a JSON number.
///
/// The original representation is kept so a re-save sends back exactly
/// what the server handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl Price {
    /// Parsed numeric value, `None` when the text is not a finite number
    pub fn amount(&self) -> Option<f64> {
        let value = match self {
            Price::Number(n) => n.as_f64()?,
            Price::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Price::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Price {
    fn from(s: &str) -> Self {
        Price::Text(s.to_string())
    }
}

// Some backends (json-server < 1.0) hand out numeric ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

fn deserialize_sizes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
