use serde::{Deserialize, Deserializer, Serialize};

use crate::deserialize_string_or_null;

/// Listed vehicle record as returned by the search service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: u64,
    #[serde(rename = "company_name")]
    pub make: String,
    pub model: String,
    pub year: u32,
    pub price: f64,
    pub mileage: u64,
    pub color: String,
    pub transmission: String,
    pub fuel_type: String,
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_vec_or_null", default)]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub video: Option<String>,
    #[serde(deserialize_with = "deserialize_vec_or_null", default)]
    pub features: Vec<String>,
    /// The service stores this as nullable and treats a missing value as eligible
    #[serde(deserialize_with = "deserialize_bool_or_true", default = "default_true")]
    pub available_for_test_drive: bool,
}

fn default_true() -> bool {
    true
}

fn deserialize_bool_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn deserialize_vec_or_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Car {
    /// Display title, e.g. "Tesla Model 3"
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}
