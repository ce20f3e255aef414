use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fuel-type category that can narrow a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelFilter {
    Electric,
    Hybrid,
    Petrol,
    Diesel,
}

impl FuelFilter {
    pub const ALL: [FuelFilter; 4] = [
        FuelFilter::Electric,
        FuelFilter::Hybrid,
        FuelFilter::Petrol,
        FuelFilter::Diesel,
    ];

    /// Keyword appended to outgoing queries
    pub fn keyword(&self) -> &'static str {
        match self {
            FuelFilter::Electric => "electric",
            FuelFilter::Hybrid => "hybrid",
            FuelFilter::Petrol => "petrol",
            FuelFilter::Diesel => "diesel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelFilter::Electric => "Electric",
            FuelFilter::Hybrid => "Hybrid",
            FuelFilter::Petrol => "Petrol",
            FuelFilter::Diesel => "Diesel",
        }
    }

    /// Query text sent to the search service when this filter is active
    pub fn augment(&self, query: &str) -> String {
        format!("{} {} cars", query, self.keyword())
    }
}

impl fmt::Display for FuelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fuel type '{0}' (expected electric, hybrid, petrol or diesel)")]
pub struct ParseFuelFilterError(pub String);

impl FromStr for FuelFilter {
    type Err = ParseFuelFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electric" => Ok(FuelFilter::Electric),
            "hybrid" => Ok(FuelFilter::Hybrid),
            "petrol" => Ok(FuelFilter::Petrol),
            "diesel" => Ok(FuelFilter::Diesel),
            _ => Err(ParseFuelFilterError(s.to_string())),
        }
    }
}
