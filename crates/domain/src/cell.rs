use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::DomainError;
use crate::validators::{validate_max_len, validate_required};

/// Kind of vehicle a parking cell is sized for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    #[serde(rename = "carro")]
    Car,
    #[serde(rename = "moto")]
    Motorcycle,
}

impl CellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "carro",
            Self::Motorcycle => "moto",
        }
    }
}

impl FromStr for CellType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carro" | "car" => Ok(Self::Car),
            "moto" | "motorcycle" => Ok(Self::Motorcycle),
            other => Err(DomainError::Validation(format!(
                "Unknown cell type '{other}' (expected carro or moto)"
            ))),
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub number: Arc<str>,
    pub cell_type: CellType,
    pub created_at: Option<String>,
}

impl Cell {
    pub fn new(number: String, cell_type: CellType) -> Self {
        Self {
            number: Arc::from(Self::normalize_number(&number).as_str()),
            cell_type,
            created_at: None,
        }
    }

    /// Cell numbers are matched case-insensitively ("a1" is cell "A1").
    pub fn normalize_number(number: &str) -> String {
        number.trim().to_uppercase()
    }

    pub fn validate_number(number: &str) -> Result<(), DomainError> {
        validate_required("Cell number", number)?;
        validate_max_len("Cell number", number.trim(), 20)
    }
}
