use parkway_domain::Cell;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellResponse {
    pub number: String,
    #[serde(rename = "type")]
    pub cell_type: String,
    pub created_at: Option<String>,
}

impl From<Cell> for CellResponse {
    fn from(cell: Cell) -> Self {
        Self {
            number: cell.number.to_string(),
            cell_type: cell.cell_type.to_string(),
            created_at: cell.created_at,
        }
    }
}

/// Request DTO for registering a cell; the type defaults to "carro"
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCellRequest {
    pub number: String,
    #[serde(rename = "type")]
    pub cell_type: Option<String>,
}
