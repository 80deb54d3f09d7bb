use parkway_domain::{Cell, CellType, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::CellRepository;

pub struct RegisterCellUseCase {
    cell_repo: Arc<dyn CellRepository>,
}

impl RegisterCellUseCase {
    pub fn new(cell_repo: Arc<dyn CellRepository>) -> Self {
        Self { cell_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, number: String, cell_type: CellType) -> Result<Cell, DomainError> {
        Cell::validate_number(&number)?;

        let cell = self.cell_repo.create(Cell::new(number, cell_type)).await?;

        info!(number = %cell.number, cell_type = %cell.cell_type, "Cell registered");

        Ok(cell)
    }
}
