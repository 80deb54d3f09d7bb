use parkway_domain::{Cell, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::CellRepository;

pub struct GetCellsUseCase {
    cell_repo: Arc<dyn CellRepository>,
}

impl GetCellsUseCase {
    pub fn new(cell_repo: Arc<dyn CellRepository>) -> Self {
        Self { cell_repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Cell>, DomainError> {
        self.cell_repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_number(&self, number: &str) -> Result<Option<Cell>, DomainError> {
        Cell::validate_number(number)?;
        self.cell_repo.get_by_number(number).await
    }
}
