use async_trait::async_trait;
use parkway_application::ports::CellRepository;
use parkway_domain::{Cell, DomainError};
use tokio::sync::RwLock;
use tracing::instrument;

use super::now_timestamp;

#[derive(Default)]
pub struct InMemoryCellRepository {
    cells: RwLock<Vec<Cell>>,
}

impl InMemoryCellRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CellRepository for InMemoryCellRepository {
    #[instrument(skip(self, cell), fields(number = %cell.number))]
    async fn create(&self, mut cell: Cell) -> Result<Cell, DomainError> {
        let mut cells = self.cells.write().await;

        if cells.iter().any(|c| c.number == cell.number) {
            return Err(DomainError::Conflict(format!(
                "Cell '{}' already exists",
                cell.number
            )));
        }

        cell.created_at = Some(now_timestamp());
        cells.push(cell.clone());
        Ok(cell)
    }

    #[instrument(skip(self))]
    async fn get_by_number(&self, number: &str) -> Result<Option<Cell>, DomainError> {
        let number = Cell::normalize_number(number);
        let cells = self.cells.read().await;
        Ok(cells.iter().find(|c| *c.number == *number).cloned())
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Cell>, DomainError> {
        Ok(self.cells.read().await.clone())
    }
}
