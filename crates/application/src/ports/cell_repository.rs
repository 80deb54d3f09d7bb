use async_trait::async_trait;
use parkway_domain::{Cell, DomainError};

#[async_trait]
pub trait CellRepository: Send + Sync {
    /// Stores a cell; fails with `DomainError::Conflict` if the number is taken
    async fn create(&self, cell: Cell) -> Result<Cell, DomainError>;

    async fn get_by_number(&self, number: &str) -> Result<Option<Cell>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Cell>, DomainError>;
}
