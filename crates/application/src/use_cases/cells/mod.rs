mod get_cells;
mod register_cell;

pub use get_cells::GetCellsUseCase;
pub use register_cell::RegisterCellUseCase;
