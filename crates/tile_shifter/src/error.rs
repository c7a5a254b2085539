use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board needs exactly {expected} cells, got {found}")]
    CellCount { expected: usize, found: usize },
}
