pub mod board;
pub mod card;
pub mod column;

pub use board::{Board, BoardConfig, BoardId, ColumnConfig};
pub use card::{Card, Estimate};
pub use column::Column;
