//! # Taskboard Core
//!
//! Domain model for estimated kanban boards.
//!
//! A [`Board`] owns an ordered list of [`Column`]s, each column owns an
//! ordered list of [`Card`]s, and every card carries a non-negative
//! [`Estimate`]. The board reports the total estimate across all of its
//! cards. Everything lives in memory; storage and presentation are left to
//! the caller.

pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, BoardId, ColumnConfig},
    card::{Card, Estimate},
    column::Column,
};
pub use error::{BoardError, Result};
