use crate::{
    domain::{
        card::{Card, Estimate},
        column::Column,
    },
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Numeric board identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(u64);

impl BoardId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BoardId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for BoardId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| BoardError::InvalidBoardId(s.to_string()))
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Template for a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    pub is_active: bool,
}

impl ColumnConfig {
    pub fn new(name: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            is_active,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            columns: vec![
                ColumnConfig::new("Todo", true),
                ColumnConfig::new("Doing", true),
                ColumnConfig::new("Done", false),
            ],
        }
    }
}

/// Kanban board: an identified, named list of columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    name: String,
    #[serde(default)]
    columns: Vec<Column>,
}

impl Board {
    /// Creates an empty board
    pub fn new(id: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Creates a board named after `config` with its columns in order
    pub fn from_config(id: impl Into<BoardId>, config: BoardConfig) -> Self {
        let mut board = Self::new(id, config.name);
        for column in config.columns {
            board.add_column(column.name, column.is_active);
        }
        board
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in insertion order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Appends an empty column. Names are not required to be unique.
    pub fn add_column(&mut self, name: impl Into<String>, is_active: bool) {
        let name = name.into();
        if self.column(&name).is_some() {
            tracing::warn!(
                board = %self.id,
                column = %name,
                "Column name already exists on board; lookups resolve to the first one"
            );
        }

        tracing::debug!(board = %self.id, column = %name, is_active, "Adding column");
        self.columns.push(Column::new(name, is_active));
    }

    /// Appends a card to the first column named `column_name`.
    ///
    /// The board is left untouched if the estimate or card name is invalid,
    /// if the board total would stop being finite, or if no column matches.
    pub fn add_card(
        &mut self,
        column_name: &str,
        card_name: impl Into<String>,
        estimate: f64,
    ) -> Result<()> {
        let card = Card::new(card_name, Estimate::new(estimate)?)?;
        let board_id = self.id;

        if self.estimate().checked_add(card.estimate()).is_none() {
            tracing::debug!(board = %board_id, estimate, "Board total would overflow");
            return Err(BoardError::InvalidEstimate(estimate.to_string()));
        }

        let Some(column) = self.column_mut(column_name) else {
            tracing::debug!(board = %board_id, column = %column_name, "Column not found");
            return Err(BoardError::ColumnNotFound(column_name.to_string()));
        };

        tracing::debug!(
            board = %board_id,
            column = %column_name,
            card = %card.name(),
            estimate = %card.estimate(),
            "Adding card"
        );
        column.add_card(card);
        Ok(())
    }

    /// Gets the first column with the given name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name() == name)
    }

    fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| col.name() == name)
    }

    /// Columns flagged as active, in order
    pub fn active_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|col| col.is_active())
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|col| col.cards().len()).sum()
    }

    /// Sums the estimates of every card on the board.
    ///
    /// Cards are added up column by column, in column order, not in the
    /// order they were added to the board. With fractional estimates the
    /// result can differ from a running total by floating-point rounding.
    pub fn estimate(&self) -> Estimate {
        self.columns.iter().map(Column::estimate).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(1, BoardConfig::default())
    }
}
