use crate::domain::card::{Card, Estimate};
use serde::{Deserialize, Serialize};

/// A named, ordered collection of cards on a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    is_active: bool,
    #[serde(default)]
    cards: Vec<Card>,
}

impl Column {
    pub fn new(name: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            is_active,
            cards: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Cards in insertion order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Appends a card to the end of the column
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Sums the estimates of every card in this column
    pub fn estimate(&self) -> Estimate {
        self.cards.iter().map(Card::estimate).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, estimate: f64) -> Card {
        Card::new(name, Estimate::new(estimate).unwrap()).unwrap()
    }

    #[test]
    fn test_column_creation() {
        let column = Column::new("Todo", true);
        assert_eq!(column.name(), "Todo");
        assert!(column.is_active());
        assert!(column.cards().is_empty());
        assert_eq!(column.estimate(), Estimate::ZERO);

        assert!(!Column::new("Done", false).is_active());
    }

    #[test]
    fn test_add_card_preserves_order() {
        let mut column = Column::new("Todo", true);
        column.add_card(card("First", 1.0));
        column.add_card(card("Second", 2.0));
        column.add_card(card("Third", 3.0));

        let names: Vec<&str> = column.cards().iter().map(Card::name).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_add_card_is_not_idempotent() {
        let mut column = Column::new("Todo", true);
        column.add_card(card("Same", 2.0));
        column.add_card(card("Same", 2.0));

        assert_eq!(column.cards().len(), 2);
        assert_eq!(column.estimate().value(), 4.0);
    }

    #[test]
    fn test_column_estimate() {
        let mut column = Column::new("Doing", true);
        column.add_card(card("A", 0.5));
        column.add_card(card("B", 1.5));
        assert_eq!(column.estimate().value(), 2.0);
    }

    #[test]
    fn test_column_deserialization_without_cards() {
        let column: Column = serde_json::from_str(r#"{"name":"Done","is_active":false}"#).unwrap();
        assert_eq!(column.name(), "Done");
        assert!(column.cards().is_empty());
    }
}
