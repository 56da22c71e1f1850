use super::errors::{SimError, SimResult};
use super::types::MenuId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base prices of the drinks sold by the store, keyed 1..=33.
const DEFAULT_PRICES: [f64; 33] = [
    5.8, 6.0, 6.5, 6.25, 6.25, 6.25, 6.5, 6.75, 6.75, 4.65, 4.85, 5.8, 6.25, 6.25, 6.25, 6.25,
    5.2, 6.5, 6.5, 6.5, 6.95, 6.95, 5.8, 6.5, 5.2, 6.5, 6.25, 6.5, 6.5, 6.5, 6.75, 6.75, 6.75,
];

/// Mutable price table shared by every line item priced during a run.
///
/// Prices are kept as `f64` so repeated escalation accumulates exactly the
/// way the published datasets did; truncation to cents happens per item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    prices: BTreeMap<MenuId, f64>,
}

impl Menu {
    pub fn new(prices: impl IntoIterator<Item = (MenuId, f64)>) -> Self {
        Self {
            prices: prices.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = MenuId> + '_ {
        self.prices.keys().copied()
    }

    /// Identifier at position `index` in ascending id order.
    pub fn id_at(&self, index: usize) -> Option<MenuId> {
        self.prices.keys().nth(index).copied()
    }

    pub fn price(&self, id: MenuId) -> SimResult<f64> {
        self.prices
            .get(&id)
            .copied()
            .ok_or(SimError::UnknownMenuItem(id))
    }

    /// Raise every price by `increment`. Increases are cumulative.
    pub fn escalate(&mut self, increment: f64) {
        for price in self.prices.values_mut() {
            *price += increment;
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new((1..).zip(DEFAULT_PRICES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu() {
        let menu = Menu::default();
        assert_eq!(menu.len(), 33);
        assert_eq!(menu.price(1).unwrap(), 5.8);
        assert_eq!(menu.price(10).unwrap(), 4.65);
        assert_eq!(menu.price(33).unwrap(), 6.75);
        assert_eq!(menu.ids().next(), Some(1));
        assert_eq!(menu.id_at(32), Some(33));
        assert_eq!(menu.id_at(33), None);
    }

    #[test]
    fn test_escalation_is_cumulative() {
        let mut menu = Menu::default();
        menu.escalate(0.25);
        menu.escalate(0.25);
        assert!((menu.price(1).unwrap() - 6.3).abs() < 1e-9);
        assert!((menu.price(21).unwrap() - 7.45).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_item() {
        let menu = Menu::new([(1, 5.0)]);
        assert!(matches!(menu.price(2), Err(SimError::UnknownMenuItem(2))));
    }
}
