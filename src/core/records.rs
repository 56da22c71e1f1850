use super::types::{EmployeeId, MenuId, ModificationId, Money, OrderId, OrderItemId};
use chrono::NaiveDateTime;

/// Cup size relative to the regular drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeAdjustment {
    Small,
    Regular,
    Large,
}

impl SizeAdjustment {
    /// Map a draw from `-1..=1` onto a size.
    pub fn from_offset(offset: i64) -> Option<Self> {
        match offset {
            -1 => Some(SizeAdjustment::Small),
            0 => Some(SizeAdjustment::Regular),
            1 => Some(SizeAdjustment::Large),
            _ => None,
        }
    }

    pub fn offset(self) -> i8 {
        match self {
            SizeAdjustment::Small => -1,
            SizeAdjustment::Regular => 0,
            SizeAdjustment::Large => 1,
        }
    }

    pub fn price_delta(self, step: f64) -> f64 {
        step * f64::from(self.offset())
    }
}

/// Paid add-ons a line item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModificationKind {
    Ice,
    Boba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub employee_id: EmployeeId,
    pub location: String,
    pub placed_at: NaiveDateTime,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub menu_id: MenuId,
    pub price: Money,
    pub quantity: u32,
    pub order_id: OrderId,
    pub size: SizeAdjustment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Modification {
    pub id: ModificationId,
    pub kind: ModificationKind,
    /// Menu id of the item being modified, written out as `InventoryID`.
    pub inventory_id: MenuId,
    pub order_item_id: OrderItemId,
    pub quantity: u32,
    pub cost: Money,
}

/// The three tables produced by one simulation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub modifications: Vec<Modification>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_sales(&self) -> Money {
        self.orders.iter().map(|order| order.total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_offsets() {
        assert_eq!(SizeAdjustment::from_offset(-1), Some(SizeAdjustment::Small));
        assert_eq!(SizeAdjustment::from_offset(0), Some(SizeAdjustment::Regular));
        assert_eq!(SizeAdjustment::from_offset(1), Some(SizeAdjustment::Large));
        assert_eq!(SizeAdjustment::from_offset(2), None);
        assert_eq!(SizeAdjustment::Small.price_delta(0.5), -0.5);
        assert_eq!(SizeAdjustment::Large.price_delta(0.5), 0.5);
        assert_eq!(SizeAdjustment::Regular.price_delta(0.5), 0.0);
    }
}
