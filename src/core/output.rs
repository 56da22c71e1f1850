//! Flat-file output for generated datasets.
//!
//! Each table is written as a header row followed by one comma-separated
//! row per record. Every row, the last one included, ends in `\n`.
//! Prices and totals keep one fractional digit (`6.0`); modification costs
//! are written without trailing zeros (`1`, `0.25`).

use super::errors::SimResult;
use super::records::{Dataset, Modification, Order, OrderItem};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const ORDERS_FILE: &str = "order.csv";
pub const ORDER_ITEMS_FILE: &str = "orderItem.csv";
pub const MODIFICATIONS_FILE: &str = "modifications.csv";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A record that knows its table header and how to render itself as a row
pub trait CsvTable {
    const HEADER: &'static str;

    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
}

impl CsvTable for Order {
    const HEADER: &'static str = "OrderID,EmployeeID,Location,Date,OrderTotal";

    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{},{},{},{},{}",
            self.id,
            self.employee_id,
            self.location,
            self.placed_at.format(DATE_FORMAT),
            self.total
        )
    }
}

impl CsvTable for OrderItem {
    const HEADER: &'static str = "OrderItemID,MenuID,Price,QuantityPurchased,OrderID,Size";

    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            self.id,
            self.menu_id,
            self.price,
            self.quantity,
            self.order_id,
            self.size.offset()
        )
    }
}

impl CsvTable for Modification {
    const HEADER: &'static str = "ModificationID,InventoryID,OrderItemID,Quantity,Cost";

    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{},{},{},{},{}",
            self.id,
            self.inventory_id,
            self.order_item_id,
            self.quantity,
            self.cost.normalized()
        )
    }
}

/// Write a header and every row of `records` to `out`
pub fn write_table<T: CsvTable, W: Write>(records: &[T], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", T::HEADER)?;
    for record in records {
        record.write_row(&mut *out)?;
    }
    Ok(())
}

fn write_table_file<T: CsvTable>(records: &[T], path: &Path) -> SimResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_table(records, &mut out)?;
    out.flush()?;
    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Write the three tables of `dataset` into `dir`, returning the file paths
pub fn write_dataset(dataset: &Dataset, dir: &Path) -> SimResult<[PathBuf; 3]> {
    let paths = [
        dir.join(ORDERS_FILE),
        dir.join(ORDER_ITEMS_FILE),
        dir.join(MODIFICATIONS_FILE),
    ];
    write_table_file(&dataset.orders, &paths[0])?;
    write_table_file(&dataset.order_items, &paths[1])?;
    write_table_file(&dataset.modifications, &paths[2])?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{ModificationKind, SizeAdjustment};
    use crate::core::types::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_order_rows() {
        let order = Order {
            id: 1,
            employee_id: 2,
            location: "College Station".to_string(),
            placed_at: NaiveDate::from_ymd_opt(2024, 6, 30)
                .unwrap()
                .and_hms_opt(7, 5, 0)
                .unwrap(),
            total: Money::from_cents(1210),
        };
        let mut out = Vec::new();
        write_table(&[order], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "OrderID,EmployeeID,Location,Date,OrderTotal\n1,2,College Station,2024-06-30 07:05:00,12.1\n"
        );
    }

    #[test]
    fn test_item_and_modification_rows() {
        let item = OrderItem {
            id: 4,
            menu_id: 21,
            price: Money::from_cents(745),
            quantity: 1,
            order_id: 3,
            size: SizeAdjustment::Small,
        };
        let modification = Modification {
            id: 9,
            kind: ModificationKind::Boba,
            inventory_id: 21,
            order_item_id: 4,
            quantity: 1,
            cost: Money::from_cents(100),
        };

        let mut out = Vec::new();
        write_table(&[item], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "OrderItemID,MenuID,Price,QuantityPurchased,OrderID,Size\n4,21,7.45,1,3,-1\n"
        );

        let mut out = Vec::new();
        write_table(&[modification], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ModificationID,InventoryID,OrderItemID,Quantity,Cost\n9,21,4,1,1\n"
        );
    }

    #[test]
    fn test_ice_cost_keeps_cents() {
        let modification = Modification {
            id: 1,
            kind: ModificationKind::Ice,
            inventory_id: 3,
            order_item_id: 2,
            quantity: 1,
            cost: Money::from_cents(25),
        };
        let mut out = Vec::new();
        modification.write_row(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1,3,2,1,0.25\n");
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let mut out = Vec::new();
        write_table::<Modification, _>(&[], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ModificationID,InventoryID,OrderItemID,Quantity,Cost\n"
        );
    }
}
