use crate::core::errors::{SimError, SimResult};
use crate::core::execution::config::{DayParameters, EmployeeRotation, SimulationConfig};
use crate::core::menu::Menu;
use crate::core::records::{
    Dataset, Modification, ModificationKind, Order, OrderItem, SizeAdjustment,
};
use crate::core::sampling::{SampleSource, StdRngSource};
use crate::core::types::{EmployeeId, MenuId, ModificationId, Money, OrderId, OrderItemId};
use chrono::{Days, NaiveDate, NaiveDateTime};
use log::{debug, info};

/// Counters reported at the end of a run. Never written to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub days: u32,
    pub peak_days: u32,
    pub price_increases: u32,
    pub orders: u64,
    pub order_items: u64,
    pub modifications: u64,
    pub total_sales: Money,
}

/// Day-by-day generator of orders, line items and modifications.
///
/// Owns the identifier counters and the live menu price table; nothing is
/// shared outside the instance.
pub struct Simulator<S: SampleSource> {
    config: SimulationConfig,
    menu: Menu,
    source: S,
    current_date: NaiveDate,
    day_index: u32,
    last_order_id: OrderId,
    last_item_id: OrderItemId,
    last_modification_id: ModificationId,
    dataset: Dataset,
    summary: RunSummary,
}

impl Simulator<StdRngSource> {
    /// Create a simulator drawing from `StdRng`, seeded from `config.random_seed`
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        let source = StdRngSource::from_seed_option(config.random_seed);
        Self::with_source(config, source)
    }
}

impl<S: SampleSource> Simulator<S> {
    /// Create a simulator drawing from a caller-supplied source
    ///
    /// # Arguments
    /// * `config` - Run configuration, validated before anything is drawn
    /// * `source` - Source of every random draw made during the run
    ///
    /// # Returns
    /// A simulator positioned at day index 0, or `SimError::InvalidConfig`
    pub fn with_source(config: SimulationConfig, source: S) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            menu: config.menu.clone(),
            current_date: config.start_date,
            config,
            source,
            day_index: 0,
            last_order_id: 0,
            last_item_id: 0,
            last_modification_id: 0,
            dataset: Dataset::new(),
            summary: RunSummary::default(),
        })
    }

    /// Simulate every configured day and hand back the generated tables
    pub fn run(mut self) -> SimResult<(Dataset, RunSummary)> {
        while self.step_day()? {}

        info!(
            "Simulated {} days: {} orders, {} items, {} modifications, total sales {}",
            self.summary.days,
            self.summary.orders,
            self.summary.order_items,
            self.summary.modifications,
            self.summary.total_sales
        );
        Ok((self.dataset, self.summary))
    }

    /// Simulate the current day and advance the calendar.
    /// Returns whether more days remain.
    pub fn step_day(&mut self) -> SimResult<bool> {
        if self.is_finished() {
            return Ok(false);
        }

        let peak = self.config.is_peak_day(self.current_date);
        let params = self.config.day_parameters(self.current_date);

        if self.day_index % self.config.price_increase_interval == 0 {
            self.menu.escalate(self.config.price_increase);
            self.summary.price_increases += 1;
            info!(
                "Day {}: menu prices raised by {}",
                self.day_index, self.config.price_increase
            );
        }

        let order_count = self.sample_order_count(&params)?;
        info!(
            "Day {} ({}{}): {} orders",
            self.day_index,
            self.current_date,
            if peak { ", peak" } else { "" },
            order_count
        );

        for _ in 0..order_count {
            self.simulate_order(&params)?;
        }

        if peak {
            self.summary.peak_days += 1;
        }
        self.summary.days += 1;
        self.day_index += 1;
        self.current_date = self
            .current_date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| SimError::InvalidConfig("simulated date overflowed".to_string()))?;

        Ok(!self.is_finished())
    }

    /// True once every configured day has been simulated
    pub fn is_finished(&self) -> bool {
        self.day_index >= self.config.total_days
    }

    /// Calendar date of the next day to simulate
    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn day_index(&self) -> u32 {
        self.day_index
    }

    /// Live price table, including every increase applied so far
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Records generated so far
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn sample_order_count(&mut self, params: &DayParameters) -> SimResult<u64> {
        let draw = self
            .source
            .normal(params.mean_orders, self.config.std_devs.orders)?;
        Ok(draw.ceil().abs() as u64)
    }

    /// Item count is redrawn until it is at least 1, up to the configured cap
    fn sample_item_count(&mut self, params: &DayParameters) -> SimResult<u32> {
        let attempts = self.config.max_item_count_redraws;
        for _ in 0..attempts {
            let draw = self
                .source
                .normal(params.mean_items, self.config.std_devs.items)?;
            let count = draw.trunc().abs() as u32;
            if count >= 1 {
                return Ok(count);
            }
        }
        Err(SimError::RejectionLimit { attempts })
    }

    fn sample_quantity(&mut self) -> SimResult<u32> {
        let draw = self
            .source
            .normal(self.config.quantity_mean, self.config.quantity_std_dev)?;
        Ok(draw.ceil().abs() as u32)
    }

    fn sample_time_of_day(&mut self) -> SimResult<NaiveDateTime> {
        let hour = self.source.uniform_inclusive(
            i64::from(self.config.first_hour),
            i64::from(self.config.last_hour),
        )?;
        let minute = self.source.uniform_inclusive(0, 59)?;
        self.current_date
            .and_hms_opt(hour as u32, minute as u32, 0)
            .ok_or_else(|| SimError::Distribution(format!("invalid time {}:{}", hour, minute)))
    }

    fn roll_modification(&mut self) -> SimResult<bool> {
        let odds = i64::from(self.config.modification_odds);
        Ok(self.source.uniform_inclusive(1, odds)? == 1)
    }

    fn employee_for(&self, order_id: OrderId) -> EmployeeId {
        let count = self.config.employee_count;
        match self.config.employee_rotation {
            EmployeeRotation::PerOrder => ((order_id - 1) % u64::from(count)) as EmployeeId + 1,
            EmployeeRotation::PerDay => self.day_index % count + 1,
        }
    }

    fn simulate_order(&mut self, params: &DayParameters) -> SimResult<()> {
        self.last_order_id += 1;
        let order_id = self.last_order_id;
        let employee_id = self.employee_for(order_id);
        let placed_at = self.sample_time_of_day()?;

        let item_count = self.sample_item_count(params)?;
        let mut total = Money::ZERO;
        for _ in 0..item_count {
            total += self.simulate_item(order_id)?;
        }

        debug!(
            "Order {} at {}: {} items, total {}",
            order_id, placed_at, item_count, total
        );

        self.dataset.orders.push(Order {
            id: order_id,
            employee_id,
            location: self.config.location.clone(),
            placed_at,
            total,
        });
        self.summary.orders += 1;
        self.summary.total_sales += total;
        Ok(())
    }

    /// Generate one line item and its modifications, returning its price
    fn simulate_item(&mut self, order_id: OrderId) -> SimResult<Money> {
        self.last_item_id += 1;
        let item_id = self.last_item_id;

        let menu_id = self.sample_menu_id()?;
        let size_draw = self.source.uniform_inclusive(-1, 1)?;
        let size = SizeAdjustment::from_offset(size_draw)
            .ok_or_else(|| SimError::Distribution(format!("invalid size {}", size_draw)))?;

        let mut add_on = 0.0;
        for kind in [ModificationKind::Ice, ModificationKind::Boba] {
            if self.roll_modification()? {
                let cost = match kind {
                    ModificationKind::Ice => self.config.ice_cost,
                    ModificationKind::Boba => self.config.boba_cost,
                };
                add_on += cost.as_f64();
                self.push_modification(kind, menu_id, item_id, cost);
            }
        }

        let quantity = self.sample_quantity()?;
        let base = self.menu.price(menu_id)?;
        let price = Money::truncate_from(
            (base + add_on + size.price_delta(self.config.size_step)) * f64::from(quantity),
        );

        debug!(
            "Item {}: menu {} size {} quantity {} price {}",
            item_id,
            menu_id,
            size.offset(),
            quantity,
            price
        );

        self.dataset.order_items.push(OrderItem {
            id: item_id,
            menu_id,
            price,
            quantity,
            order_id,
            size,
        });
        self.summary.order_items += 1;
        Ok(price)
    }

    fn sample_menu_id(&mut self) -> SimResult<MenuId> {
        let position = self.source.uniform_inclusive(1, self.menu.len() as i64)?;
        self.menu
            .id_at(position as usize - 1)
            .ok_or_else(|| SimError::Distribution(format!("menu position {} out of range", position)))
    }

    fn push_modification(
        &mut self,
        kind: ModificationKind,
        menu_id: MenuId,
        item_id: OrderItemId,
        cost: Money,
    ) {
        self.last_modification_id += 1;
        self.dataset.modifications.push(Modification {
            id: self.last_modification_id,
            kind,
            inventory_id: menu_id,
            order_item_id: item_id,
            quantity: 1,
            cost,
        });
        self.summary.modifications += 1;
    }
}
