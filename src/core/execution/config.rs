//! Configuration for a sales data run
//!
//! Every knob of the generator lives here. The defaults reproduce the
//! store's published dataset: 65 weeks starting 2024-06-30, 33 menu items,
//! three employees and a quarterly price increase.

use crate::core::errors::{SimError, SimResult};
use crate::core::menu::Menu;
use crate::core::types::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mean volumes used to sample one simulated day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayParameters {
    /// Mean number of orders placed during the day
    pub mean_orders: f64,
    /// Mean number of line items per order
    pub mean_items: f64,
    /// Mean extra spend. Carried for completeness, no draw uses it.
    pub extra: f64,
}

impl DayParameters {
    pub const PEAK: DayParameters = DayParameters {
        mean_orders: 325.0,
        mean_items: 2.0,
        extra: 0.3,
    };

    pub const NORMAL: DayParameters = DayParameters {
        mean_orders: 250.0,
        mean_items: 1.5,
        extra: 0.3,
    };
}

/// Standard deviations shared by peak and normal days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StdDevs {
    pub orders: f64,
    pub items: f64,
    pub extra: f64,
}

impl Default for StdDevs {
    fn default() -> Self {
        Self {
            orders: 50.0,
            items: 0.25,
            extra: 0.25,
        }
    }
}

/// How the cashier on an order is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRotation {
    /// Cycle through employees order by order
    PerOrder,
    /// One employee works every order of a given day
    PerDay,
}

impl Default for EmployeeRotation {
    fn default() -> Self {
        EmployeeRotation::PerOrder
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub start_date: NaiveDate,
    pub total_days: u32,
    pub peak_days: Vec<NaiveDate>,
    pub peak_day: DayParameters,
    pub normal_day: DayParameters,
    pub std_devs: StdDevs,
    /// Prices rise on every day index divisible by this, day 0 included
    pub price_increase_interval: u32,
    pub price_increase: f64,
    pub employee_count: u32,
    pub employee_rotation: EmployeeRotation,
    pub location: String,
    /// Opening hours, both ends inclusive
    pub first_hour: u32,
    pub last_hour: u32,
    pub ice_cost: Money,
    pub boba_cost: Money,
    /// Each modification is added with probability 1 in `modification_odds`
    pub modification_odds: u32,
    pub quantity_mean: f64,
    pub quantity_std_dev: f64,
    /// Price delta per size step away from regular
    pub size_step: f64,
    pub max_item_count_redraws: u32,
    /// `None` seeds from OS entropy
    pub random_seed: Option<u64>,
    pub menu: Menu,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self {
            start_date: date(2024, 6, 30),
            total_days: 65 * 7,
            peak_days: vec![
                date(2024, 8, 12),
                date(2025, 6, 5),
                date(2025, 4, 30),
                date(2024, 12, 4),
                date(2025, 7, 6),
            ],
            peak_day: DayParameters::PEAK,
            normal_day: DayParameters::NORMAL,
            std_devs: StdDevs::default(),
            price_increase_interval: 91,
            price_increase: 0.25,
            employee_count: 3,
            employee_rotation: EmployeeRotation::default(),
            location: "College Station".to_string(),
            first_hour: 7,
            last_hour: 21,
            ice_cost: Money::from_cents(25),
            boba_cost: Money::from_cents(100),
            modification_odds: 4,
            quantity_mean: 1.0,
            quantity_std_dev: 0.07,
            size_step: 0.5,
            max_item_count_redraws: 1000,
            random_seed: None,
            menu: Menu::default(),
        }
    }

    /// Set the first simulated day
    ///
    /// # Arguments
    /// * `start_date` - Calendar date of day index 0
    ///
    /// # Returns
    /// A new configuration starting on `start_date`
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Set how many consecutive days are simulated
    pub fn with_total_days(mut self, total_days: u32) -> Self {
        self.total_days = total_days;
        self
    }

    /// Replace the list of peak dates
    ///
    /// # Arguments
    /// * `peak_days` - Dates sampled with the peak-day volumes
    ///
    /// # Returns
    /// A new configuration with the given peak dates
    pub fn with_peak_days(mut self, peak_days: Vec<NaiveDate>) -> Self {
        self.peak_days = peak_days;
        self
    }

    /// Set the menu price increase schedule
    ///
    /// # Arguments
    /// * `interval` - Prices rise on every day index divisible by this
    /// * `increment` - Amount added to every menu price at each increase
    ///
    /// # Returns
    /// A new configuration with the given schedule
    ///
    /// # Note
    /// Day 0 is always an increase day, so an `increment` of `0.0` keeps the
    /// menu at its base prices for the whole run
    pub fn with_price_increase(mut self, interval: u32, increment: f64) -> Self {
        self.price_increase_interval = interval;
        self.price_increase = increment;
        self
    }

    /// Set the staff size and how orders are assigned to them
    ///
    /// # Arguments
    /// * `count` - Number of employees, numbered from 1
    /// * `rotation` - Whether the cashier changes per order or per day
    ///
    /// # Returns
    /// A new configuration with the given staffing
    pub fn with_employees(mut self, count: u32, rotation: EmployeeRotation) -> Self {
        self.employee_count = count;
        self.employee_rotation = rotation;
        self
    }

    /// Replace the base menu price table
    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menu = menu;
        self
    }

    /// Seed the random source so runs are reproducible
    ///
    /// # Arguments
    /// * `seed` - Seed passed to `StdRng::seed_from_u64`
    ///
    /// # Returns
    /// A new configuration with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Cap the number of item count draws made for one order
    pub fn with_max_item_count_redraws(mut self, redraws: u32) -> Self {
        self.max_item_count_redraws = redraws;
        self
    }

    pub fn is_peak_day(&self, day: NaiveDate) -> bool {
        self.peak_days.contains(&day)
    }

    /// Volumes for `day`: peak parameters on a peak date, normal otherwise
    pub fn day_parameters(&self, day: NaiveDate) -> DayParameters {
        if self.is_peak_day(day) {
            self.peak_day
        } else {
            self.normal_day
        }
    }

    /// Check the configuration before any sampling happens
    pub fn validate(&self) -> SimResult<()> {
        if self.menu.is_empty() {
            return Err(invalid("menu has no items"));
        }
        if self.employee_count == 0 {
            return Err(invalid("employee_count must be at least 1"));
        }
        if self.price_increase_interval == 0 {
            return Err(invalid("price_increase_interval must be at least 1"));
        }
        if self.first_hour > self.last_hour || self.last_hour > 23 {
            return Err(invalid("opening hours must satisfy first_hour <= last_hour <= 23"));
        }
        if self.modification_odds == 0 {
            return Err(invalid("modification_odds must be at least 1"));
        }
        if self.max_item_count_redraws == 0 {
            return Err(invalid("max_item_count_redraws must be at least 1"));
        }
        let std_devs = [
            self.std_devs.orders,
            self.std_devs.items,
            self.std_devs.extra,
            self.quantity_std_dev,
        ];
        if std_devs.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(invalid("standard deviations must be finite and non-negative"));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Build one of the built-in calendar constants
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("built-in calendar date is valid")
}

fn invalid(message: &str) -> SimError {
    SimError::InvalidConfig(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.total_days, 455);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(config.peak_days.len(), 5);
        assert_eq!(config.employee_rotation, EmployeeRotation::PerOrder);
        assert_eq!(config.menu.len(), 33);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_day_parameters() {
        let config = SimulationConfig::default();
        let peak = NaiveDate::from_ymd_opt(2024, 12, 4).unwrap();
        let normal = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
        assert!(config.is_peak_day(peak));
        assert_eq!(config.day_parameters(peak), DayParameters::PEAK);
        assert_eq!(config.day_parameters(normal), DayParameters::NORMAL);
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_total_days(7)
            .with_seed(42)
            .with_employees(5, EmployeeRotation::PerDay)
            .with_price_increase(7, 0.5);
        assert_eq!(config.total_days, 7);
        assert_eq!(config.random_seed, Some(42));
        assert_eq!(config.employee_count, 5);
        assert_eq!(config.employee_rotation, EmployeeRotation::PerDay);
        assert_eq!(config.price_increase_interval, 7);
        assert_eq!(config.price_increase, 0.5);
    }

    #[test]
    fn test_validation_failures() {
        let empty_menu = SimulationConfig::new().with_menu(Menu::new([]));
        assert!(matches!(empty_menu.validate(), Err(SimError::InvalidConfig(_))));

        let no_staff = SimulationConfig::new().with_employees(0, EmployeeRotation::PerOrder);
        assert!(no_staff.validate().is_err());

        let no_interval = SimulationConfig::new().with_price_increase(0, 0.25);
        assert!(no_interval.validate().is_err());

        let mut bad_hours = SimulationConfig::new();
        bad_hours.first_hour = 22;
        assert!(bad_hours.validate().is_err());

        let mut bad_std = SimulationConfig::new();
        bad_std.std_devs.orders = f64::NAN;
        assert!(bad_std.validate().is_err());
    }

    #[test]
    fn test_default_peak_days() {
        let config = SimulationConfig::default();
        let expected: Vec<NaiveDate> = [(2024, 8, 12), (2025, 6, 5), (2025, 4, 30), (2024, 12, 4), (2025, 7, 6)]
            .iter()
            .map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
            .collect();
        assert_eq!(config.peak_days, expected);
        assert!(config.peak_days.iter().all(|day| *day > config.start_date));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SimulationConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let restored: SimulationConfig = serde_json::from_str(&json).unwrap();

        assert!(restored.validate().is_ok());
        assert_eq!(restored, config);
        assert_eq!(restored.menu.price(21).unwrap(), 6.95);
        assert_eq!(restored.boba_cost, Money::from_cents(100));
        assert_eq!(restored.peak_days[3], NaiveDate::from_ymd_opt(2024, 12, 4).unwrap());
    }
}
