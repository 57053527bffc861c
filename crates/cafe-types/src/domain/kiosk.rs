//! In-memory kiosk session: a cart of beverages that can be checked out
//! during business hours.
//!
//! A `CafeKiosk` is not synchronized. Callers sharing one across tasks must
//! serialize access themselves.

use chrono::{Local, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::beverage::Beverage;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum KioskError {
    #[error("beverage count must be at least 1, got {0}")]
    InvalidCount(i32),

    #[error("the cafe is closed; business hours are {open} to {close}")]
    Closed { open: NaiveTime, close: NaiveTime },
}

/// Opening window for checkout. Both boundaries are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl BusinessHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.open && time <= self.close
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            close: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default(),
        }
    }
}

/// Snapshot of the cart taken at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KioskOrder {
    ordered_at: NaiveDateTime,
    beverages: Vec<Beverage>,
}

impl KioskOrder {
    pub fn ordered_at(&self) -> NaiveDateTime {
        self.ordered_at
    }

    pub fn beverages(&self) -> &[Beverage] {
        &self.beverages
    }
}

#[derive(Debug, Clone, Default)]
pub struct CafeKiosk {
    beverages: Vec<Beverage>,
    hours: BusinessHours,
}

impl CafeKiosk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hours(hours: BusinessHours) -> Self {
        Self {
            beverages: Vec::new(),
            hours,
        }
    }

    pub fn beverages(&self) -> &[Beverage] {
        &self.beverages
    }

    pub fn hours(&self) -> BusinessHours {
        self.hours
    }

    /// Appends `beverage` to the cart `count` times.
    pub fn add(&mut self, beverage: Beverage, count: i32) -> Result<(), KioskError> {
        if count <= 0 {
            return Err(KioskError::InvalidCount(count));
        }
        self.beverages
            .extend(std::iter::repeat(beverage).take(count as usize));
        Ok(())
    }

    /// Removes the first matching beverage, if any.
    pub fn remove(&mut self, beverage: &Beverage) {
        if let Some(pos) = self.beverages.iter().position(|b| b == beverage) {
            self.beverages.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.beverages.clear();
    }

    pub fn calculate_total_price(&self) -> i64 {
        self.beverages.iter().map(Beverage::price).sum()
    }

    pub fn create_order(&self) -> Result<KioskOrder, KioskError> {
        self.create_order_at(Local::now().naive_local())
    }

    /// Checks out at `now`. The cart keeps its contents afterwards.
    pub fn create_order_at(&self, now: NaiveDateTime) -> Result<KioskOrder, KioskError> {
        if !self.hours.contains(now.time()) {
            return Err(KioskError::Closed {
                open: self.hours.open,
                close: self.hours.close,
            });
        }
        Ok(KioskOrder {
            ordered_at: now,
            beverages: self.beverages.clone(),
        })
    }
}
