use serde::{Deserialize, Serialize};

/// A drink the kiosk can sell. Prices are in minor currency units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Beverage {
    Americano,
    Latte,
}

impl Beverage {
    pub fn name(&self) -> &'static str {
        match self {
            Beverage::Americano => "Americano",
            Beverage::Latte => "Latte",
        }
    }

    pub fn price(&self) -> i64 {
        match self {
            Beverage::Americano => 4000,
            Beverage::Latte => 4500,
        }
    }
}

impl std::fmt::Display for Beverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
