pub mod beverage;
pub mod kiosk;
pub mod order;
pub mod product;
pub mod timestamps;
