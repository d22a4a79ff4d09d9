pub mod domain;
pub mod ports;
pub mod product_use_cases;
pub mod use_cases;
