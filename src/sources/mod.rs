//! Background producers feeding the UI event loop

mod fact_rotator;

pub use fact_rotator::FactRotator;
