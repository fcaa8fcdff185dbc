//! Common types and traits shared by the order aggregates

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
