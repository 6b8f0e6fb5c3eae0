pub mod aggregator;
pub mod engine;
pub mod resolver;
pub mod writer;
