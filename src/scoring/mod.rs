pub mod aggregator;

pub use aggregator::{aggregate, score_for, total};
