// Learning path planning and catalog-wide job ranking.

pub mod actions;
pub mod graph;
pub mod handlers;
pub mod narrative;
pub mod phases;
pub mod ranking;
