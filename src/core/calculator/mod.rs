pub mod averages;
pub mod counts;
pub mod heatmap;
pub mod pairing;
