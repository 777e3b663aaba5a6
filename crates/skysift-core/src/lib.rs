pub mod error;
pub mod config;
pub mod catalog;
pub mod lightcurve;
pub mod filters;
pub mod evolution;
pub mod plot;
pub mod export;
