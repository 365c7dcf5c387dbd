//! Background/signal comparison for optical reflectance spectra.
//!
//! Two instrument exports (background and signal) are loaded with
//! [`data::loader`], subtracted, optionally smoothed, and a baseline is
//! fitted through two points picked on the difference curve. The
//! reflectance is the largest dip of the curve below that baseline.
//!
//! All steps are pure functions over [`data::model::SpectralDataset`];
//! [`session::Session`] strings them together the way the desktop app
//! drives them.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod session;

pub use config::Config;
pub use error::{Error, Result};
pub use session::Session;
