//! Fleiss' kappa for inter-rater agreement.
//!
//! The engine ([`compute_fleiss_kappa`]) is a pure function from a
//! subject-by-category [`RatingMatrix`] and an [`AlphaLevel`] to a
//! [`StatsResult`]. Matrix loading lives in [`input`], rendering in
//! [`report`] and [`pipeline::stage5_report`].

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::agreement::{AgreementClass, Decision};
pub use model::alpha::{AlphaLevel, DEFAULT_ALPHA};
pub use model::errors::KappaError;
pub use model::matrix::RatingMatrix;
pub use model::stats::{CategoryStats, OverallStats, StatsResult};
pub use model::warnings::KappaWarning;
pub use pipeline::{compute_fleiss_kappa, fleiss_kappa};
