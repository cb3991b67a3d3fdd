//! Pure computations over expense snapshots, plus the clock seam.

pub mod advice;
pub mod aggregation;
pub mod time;

pub use advice::{advise, get_advice, Tip};
pub use aggregation::{aggregate, CategoryTotal, SpendingSummary};
pub use time::{Clock, FixedClock, SystemClock};
