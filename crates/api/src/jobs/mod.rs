//! Background job scheduler and job implementations.

mod scheduler;
mod session_sweep;

pub use scheduler::{Job, JobScheduler};
pub use session_sweep::SessionSweepJob;
