//! Timer adapters
//!
//! [`TokioScheduler`] implements the [`Scheduler`](quiz_application::Scheduler)
//! port with `tokio::time::sleep`, delivering firings into an mpsc channel
//! that the controller task drains.

mod tokio_scheduler;

pub use tokio_scheduler::TokioScheduler;
