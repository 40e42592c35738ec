pub mod core;
pub mod refresher;

pub use core::{Command, EventSender};
pub use refresher::DashboardWorker;
