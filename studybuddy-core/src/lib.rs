pub mod errors;
pub mod export;
pub mod history;
pub mod insights;
pub mod models;
pub mod scheduler;
pub mod solver;
pub mod store;

pub use errors::*;
pub use insights::Insights;
pub use models::*;
pub use scheduler::*;
pub use solver::*;
pub use store::*;
