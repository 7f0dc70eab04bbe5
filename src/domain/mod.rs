//! Pure domain models: transactions, the savings dream, settings, budget
//! health, and calendar windows. No I/O, no storage. Only data types and
//! the derivations defined on them.

pub mod budget;
pub mod dream;
pub mod settings;
pub mod state;
pub mod transaction;
pub mod window;

pub use budget::*;
pub use dream::*;
pub use settings::*;
pub use state::*;
pub use transaction::*;
pub use window::*;
