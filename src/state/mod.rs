mod loader;
mod session;

pub use loader::{load_food_records, load_reference_rows};
pub use session::PlanSession;
