//! Power-up shop. Points spent here lower `total_points`.

pub mod data;
pub mod logic;
pub mod types;

pub use data::default_power_ups;
pub use logic::{buy, find_power_up, purchase, Receipt};
pub use types::{Inventory, PowerUp};
