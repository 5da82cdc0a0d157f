//! Domain models: persisted rows, raw request forms, and validated builders.

pub mod inventory;
pub mod order;
pub mod registration;

pub use inventory::{InventoryForm, InventoryItem, InventoryUpdate, InventoryUpdateForm, NewInventoryItem};
pub use order::{NewOrder, Order, OrderForm, OrderStatusForm, TrackedOrder};
pub use registration::{AdminRegistration, NewAdmin, NewUser, UserRegistration};
