//! Core types for Shopdesk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod access_code;
pub mod email;
pub mod id;
pub mod phone;
pub mod status;

pub use access_code::{AccessCode, AccessCodeError};
pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{Phone, PhoneError};
pub use status::{OrderStatus, estimated_delivery};
