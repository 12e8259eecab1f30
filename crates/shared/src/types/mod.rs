//! Common types used across the application.

pub mod account_code;

pub use account_code::{AccountCode, ClassId, GroupId};
