//! Common building blocks for all catalog entities

pub mod numeric_id;
