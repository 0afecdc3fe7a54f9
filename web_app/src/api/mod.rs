//! # API Module
//!
//! Business logic behind the HTTP endpoints, one submodule per domain.
//!
//! ## Modules
//!
//! - [`template`] - WhatsApp message template management

pub mod template;
