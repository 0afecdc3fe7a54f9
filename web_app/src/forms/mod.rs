//! # Template Forms
//!
//! - [`template`] - Editable form state, component upsert and payload building
//! - [`validation`] - Checks run before a form is submitted

pub mod template;
pub mod validation;
