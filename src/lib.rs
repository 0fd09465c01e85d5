//! Event registration: a multi-step registration form flow.

pub mod client;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod page;
pub mod ticket;

pub use client::{HttpRegistrationClient, RegistrationApi, RegistrationResult};
pub use controller::FormFlowController;
pub use page::{Page, PageEffect, PageModel};
