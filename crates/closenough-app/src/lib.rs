//! Shared library module for the Close Enough app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod action_handler;
pub mod app;
pub mod platform;
pub mod state;
pub mod ui;

pub use crate::app::CloseEnoughApp;
