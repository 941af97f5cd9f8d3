//! Viper Core - role-separated component wiring
//!
//! This crate provides the domain and application layers for a profile
//! welcome flow, split into View / Presenter / Interactor / Router roles
//! that only talk through capability contracts.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            viper-cli (CLI)              │
//! │    (Loads config, drives the view)      │
//! └──────────────────┬──────────────────────┘
//!                    │ assembles
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │             ProfileModule               │
//! │  View ─▶ Presenter ─▶ Interactor        │
//! │              │            (Entity)      │
//! │              └──▶ Router                │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Driven Ports (Traits)            │
//! │     (NavigationSink, DisplaySink)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      viper-adapters (Infrastructure)    │
//! │  (ConsoleDisplay, MemoryNavigator, etc) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use viper_core::prelude::*;
//!
//! let module = ProfileModule::assemble(
//!     Entity::new("Taylor Swift"),
//!     |name: &str| println!("I am the Router outreach and the name I got is {name}"),
//!     |message: &str| println!("{message}"),
//! )
//! .unwrap();
//!
//! module.view().trigger_arrival();
//! module.view().trigger_continue();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CallbackRouter, ProfileInteractor, ProfileModule, ProfilePresenter, ProfileView, Step,
        ports::{DisplaySink, Interactor, NavigationSink, Output, Presenter, Router, View},
    };
    pub use crate::domain::{DEFAULT_ENTITY_NAME, Entity, format_greeting};
    pub use crate::error::{ViperError, ViperResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
