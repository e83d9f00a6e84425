//! # site-client
//!
//! Client-side behavior layer for the static, internationalized site: theme
//! preference synchronization, the slide-out navigation menu, language
//! selection and copy-to-clipboard buttons.
//!
//! The state machines in this crate are browser-free and unit-tested
//! natively. The `web` module (behind the `hydrate` feature) binds them to
//! `localStorage`, `matchMedia` and the DOM and exports the WASM entry points.

pub mod clipboard;
pub mod config;
pub mod language;
pub mod menu;
pub mod storage;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod web;
