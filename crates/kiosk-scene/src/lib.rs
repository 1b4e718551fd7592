//! kiosk-scene: controls, scenes and the launcher application built on them.
//!
//! The launcher is a small state machine: [`SceneHost`] owns exactly one
//! [`CurrentScene`] and replaces it when a control dispatches an [`Action`]
//! that asks for a different screen.

pub mod action;
mod app;
pub mod catalog;
pub mod elements;
pub mod host;
pub mod scene;
pub mod scenes;
pub mod services;
pub mod theme;

pub use action::Action;
pub use app::{KioskApp, run};
pub use catalog::{Catalog, Content, InfoPage, Institution, SplashContent};
pub use host::{CurrentScene, SceneHost, SceneKind};
pub use scene::{InputEvent, PointerButton, Scene, SceneCtx, Signal, Transition};
pub use services::{ClickFeedback, LinkOpener, Services, SilentFeedback, SystemOpener};
pub use theme::{ButtonStyle, Theme};
pub use kiosk_window::FrameLoopFailed;
