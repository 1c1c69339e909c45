// SPDX-License-Identifier: MPL-2.0
//! `drive_lens` is a remote drive video browser built with the Iced GUI framework.
//!
//! It browses a remotely hosted, hierarchical collection of folders and
//! video files and plays a selected video in an overlay viewer, and
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/drive_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod i18n;
pub mod listing;
pub mod navigation;
pub mod remote;
pub mod ui;
