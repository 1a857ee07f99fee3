//! Checklist - A terminal to-do list client
//!
//! This library provides a terminal interface for a remote to-do list exposed
//! as a REST collection. Tasks are fetched, created, toggled, edited and deleted
//! against the server, and the local list always mirrors the last server response.
//!
//! # Modules
//!
//! * [`backend`] - Remote task collection client
//! * [`config`] - Application configuration management
//! * [`logger`] - In-memory and file logging
//! * [`theme`] - Theme preference and colour palettes
//! * [`ui`] - Terminal user interface components

/// Remote task collection client and data types
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and user-facing messages
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Theme preference persistence and palettes
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;
