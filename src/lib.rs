//! The orchctl library.
//!
//! This crate provides the core functionality of the orchctl command-line
//! client for TNCO/CP4NA orchestration environments: REST clients for the
//! orchestration and DCIM APIs, authentication token tracking, target
//! identifier resolution, environment configuration and command execution.
//!
//! # Modules
//!
//! - `auth`: Authentication methods and access token lifecycle tracking
//! - `actions`: Command handlers
//! - `cli`: Dispatch of parsed commands to handlers
//! - `commands`: CLI command tree definitions
//! - `config`: Named environment configuration management
//! - `dcim`: Client for the DCIM (site planning) REST API
//! - `format`: Output rendering (JSON, YAML, CSV)
//! - `identifier`: Resolution of command targets from parameters and files
//! - `tnco`: Client for the orchestration REST APIs
//! - `validation`: Pre-flight checks over parsed command parameters

pub mod actions;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dcim;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod identifier;
pub mod tnco;
pub mod validation;
