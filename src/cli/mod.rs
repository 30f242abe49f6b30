//! # CLI Module
//!
//! Command-line front end of the generator, shipped as the `dto2mvc-gen`
//! binary. A binary cannot see the caller's Rust types, so the CLI reads its
//! annotated types from a descriptor manifest (see [`crate::source::Manifest`]).
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Write one partial controller file and one view stub per endpoint:
//!
//! ```bash
//! dto2mvc-gen generate --manifest models.yaml --output out
//! ```
//!
//! Options:
//! - `--manifest <FILE>` - Descriptor manifest, YAML or JSON (required)
//! - `--output <DIR>` - Output root (required)
//! - `--config <FILE>` - Generator config; defaults to `dto2mvc.toml` beside the manifest
//! - `--pivot <NAME>` - Module or type to start from; repeatable, defaults to every module
//! - `--base-controller <TYPE>` / `--namespace <NS>` - Override the config file
//! - `--dry-run` - Print the planned paths without writing
//!
//! ### `inspect`
//!
//! Print the annotated types and endpoints in the order `generate` visits them:
//!
//! ```bash
//! dto2mvc-gen inspect --manifest models.yaml --pivot Web.Models
//! ```
//!
//! ## Logging
//!
//! `--log <FILTER>` (env `DTO2MVC_LOG`) and `--log-format <pretty|json>`
//! (env `DTO2MVC_LOG_FORMAT`) apply to every command. Logs go to stderr.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use dto2mvc::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(&cli)?;
//! ```

mod commands;


pub use commands::{run, run_cli, Cli, Commands};
