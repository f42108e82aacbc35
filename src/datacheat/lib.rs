//! # Datacheat Architecture
//!
//! Datacheat is a **UI-agnostic cheatsheet library** for three data languages:
//! SQL, Power Query M and DAX. The terminal client in `cli/` is one consumer
//! of it; nothing below the API layer knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, runs `browse`       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                            │
//!                 ▼                            ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  API Layer (api.rs)           │ │  Shell (shell.rs)         │
//! │  - One-shot operations        │ │  - Interactive UI state   │
//! │  - Returns `CmdResult`        │ │  - Events in, views out   │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                 │                            │
//!                 ▼                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - catalog/: validated, immutable entries + taxonomy        │
//! │  - pipeline.rs: filter-and-group, a pure function           │
//! │  - highlight.rs: snippet tokenizer behind a trait           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Everything Below the CLI Is Pure
//!
//! The catalog is built once and never mutated. The pipeline derives every
//! view from `(catalog, language, search, excluded ids)` and is recomputed on
//! each change instead of being patched. The only side effects outside the
//! CLI are reading and writing `config.json` and the loading gate's pause.
//!
//! ## Testing Strategy
//!
//! - Core modules carry unit tests beside the code.
//! - Command modules are tested against a small in-memory catalog.
//! - `tests/` drives the real binary with `assert_cmd`.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod highlight;
pub mod init;
pub mod loading;
pub mod model;
pub mod pipeline;
pub mod shell;
