//! # Cardbox Architecture
//!
//! Cardbox is a **UI-agnostic flashcard library**. The CLI in `main.rs` is
//! just one client of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CardStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two pieces sit beside the stack rather than inside it:
//!
//! - [`review`]: the review session state machine. It owns the delayed
//!   answer reveal (a cancelable timer per presented card) and works on
//!   plain `Vec<Flashcard>`; persistence of reviewed cards goes back
//!   through the command layer.
//! - [`lookup`]: the external dictionary/encyclopedia collaborator behind
//!   the `TermLookup` trait, so commands can be tested with a stub.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Flashcard`, `Priority`)
//! - [`review`]: Review scheduling and the delayed reveal
//! - [`lookup`]: Dictionary/encyclopedia lookups
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod review;
pub mod store;
