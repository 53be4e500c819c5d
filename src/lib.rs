//! Fanout - sync secrets and variables to many GitHub repositories.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   └── sync          # The sync run (load, pre-flight, report)
//! └── core/             # Core library components
//!     ├── document      # Restricted indentation-grammar parser
//!     ├── config        # .fanout.yml loading and validation
//!     ├── mapping       # NAME / READ:WRITE entry resolution
//!     ├── engine        # Sync orchestration
//!     ├── report        # Outcome and report types
//!     ├── env           # Environment value source (+ dotenv overrides)
//!     ├── status        # Markdown status block rendering
//!     └── store/        # Value store backends
//!         ├── mod       # SecretStore trait
//!         └── gh        # gh CLI implementation
//! ```
//!
//! # Features
//!
//! - Declarative whitelist of secrets, variables, and target repositories
//! - Per-target overrides and `READ:WRITE` rename mappings
//! - Dry-run previews and deterministic, serializable reports
//! - Dotenv layering over the process environment

pub mod cli;
pub mod core;
pub mod error;
