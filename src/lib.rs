//! local-chamber - A chamber-style secrets store on the local filesystem.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── secrets       # write, read, delete, list, find
//! │   ├── transfer      # env, export, import
//! │   ├── exec          # Run with injected secrets
//! │   ├── archive       # backup and restore
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # local-chamber.toml
//!     ├── store/        # Secret storage
//!     │   ├── mod       # Store trait
//!     │   ├── fs        # Directory-per-service store
//!     │   └── memory    # In-memory store
//!     ├── archive/      # tar.gz backup and restore
//!     ├── format        # Export and import formats
//!     ├── find          # Cross-service search
//!     └── validation    # Service and key names
//! ```
//!
//! # Features
//!
//! - One directory per service, one file per secret
//! - Whole-store backups to a single tar.gz archive
//! - Restores that replace or patch the store, with hostile archives rejected
//! - Export to JSON, YAML, CSV, TSV, dotenv and tfvars

pub mod cli;
pub mod core;
pub mod error;
