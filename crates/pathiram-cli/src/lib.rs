//! pathiram CLI - Command-line interface library
//!
//! This library provides the CLI functionality for pathiram:
//! - New: write a blank model to fill in
//! - Compose: model to preview HTML or section JSON
//! - Export: model to PDF and/or DOCX
//! - Save: store the composed document with its model
//! - Inspect: outline of an exported DOCX
//!
//! # Binary Usage
//!
//! ```bash
//! pathiram new --kind sale-deed -o deed.json
//! pathiram compose deed.json --standalone -o deed.html
//! pathiram export deed.json --format all --name "கிரையப் பத்திரம்" -o out/
//! pathiram inspect "out/கிரையப் பத்திரம்.docx"
//! ```

pub mod app;
pub mod config;

pub use app::{
    compose_command, export_command, init_logging, inspect_command, load_session, new_command,
    save_command,
};
pub use app::{run_cli, ComposeFormat, ExportTarget, KindArg, Overrides};
pub use config::{ExportFormat, Settings, DEFAULT_NAME};
