//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, error, info};

use pathiram_core::html::generate_standalone;
use pathiram_core::{
    coalesce, compose, DocumentModel, DocumentSession, DocumentStore, Edit, FileStore,
    InstrumentKind, SaveOutcome, SaveRequest,
};
use pathiram_ooxml::{DocxSummary, DocxWriter};

use crate::config::{ExportFormat, Settings, DEFAULT_NAME};

/// Instrument kinds accepted on the command line
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum KindArg {
    #[default]
    SaleAgreement,
    SaleDeed,
    SettlementDeed,
}

impl From<KindArg> for InstrumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::SaleAgreement => InstrumentKind::SaleAgreement,
            KindArg::SaleDeed => InstrumentKind::SaleDeed,
            KindArg::SettlementDeed => InstrumentKind::SettlementDeed,
        }
    }
}

/// Output of the compose command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ComposeFormat {
    /// Preview HTML
    #[default]
    Html,
    /// The tagged-section document as JSON
    Json,
}

/// Export target selection; `all` writes both files
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportTarget {
    Pdf,
    Docx,
    All,
}

impl ExportTarget {
    pub fn formats(self) -> Vec<ExportFormat> {
        match self {
            ExportTarget::Pdf => vec![ExportFormat::Pdf],
            ExportTarget::Docx => vec![ExportFormat::Docx],
            ExportTarget::All => vec![ExportFormat::Pdf, ExportFormat::Docx],
        }
    }
}

/// Field edits applied to a loaded model before composing
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Document date (YYYY-MM-DD or DD-MM-YYYY)
    #[arg(long)]
    pub date: Option<String>,

    /// Total agreement amount in rupees
    #[arg(long)]
    pub agreement: Option<String>,

    /// Advance amount in rupees
    #[arg(long)]
    pub advance: Option<String>,
}

impl Overrides {
    fn edits(&self) -> Vec<Edit> {
        let mut edits = Vec::new();
        if let Some(date) = &self.date {
            edits.push(Edit::SetDate(date.clone()));
        }
        if let Some(amount) = &self.agreement {
            edits.push(Edit::SetAgreementAmount(amount.clone()));
        }
        if let Some(amount) = &self.advance {
            edits.push(Edit::SetAdvanceAmount(amount.clone()));
        }
        edits
    }
}

#[derive(Parser)]
#[command(name = "pathiram")]
#[command(author, version, about = "Tamil legal document composer", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./pathiram.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a blank model with one placeholder row per list
    New {
        /// Instrument kind
        #[arg(short, long, value_enum, default_value = "sale-agreement")]
        kind: KindArg,

        /// Output file (.json or .toml, defaults to stdout as JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compose a model into preview HTML or section JSON
    Compose {
        /// Model file (.json or .toml)
        model: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: ComposeFormat,

        /// Wrap HTML in a complete page
        #[arg(long)]
        standalone: bool,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Export a model to PDF and/or DOCX
    Export {
        /// Model file (.json or .toml)
        model: PathBuf,

        /// Formats to write (defaults to the configured list)
        #[arg(short, long, value_enum)]
        format: Option<ExportTarget>,

        /// Document name used for the file names (defaults to the model's name)
        #[arg(short, long)]
        name: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Save the composed document and model to the document store
    Save {
        /// Model file (.json or .toml)
        model: PathBuf,

        /// Document name (defaults to the model's name)
        #[arg(short, long)]
        name: Option<String>,

        /// Store directory
        #[arg(short, long)]
        store: Option<PathBuf>,
    },

    /// Show the outline of an exported DOCX
    Inspect {
        /// DOCX file
        input: PathBuf,
    },
}

/// Run the CLI application
///
/// Parses arguments, initialises logging and dispatches to the command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "configuration loaded");

    match cli.command {
        Commands::New { kind, output } => {
            new_command(kind.into(), output.as_deref())?;
        }
        Commands::Compose {
            model,
            output,
            format,
            standalone,
            overrides,
        } => {
            compose_command(&model, &overrides, format, standalone, output.as_deref())?;
        }
        Commands::Export {
            model,
            format,
            name,
            output,
            overrides,
        } => {
            let formats = match format {
                Some(target) => target.formats(),
                None => settings.export.formats.clone(),
            };
            let output_dir = output.unwrap_or_else(|| settings.export.output_dir.clone());
            export_command(
                &model,
                &overrides,
                &formats,
                name.as_deref(),
                &settings.export.default_name,
                &output_dir,
                &settings.pdf.font_paths,
            )?;
        }
        Commands::Save { model, name, store } => {
            let store = store.unwrap_or_else(|| settings.store.directory.clone());
            let outcome = save_command(&model, name.as_deref(), &store)?;
            println!("{}", serde_json::to_string(&outcome)?);
            if !outcome.success {
                std::process::exit(1);
            }
        }
        Commands::Inspect { input } => {
            let summary = inspect_command(&input)?;
            print_summary(&input, &summary);
        }
    }

    Ok(())
}

/// Install the fmt subscriber; `RUST_LOG` still applies on top
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load a model into an editing session and apply the overrides
pub fn load_session(model_path: &Path, overrides: &Overrides) -> Result<DocumentSession> {
    if !model_path.exists() {
        anyhow::bail!("Model file not found: {}", model_path.display());
    }
    let model = DocumentModel::load(model_path)
        .with_context(|| format!("Failed to load model: {}", model_path.display()))?;

    let mut session = DocumentSession::from_model(model);
    for edit in overrides.edits() {
        session
            .apply(edit)
            .context("Failed to apply command-line override")?;
    }
    Ok(session)
}

/// Execute the new command
pub fn new_command(kind: InstrumentKind, output: Option<&Path>) -> Result<()> {
    let model = DocumentModel::blank(kind);
    let text = match output.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        Some("toml") => toml::to_string_pretty(&model).context("Failed to serialise model")?,
        _ => model.to_json_pretty().context("Failed to serialise model")?,
    };

    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write model: {}", path.display()))?;
            info!(kind = %kind, path = %path.display(), "blank model written");
            println!("Created: {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Execute the compose command
pub fn compose_command(
    model_path: &Path,
    overrides: &Overrides,
    format: ComposeFormat,
    standalone: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mut session = load_session(model_path, overrides)?;

    let text = match format {
        ComposeFormat::Html if standalone => generate_standalone(&compose(session.model())),
        ComposeFormat::Html => session.preview().to_string(),
        ComposeFormat::Json => serde_json::to_string_pretty(&compose(session.model()))
            .context("Failed to serialise composed document")?,
    };

    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("Created: {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Execute the export command
///
/// Each format is rendered fully in memory before anything touches the disk.
/// A failing format is reported once and leaves no file behind; the other
/// formats are still written.
pub fn export_command(
    model_path: &Path,
    overrides: &Overrides,
    formats: &[ExportFormat],
    name: Option<&str>,
    default_name: &str,
    output_dir: &Path,
    font_paths: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let session = load_session(model_path, overrides)?;
    let doc = compose(session.model());
    let stem = file_stem(&document_name(name, session.model(), default_name));

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let mut written = Vec::new();
    let mut failed = Vec::new();
    for &format in formats {
        let path = output_dir.join(format!("{}.{}", stem, format.extension()));
        let rendered = match format {
            ExportFormat::Pdf => pathiram_pdf::render_pdf_with_fonts(&doc, font_paths)
                .context("Failed to render PDF"),
            ExportFormat::Docx => DocxWriter::generate(&doc).context("Failed to render DOCX"),
        };

        match rendered.and_then(|bytes| write_whole(&path, &bytes)) {
            Ok(()) => {
                info!(path = %path.display(), "exported");
                println!("Created: {}", path.display());
                written.push(path);
            }
            Err(e) => {
                error!(format = format.extension(), "export failed: {:#}", e);
                failed.push(format.extension());
            }
        }
    }

    if !failed.is_empty() {
        anyhow::bail!("Export failed for: {}", failed.join(", "));
    }
    Ok(written)
}

/// Execute the save command
pub fn save_command(
    model_path: &Path,
    name: Option<&str>,
    store_dir: &Path,
) -> Result<SaveOutcome> {
    let mut session = load_session(model_path, &Overrides::default())?;
    let name = document_name(name, session.model(), "");
    let html = session.preview().to_string();
    let store = FileStore::new(store_dir);
    Ok(store.save(&SaveRequest {
        name,
        html,
        model: session.into_model(),
    }))
}

/// Execute the inspect command
pub fn inspect_command(input: &Path) -> Result<DocxSummary> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read DOCX: {}", input.display()))?;
    DocxSummary::from_bytes(&bytes)
        .with_context(|| format!("Failed to read DOCX structure: {}", input.display()))
}

fn print_summary(input: &Path, summary: &DocxSummary) {
    println!("pathiram v{}", pathiram_core::VERSION);
    println!("Inspecting: {}", input.display());
    println!(
        "  Title: {}",
        summary.title.as_deref().unwrap_or("(none)")
    );
    println!(
        "  Header: {}",
        summary.header.as_deref().unwrap_or("(none)")
    );
    println!("  Footer fields: {}", summary.footer_fields.join(" / "));
    println!(
        "  {} paragraphs, {} tables",
        summary.paragraph_count, summary.table_count
    );
    for text in &summary.page_breaks {
        println!("  --- page break --- {}", text);
    }
    println!("  Parts:");
    for part in &summary.parts {
        println!("    {}", part);
    }
}

/// `--name`, then the name stored in the model, then `fallback`
fn document_name(explicit: Option<&str>, model: &DocumentModel, fallback: &str) -> String {
    coalesce(
        explicit.unwrap_or_default(),
        model.name.as_deref().unwrap_or_default(),
        fallback,
    )
}

/// File name for a document name; blank names fall back to the default
fn file_stem(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_NAME.to_string();
    }
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c => c,
        })
        .collect()
}

/// Write through a temporary file so a failed write leaves nothing behind
fn write_whole(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".part");
    let tmp = PathBuf::from(tmp);

    let result = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.with_context(|| format!("Failed to write output file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(""), "pathiram-document");
        assert_eq!(file_stem("  "), "pathiram-document");
        assert_eq!(file_stem("கிரையம்"), "கிரையம்");
        assert_eq!(file_stem("a/b:c"), "a-b-c");
    }

    #[test]
    fn test_document_name_prefers_flag_then_model() {
        let mut model = DocumentModel::blank(InstrumentKind::SaleDeed);
        assert_eq!(document_name(None, &model, "fallback"), "fallback");
        model.name = Some("கிரையம்".to_string());
        assert_eq!(document_name(None, &model, "fallback"), "கிரையம்");
        assert_eq!(document_name(Some(" "), &model, "fallback"), "கிரையம்");
        assert_eq!(document_name(Some("புதியது"), &model, "fallback"), "புதியது");
    }

    #[test]
    fn test_export_target_all() {
        assert_eq!(
            ExportTarget::All.formats(),
            vec![ExportFormat::Pdf, ExportFormat::Docx]
        );
    }

    #[test]
    fn test_overrides_become_edits() {
        let overrides = Overrides {
            date: None,
            agreement: Some("100000".to_string()),
            advance: Some("20000".to_string()),
        };
        assert_eq!(
            overrides.edits(),
            vec![
                Edit::SetAgreementAmount("100000".to_string()),
                Edit::SetAdvanceAmount("20000".to_string()),
            ]
        );
    }

    #[test]
    fn test_cli_parses_export() {
        let cli = Cli::try_parse_from([
            "pathiram", "export", "model.json", "--format", "all", "--name", "x", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Export {
                format: Some(ExportTarget::All),
                ..
            }
        ));
    }

    #[test]
    fn test_write_whole_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.docx");
        assert!(write_whole(&path, b"x").is_err());
        assert!(!dir.path().join("missing").exists());
    }
}
