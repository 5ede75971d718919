//! pathiram-core - Tamil legal instrument composer
//!
//! Holds the document model, the amount and grammar helpers, and the
//! composer that turns a model into tagged sections and preview HTML.
//!
//! # Example
//!
//! ```
//! use pathiram_core::{compose_html, DocumentModel, InstrumentKind, Party};
//!
//! let mut model = DocumentModel::blank(InstrumentKind::SaleAgreement);
//! model.buyers = vec![Party::named("முருகன்")];
//! model.terms.set_agreement_amount("100000");
//! model.terms.set_advance_amount("20000");
//!
//! let html = compose_html(&model);
//! assert!(html.contains("ரூ.80000/-"));
//! assert!(html.contains("வாங்குபவர்"));
//! ```

pub mod amount;
pub mod compose;
pub mod date;
pub mod defaults;
pub mod error;
pub mod grammar;
pub mod html;
pub mod model;
pub mod session;
pub mod store;
pub mod words;

pub use amount::{money_clause, parse_amount, PLACEHOLDER};
pub use compose::{compose, compose_html, Composer};
pub use defaults::coalesce;
pub use error::{CoreError, Result};
pub use html::{HtmlConfig, HtmlGenerator};
pub use model::{
    Address, DocumentModel, InstrumentKind, MonetaryTerms, Party, PropertyParcel, RelationType,
    Role, TimeFrame, TimeFrameType, TypistInfo,
};
pub use session::{DocumentSession, Edit};
pub use store::{DocumentStore, FileStore, SaveOutcome, SaveRequest};
pub use words::amount_in_words;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
