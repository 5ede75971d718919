//! Editing session
//!
//! A [`DocumentSession`] owns the model being edited and the preview built
//! from it. Every change goes through [`DocumentSession::apply`]; the preview
//! is regenerated lazily on the next [`DocumentSession::preview`] call, after
//! the balance has been re-derived, so a preview never shows a stale balance.

use tracing::debug;

use crate::compose::compose_html;
use crate::error::{CoreError, Result};
use crate::model::{
    DocumentModel, InstrumentKind, Party, PriorDocumentReference, PropertyParcel, Role, TimeFrame,
    TypistInfo,
};

/// A single field-level change to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    SetKind(InstrumentKind),
    SetDate(String),
    SetName(Option<String>),
    SetAgreementAmount(String),
    SetAdvanceAmount(String),
    SetTimeFrame(TimeFrame),
    SetPriorDocument(PriorDocumentReference),
    /// Append a blank row to a role list
    AddParty(Role),
    /// Replace a row with typed values
    UpdateParty {
        role: Role,
        index: usize,
        party: Party,
    },
    /// Fill a row from a stored record
    SelectParty {
        role: Role,
        index: usize,
        record: Party,
    },
    RemoveParty {
        role: Role,
        index: usize,
    },
    AddProperty,
    UpdateProperty {
        index: usize,
        parcel: PropertyParcel,
    },
    RemoveProperty(usize),
    SetTypist(TypistInfo),
    /// Fill the typist from a stored record, falling back to `default_office`
    SelectTypist {
        record: TypistInfo,
        default_office: String,
    },
}

/// Model plus cached preview
#[derive(Debug, Default)]
pub struct DocumentSession {
    model: DocumentModel,
    preview: Option<String>,
}

impl DocumentSession {
    /// Start from a blank model of the given kind
    pub fn new(kind: InstrumentKind) -> Self {
        Self::from_model(DocumentModel::blank(kind))
    }

    pub fn from_model(model: DocumentModel) -> Self {
        Self {
            model,
            preview: None,
        }
    }

    pub fn model(&self) -> &DocumentModel {
        &self.model
    }

    pub fn into_model(self) -> DocumentModel {
        self.model
    }

    /// True when the next preview call will recompose
    pub fn is_dirty(&self) -> bool {
        self.preview.is_none()
    }

    /// Apply one edit. A rejected edit leaves the model untouched.
    pub fn apply(&mut self, edit: Edit) -> Result<()> {
        match edit {
            Edit::SetKind(kind) => self.model.kind = kind,
            Edit::SetDate(date) => self.model.date = date,
            Edit::SetName(name) => self.model.name = name,
            Edit::SetAgreementAmount(value) => self.model.terms.set_agreement_amount(value),
            Edit::SetAdvanceAmount(value) => self.model.terms.set_advance_amount(value),
            Edit::SetTimeFrame(time_frame) => self.model.time_frame = time_frame,
            Edit::SetPriorDocument(prior) => self.model.prior_document = prior,
            Edit::AddParty(role) => self.model.parties_mut(role).push(Party::default()),
            Edit::UpdateParty { role, index, party } => {
                let row = party_row(&mut self.model, role, index)?;
                *row = party;
            }
            Edit::SelectParty {
                role,
                index,
                record,
            } => self.select_party(role, index, record)?,
            Edit::RemoveParty { role, index } => {
                let rows = self.model.parties_mut(role);
                check_index(index, rows.len(), "party")?;
                rows.remove(index);
                if rows.is_empty() {
                    rows.push(Party::default());
                }
            }
            Edit::AddProperty => self.model.properties.push(PropertyParcel::default()),
            Edit::UpdateProperty { index, parcel } => {
                check_index(index, self.model.properties.len(), "property")?;
                self.model.properties[index] = parcel;
            }
            Edit::RemoveProperty(index) => {
                check_index(index, self.model.properties.len(), "property")?;
                self.model.properties.remove(index);
                if self.model.properties.is_empty() {
                    self.model.properties.push(PropertyParcel::default());
                }
            }
            Edit::SetTypist(typist) => self.model.typist = typist,
            Edit::SelectTypist {
                record,
                default_office,
            } => {
                self.model.typist = self
                    .model
                    .typist
                    .merge_selection(&record, &default_office);
            }
        }
        self.preview = None;
        Ok(())
    }

    /// A stored person may appear at most once in a role list
    fn select_party(&mut self, role: Role, index: usize, record: Party) -> Result<()> {
        let rows = self.model.parties(role);
        check_index(index, rows.len(), "party")?;
        let duplicate = rows
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.same_person(&record));
        if duplicate {
            return Err(CoreError::InvalidEdit(format!(
                "{} is already added as {:?}",
                record.name, role
            )));
        }
        let row = party_row(&mut self.model, role, index)?;
        *row = row.merge_selection(&record);
        Ok(())
    }

    /// Preview HTML, recomposed only when the model changed
    pub fn preview(&mut self) -> &str {
        if self.preview.is_none() {
            self.model.terms.recompute();
            debug!(kind = %self.model.kind, "regenerating preview");
            self.preview = Some(compose_html(&self.model));
        }
        self.preview.as_deref().unwrap_or_default()
    }
}

fn check_index(index: usize, len: usize, what: &str) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(CoreError::InvalidEdit(format!(
            "{} row {} out of range (have {})",
            what, index, len
        )))
    }
}

fn party_row(model: &mut DocumentModel, role: Role, index: usize) -> Result<&mut Party> {
    let rows = model.parties_mut(role);
    let len = rows.len();
    rows.get_mut(index).ok_or_else(|| {
        CoreError::InvalidEdit(format!("party row {} out of range (have {})", index, len))
    })
}
