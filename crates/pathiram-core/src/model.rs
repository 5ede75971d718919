//! Document model for a legal instrument
//!
//! Every field is optional in practice: a form fills the model one field at a
//! time and the composer has to render whatever is there. Text fields use
//! empty strings for "not entered".

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::amount::{self, parse_amount};
use crate::error::{CoreError, Result};

/// The kind of instrument being drafted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstrumentKind {
    /// கிரைய ஒப்பந்தம் - agreement to sell with advance and balance
    #[default]
    SaleAgreement,
    /// கிரையப் பத்திரம் - absolute sale for the full consideration
    SaleDeed,
    /// தான செட்டில்மெண்ட் - gift settlement without consideration
    SettlementDeed,
}

impl InstrumentKind {
    pub const ALL: [InstrumentKind; 3] = [
        InstrumentKind::SaleAgreement,
        InstrumentKind::SaleDeed,
        InstrumentKind::SettlementDeed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentKind::SaleAgreement => "sale-agreement",
            InstrumentKind::SaleDeed => "sale-deed",
            InstrumentKind::SettlementDeed => "settlement-deed",
        }
    }
}

impl FromStr for InstrumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        InstrumentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| CoreError::InvalidEdit(format!("unknown instrument kind: {}", s)))
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which list a party belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
    Witness,
}

/// Relationship of a party to the relative named in the party clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationType {
    Son,
    Daughter,
    Wife,
    Husband,
    Father,
    Mother,
    Brother,
    Sister,
    /// Free text kept verbatim, empty when not entered
    Other(String),
}

/// Title placed before a party's name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Honorific {
    /// திரு.
    Thiru,
    /// திருமதி.
    Thirumathi,
    /// செல்வி.
    Selvi,
}

impl Honorific {
    pub fn as_tamil(self) -> &'static str {
        match self {
            Honorific::Thiru => "திரு.",
            Honorific::Thirumathi => "திருமதி.",
            Honorific::Selvi => "செல்வி.",
        }
    }
}

impl RelationType {
    /// (variant, English key, Tamil word)
    const TABLE: [(RelationType, &'static str, &'static str); 8] = [
        (RelationType::Son, "son", "மகன்"),
        (RelationType::Daughter, "daughter", "மகள்"),
        (RelationType::Wife, "wife", "மனைவி"),
        (RelationType::Husband, "husband", "கணவர்"),
        (RelationType::Father, "father", "தந்தை"),
        (RelationType::Mother, "mother", "தாய்"),
        (RelationType::Brother, "brother", "சகோதரர்"),
        (RelationType::Sister, "sister", "சகோதரி"),
    ];

    /// Tamil word used in the relation clause
    pub fn as_tamil(&self) -> &str {
        match self {
            RelationType::Other(text) => text.as_str(),
            known => Self::TABLE
                .iter()
                .find(|(variant, _, _)| variant == known)
                .map(|(_, _, tamil)| *tamil)
                .unwrap_or_default(),
        }
    }

    /// Honorific implied by the relation: male relations take திரு.,
    /// married women திருமதி., daughters and sisters செல்வி.
    pub fn honorific(&self) -> Option<Honorific> {
        match self {
            RelationType::Son
            | RelationType::Husband
            | RelationType::Father
            | RelationType::Brother => Some(Honorific::Thiru),
            RelationType::Wife | RelationType::Mother => Some(Honorific::Thirumathi),
            RelationType::Daughter | RelationType::Sister => Some(Honorific::Selvi),
            RelationType::Other(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RelationType::Other(text) if text.trim().is_empty())
    }
}

impl Default for RelationType {
    fn default() -> Self {
        RelationType::Other(String::new())
    }
}

impl From<String> for RelationType {
    fn from(value: String) -> Self {
        let key = value.trim();
        Self::TABLE
            .iter()
            .find(|(_, english, tamil)| key.eq_ignore_ascii_case(english) || key == *tamil)
            .map(|(variant, _, _)| variant.clone())
            .unwrap_or_else(|| RelationType::Other(key.to_string()))
    }
}

impl From<&str> for RelationType {
    fn from(value: &str) -> Self {
        RelationType::from(value.to_string())
    }
}

impl From<RelationType> for String {
    fn from(value: RelationType) -> Self {
        value.as_tamil().to_string()
    }
}

/// Postal address of a party
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "lenient_string")]
    pub door_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub line1: String,
    #[serde(deserialize_with = "lenient_string")]
    pub line2: String,
    #[serde(deserialize_with = "lenient_string")]
    pub line3: String,
    #[serde(deserialize_with = "lenient_string")]
    pub taluk: String,
    #[serde(deserialize_with = "lenient_string")]
    pub district: String,
    #[serde(deserialize_with = "lenient_string")]
    pub pincode: String,
}

/// A buyer, seller or witness
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    /// Identity of a stored person record, `None` for ad-hoc entries
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_option"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(deserialize_with = "lenient_relation")]
    pub relation_type: RelationType,
    #[serde(deserialize_with = "lenient_string")]
    pub relation_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(deserialize_with = "lenient_string")]
    pub national_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
}

impl Party {
    /// Party with a name and nothing else
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A placeholder row nobody has filled in
    pub fn is_blank(&self) -> bool {
        *self == Party::default()
    }

    /// Two entries refer to the same person. Stored records compare by id,
    /// ad-hoc entries by name and national id.
    pub fn same_person(&self, other: &Party) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => {
                !self.name.trim().is_empty()
                    && self.name.trim() == other.name.trim()
                    && self.national_id.trim() == other.national_id.trim()
            }
        }
    }
}

/// Cadastral hierarchy a parcel may be linked to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CadastralRef {
    #[serde(deserialize_with = "lenient_string")]
    pub village: String,
    #[serde(deserialize_with = "lenient_string")]
    pub taluk: String,
    #[serde(deserialize_with = "lenient_string")]
    pub district: String,
    #[serde(deserialize_with = "lenient_string")]
    pub state: String,
}

/// One property parcel
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyParcel {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_option"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub survey_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub area: String,
    #[serde(deserialize_with = "lenient_string")]
    pub assessed_value: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadastral: Option<CadastralRef>,
}

impl PropertyParcel {
    /// Only parcels with an id or a survey number are listed
    pub fn is_listable(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.trim().is_empty())
            || !self.survey_number.trim().is_empty()
    }
}

/// Agreement and advance amounts with the derived balance
///
/// The balance and all words forms are recomputed by the setters and on
/// deserialisation; there is no way to set them directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "MonetaryInput")]
pub struct MonetaryTerms {
    agreement_amount: String,
    advance_amount: String,
    agreement_words: Option<String>,
    advance_words: Option<String>,
    balance_amount: Option<i64>,
    balance_words: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct MonetaryInput {
    #[serde(deserialize_with = "lenient_string")]
    agreement_amount: String,
    #[serde(deserialize_with = "lenient_string")]
    advance_amount: String,
}

impl From<MonetaryInput> for MonetaryTerms {
    fn from(input: MonetaryInput) -> Self {
        MonetaryTerms::new(input.agreement_amount, input.advance_amount)
    }
}

impl MonetaryTerms {
    pub fn new(agreement: impl Into<String>, advance: impl Into<String>) -> Self {
        let mut terms = Self {
            agreement_amount: agreement.into(),
            advance_amount: advance.into(),
            ..Default::default()
        };
        terms.recompute();
        terms
    }

    pub fn set_agreement_amount(&mut self, value: impl Into<String>) {
        self.agreement_amount = value.into();
        self.recompute();
    }

    pub fn set_advance_amount(&mut self, value: impl Into<String>) {
        self.advance_amount = value.into();
        self.recompute();
    }

    /// Re-derive the words forms and the balance from the raw amounts
    pub fn recompute(&mut self) {
        let agreement = parse_amount(&self.agreement_amount);
        let advance = parse_amount(&self.advance_amount);
        self.agreement_words = amount::words_of(agreement);
        self.advance_words = amount::words_of(advance);
        self.balance_amount = amount::balance(agreement, advance);
        self.balance_words = amount::words_of(self.balance_amount);
    }

    pub fn agreement(&self) -> Option<i64> {
        parse_amount(&self.agreement_amount)
    }

    pub fn advance(&self) -> Option<i64> {
        parse_amount(&self.advance_amount)
    }

    pub fn balance(&self) -> Option<i64> {
        self.balance_amount
    }

    pub fn agreement_words(&self) -> Option<&str> {
        self.agreement_words.as_deref()
    }

    pub fn advance_words(&self) -> Option<&str> {
        self.advance_words.as_deref()
    }

    pub fn balance_words(&self) -> Option<&str> {
        self.balance_words.as_deref()
    }
}

/// Unit of the repayment period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeFrameType {
    Days,
    Months,
    Years,
    /// A calendar date; also the fallback for unrecognised units
    #[default]
    Date,
}

impl From<String> for TimeFrameType {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "days" | "day" => TimeFrameType::Days,
            "months" | "month" => TimeFrameType::Months,
            "years" | "year" => TimeFrameType::Years,
            _ => TimeFrameType::Date,
        }
    }
}

impl From<TimeFrameType> for String {
    fn from(value: TimeFrameType) -> Self {
        match value {
            TimeFrameType::Days => "days",
            TimeFrameType::Months => "months",
            TimeFrameType::Years => "years",
            TimeFrameType::Date => "date",
        }
        .to_string()
    }
}

/// Period within which the balance has to be paid
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFrame {
    #[serde(rename = "type", deserialize_with = "lenient_time_frame_type")]
    pub kind: TimeFrameType,
    /// Count of units, or a date when `kind` is `Date`
    #[serde(deserialize_with = "lenient_string")]
    pub value: String,
}

/// The earlier instrument under which the property is held
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorDocumentReference {
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    /// Sub-registrar office that registered it
    #[serde(deserialize_with = "lenient_string")]
    pub office: String,
    #[serde(deserialize_with = "lenient_string")]
    pub book_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub document_year: String,
    #[serde(deserialize_with = "lenient_string")]
    pub document_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub document_type: String,
}

/// Who typed the document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypistInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub office_name: String,
}

impl TypistInfo {
    pub fn is_blank(&self) -> bool {
        *self == TypistInfo::default()
    }
}

/// Everything needed to compose one instrument
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentModel {
    pub kind: InstrumentKind,
    /// Assigned when the document is saved
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_option"
    )]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub terms: MonetaryTerms,
    #[serde(deserialize_with = "null_as_default")]
    pub time_frame: TimeFrame,
    #[serde(deserialize_with = "null_as_default")]
    pub prior_document: PriorDocumentReference,
    #[serde(deserialize_with = "null_as_default")]
    pub buyers: Vec<Party>,
    #[serde(deserialize_with = "null_as_default")]
    pub sellers: Vec<Party>,
    #[serde(deserialize_with = "null_as_default")]
    pub witnesses: Vec<Party>,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: Vec<PropertyParcel>,
    #[serde(deserialize_with = "null_as_default")]
    pub typist: TypistInfo,
}

impl DocumentModel {
    /// Fresh model with one editable placeholder row in every list
    pub fn blank(kind: InstrumentKind) -> Self {
        Self {
            kind,
            buyers: vec![Party::default()],
            sellers: vec![Party::default()],
            witnesses: vec![Party::default()],
            properties: vec![PropertyParcel::default()],
            ..Default::default()
        }
    }

    pub fn parties(&self, role: Role) -> &[Party] {
        match role {
            Role::Buyer => &self.buyers,
            Role::Seller => &self.sellers,
            Role::Witness => &self.witnesses,
        }
    }

    pub fn parties_mut(&mut self, role: Role) -> &mut Vec<Party> {
        match role {
            Role::Buyer => &mut self.buyers,
            Role::Seller => &mut self.sellers,
            Role::Witness => &mut self.witnesses,
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a model file, choosing the format from the extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("toml") => Self::from_toml_str(&text),
            other => Err(CoreError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Accept strings, numbers, booleans or null where a text field is expected
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
        Null(()),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(s) => s,
        Lenient::Int(n) => n.to_string(),
        Lenient::Float(f) if f.is_finite() => f.to_string(),
        Lenient::Float(_) => String::new(),
        Lenient::Bool(b) => b.to_string(),
        Lenient::Null(()) => String::new(),
    })
}

/// Like [`lenient_string`], with null and blank values read as `None`
fn lenient_option<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = lenient_string(deserializer)?;
    Ok(if text.trim().is_empty() { None } else { Some(text) })
}

/// Null where a nested record or list is expected reads as its default
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_relation<'de, D>(deserializer: D) -> std::result::Result<RelationType, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(RelationType::from)
}

fn lenient_time_frame_type<'de, D>(deserializer: D) -> std::result::Result<TimeFrameType, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(TimeFrameType::from)
}
