//! The four recital paragraphs of each instrument
//!
//! Every instrument has a prior-document clause, a transaction clause, a
//! property-rights clause and a closing covenant. Role nouns, pronouns and
//! verb endings are substituted from the party counts.

use pathiram_ast::SectionKind;

use crate::amount::{money_clause, PLACEHOLDER};
use crate::date::format_date;
use crate::grammar::{agree, collective_pronoun, first_person_dative, signing_verb};
use crate::model::{DocumentModel, InstrumentKind, TimeFrame, TimeFrameType};

use super::vocabulary::Vocabulary;

/// Agreement inputs shared by all clauses
pub struct RecitalContext<'a> {
    pub model: &'a DocumentModel,
    /// Buyer-side noun, already in the right number
    pub transferee: &'static str,
    /// Seller-side noun, already in the right number
    pub transferor: &'static str,
    pub buyers: usize,
    pub sellers: usize,
}

impl<'a> RecitalContext<'a> {
    pub fn new(model: &'a DocumentModel, vocab: &Vocabulary) -> Self {
        let buyers = model.buyers.len();
        let sellers = model.sellers.len();
        Self {
            model,
            transferee: vocab.transferee.for_count(buyers),
            transferor: vocab.transferor.for_count(sellers),
            buyers,
            sellers,
        }
    }

    fn pronoun(&self) -> &'static str {
        collective_pronoun(self.buyers + self.sellers)
    }

    fn signing(&self) -> &'static str {
        signing_verb(self.buyers + self.sellers)
    }
}

fn or_placeholder(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// Recitals in document order, tagged with their section kind
pub fn recitals(ctx: &RecitalContext<'_>) -> Vec<(SectionKind, String)> {
    let transaction = match ctx.model.kind {
        InstrumentKind::SaleAgreement => sale_agreement_payment(ctx),
        InstrumentKind::SaleDeed => sale_deed_consideration(ctx),
        InstrumentKind::SettlementDeed => settlement_affection(ctx),
    };
    let covenant = match ctx.model.kind {
        InstrumentKind::SaleAgreement => sale_agreement_covenant(ctx),
        InstrumentKind::SaleDeed => sale_deed_covenant(ctx),
        InstrumentKind::SettlementDeed => settlement_covenant(ctx),
    };
    vec![
        (SectionKind::PriorDocument, prior_document(ctx)),
        (SectionKind::Payment, transaction),
        (SectionKind::PropertyRights, property_rights(ctx)),
        (SectionKind::Covenant, covenant),
    ]
}

fn prior_document(ctx: &RecitalContext<'_>) -> String {
    let prior = &ctx.model.prior_document;
    let date = format_date(&prior.date).unwrap_or_else(|| PLACEHOLDER.to_string());
    format!(
        "மேற்படி {transferor} ஆகிய {dative} {date} தேதியில் {office} சார் பதிவாளர் அலுவலகத்தில் \
         புத்தகம் {book}, {year} ஆம் ஆண்டின் ஆவண எண் {number} ஆகப் பதிவு செய்யப்பட்ட {doc_type} \
         ஆவணத்தின் மூலம் கீழ்க்கண்ட சொத்து பாத்தியப்பட்டு, இன்றளவும் {transferor} சுவாதீனத்தில் \
         அனுபவித்து வருகிறது.",
        transferor = ctx.transferor,
        dative = first_person_dative(ctx.sellers),
        date = date,
        office = or_placeholder(&prior.office),
        book = or_placeholder(&prior.book_number),
        year = or_placeholder(&prior.document_year),
        number = or_placeholder(&prior.document_number),
        doc_type = or_placeholder(&prior.document_type),
    )
}

/// Deadline phrase for the balance payment
pub fn time_frame_phrase(time_frame: &TimeFrame) -> String {
    let value = time_frame.value.trim();
    if value.is_empty() {
        return format!("காலக்கெடு {}", PLACEHOLDER);
    }
    match time_frame.kind {
        TimeFrameType::Days => format!("இன்று முதல் {} நாட்களுக்குள்", value),
        TimeFrameType::Months => format!("இன்று முதல் {} மாதங்களுக்குள்", value),
        TimeFrameType::Years => format!("இன்று முதல் {} ஆண்டுகளுக்குள்", value),
        TimeFrameType::Date => format!(
            "{} தேதிக்குள்",
            format_date(value).unwrap_or_else(|| value.to_string())
        ),
    }
}

fn sale_agreement_payment(ctx: &RecitalContext<'_>) -> String {
    let terms = &ctx.model.terms;
    format!(
        "மேற்படி சொத்தை {transferee} பெயருக்கு மொத்த கிரையத் தொகை {agreement} க்கு கிரையம் செய்து \
         கொடுக்க {pronoun} சம்மதித்து, இன்றைய தினம் முன்பணமாக {advance} ஐ {transferor} ரொக்கமாகப் \
         {received}. மீதித் தொகை {balance} ஐ {deadline} {transferee} செலுத்தி கிரையம் பெற்றுக்கொள்ள \
         வேண்டியது.",
        transferee = ctx.transferee,
        transferor = ctx.transferor,
        pronoun = ctx.pronoun(),
        agreement = money_clause(terms.agreement()),
        advance = money_clause(terms.advance()),
        balance = money_clause(terms.balance()),
        deadline = time_frame_phrase(&ctx.model.time_frame),
        received = agree("பெற்றுக்கொண்டார்", ctx.sellers),
    )
}

fn sale_deed_consideration(ctx: &RecitalContext<'_>) -> String {
    format!(
        "மேற்படி சொத்தை {transferee} பெயருக்கு முழு கிரையத் தொகை {agreement} க்கு கிரையம் செய்து \
         கொடுக்க {pronoun} சம்மதித்து, மேற்படி முழுத் தொகையையும் {transferor} இன்றைய தினம் \
         ரொக்கமாகப் {received}.",
        transferee = ctx.transferee,
        transferor = ctx.transferor,
        pronoun = ctx.pronoun(),
        agreement = money_clause(ctx.model.terms.agreement()),
        received = agree("பெற்றுக்கொண்டார்", ctx.sellers),
    )
}

fn settlement_affection(ctx: &RecitalContext<'_>) -> String {
    format!(
        "{transferor} {transferee} மீது கொண்டுள்ள அன்பு மற்றும் பாசத்தின் காரணமாக, எவ்வித பணப் \
         பரிவர்த்தனையும் இன்றி, கீழ்க்கண்ட சொத்தை {transferee} பெயருக்கு தான செட்டில்மெண்ட் செய்து \
         {gives}.",
        transferee = ctx.transferee,
        transferor = ctx.transferor,
        gives = agree("கொடுக்கிறார்", ctx.sellers),
    )
}

fn property_rights(ctx: &RecitalContext<'_>) -> String {
    format!(
        "மேற்படி சொத்தின் மீது எவ்வித வில்லங்கமும், அடமானமும், நீதிமன்றத் தடையும் இல்லை என்றும், \
         ஏதேனும் இருப்பின் அதனை {transferor} சொந்தப் பொறுப்பில் சரிசெய்து {settles} என்றும் \
         {transferor} உறுதி {assures}.",
        transferor = ctx.transferor,
        settles = agree("கொடுப்பார்", ctx.sellers),
        assures = agree("கூறுகிறார்", ctx.sellers),
    )
}

fn sale_agreement_covenant(ctx: &RecitalContext<'_>) -> String {
    format!(
        "குறிப்பிட்ட காலக்கெடுவுக்குள் {transferee} மீதித் தொகையைச் செலுத்தத் தவறினால் முன்பணம் \
         திருப்பித் தரப்படமாட்டாது என்றும், {transferor} கிரையம் செய்து கொடுக்கத் தவறினால் \
         {transferee} நீதிமன்றம் மூலம் கிரையம் பெற்றுக்கொள்ளலாம் என்றும் {pronoun} சம்மதித்து இந்த \
         ஒப்பந்தத்தில் மனப்பூர்வமாகக் {signing}.",
        transferee = ctx.transferee,
        transferor = ctx.transferor,
        pronoun = ctx.pronoun(),
        signing = ctx.signing(),
    )
}

fn sale_deed_covenant(ctx: &RecitalContext<'_>) -> String {
    format!(
        "இன்று முதல் மேற்படி சொத்தை {transferee} சர்வ சுதந்திரத்துடன் ஆண்டு அனுபவித்துக் கொள்ள \
         வேண்டியது என்று {pronoun} சம்மதித்து இந்தக் கிரையப் பத்திரத்தில் மனப்பூர்வமாகக் {signing}.",
        transferee = ctx.transferee,
        pronoun = ctx.pronoun(),
        signing = ctx.signing(),
    )
}

fn settlement_covenant(ctx: &RecitalContext<'_>) -> String {
    format!(
        "இந்த செட்டில்மெண்டை {transferee} {accepted} என்றும், இனி இதனை ரத்து செய்ய {transferor} \
         உரிமை இல்லை என்றும் {pronoun} சம்மதித்து மனப்பூர்வமாகக் {signing}.",
        transferee = ctx.transferee,
        transferor = ctx.transferor,
        accepted = agree("ஏற்றுக்கொண்டார்", ctx.buyers),
        pronoun = ctx.pronoun(),
        signing = ctx.signing(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MonetaryTerms, Party};

    fn model(buyers: usize, sellers: usize) -> DocumentModel {
        DocumentModel {
            buyers: vec![Party::named("அ"); buyers],
            sellers: vec![Party::named("ஆ"); sellers],
            terms: MonetaryTerms::new("100000", "20000"),
            ..Default::default()
        }
    }

    #[test]
    fn test_time_frame_phrases() {
        let mut tf = TimeFrame {
            kind: TimeFrameType::Months,
            value: "6".to_string(),
        };
        assert_eq!(time_frame_phrase(&tf), "இன்று முதல் 6 மாதங்களுக்குள்");
        tf.kind = TimeFrameType::Days;
        assert_eq!(time_frame_phrase(&tf), "இன்று முதல் 6 நாட்களுக்குள்");
        tf.kind = TimeFrameType::Years;
        assert_eq!(time_frame_phrase(&tf), "இன்று முதல் 6 ஆண்டுகளுக்குள்");
    }

    #[test]
    fn test_unknown_unit_uses_date_phrasing() {
        let tf: TimeFrame =
            serde_json::from_str(r#"{"type": "fortnights", "value": "2024-12-31"}"#).unwrap();
        assert_eq!(time_frame_phrase(&tf), "31-12-2024 தேதிக்குள்");
    }

    #[test]
    fn test_empty_time_frame() {
        assert_eq!(
            time_frame_phrase(&TimeFrame::default()),
            "காலக்கெடு குறிப்பிடப்படவில்லை"
        );
    }

    #[test]
    fn test_payment_clause_carries_balance() {
        let m = model(1, 1);
        let ctx = RecitalContext::new(&m, Vocabulary::of(InstrumentKind::SaleAgreement));
        let payment = sale_agreement_payment(&ctx);
        assert!(payment.contains("ரூ.80000/-(ரூபாய் எண்பது ஆயிரம் மட்டும்)"));
        assert!(payment.contains("நாங்கள் இருவரும்"));
        assert!(payment.contains("பெற்றுக்கொண்டார்."));
    }

    #[test]
    fn test_plural_sellers_change_verbs() {
        let m = model(1, 2);
        let ctx = RecitalContext::new(&m, Vocabulary::of(InstrumentKind::SaleAgreement));
        let rights = property_rights(&ctx);
        assert!(rights.contains("விற்பவர்கள்"));
        assert!(rights.contains("கூறுகிறார்கள்"));
        assert!(prior_document(&ctx).contains("எங்களுக்கு"));
    }

    #[test]
    fn test_recitals_are_tagged_in_order() {
        let m = model(1, 1);
        let ctx = RecitalContext::new(&m, Vocabulary::of(InstrumentKind::SettlementDeed));
        let kinds: Vec<_> = recitals(&ctx).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::PriorDocument,
                SectionKind::Payment,
                SectionKind::PropertyRights,
                SectionKind::Covenant
            ]
        );
    }
}
