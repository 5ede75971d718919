//! Composer behaviour over whole models

use pathiram_ast::SectionKind;
use pathiram_core::compose::NO_PROPERTY;
use pathiram_core::{
    amount_in_words, compose, compose_html, DocumentModel, InstrumentKind, MonetaryTerms, Party,
    PropertyParcel, RelationType,
};

fn buyer() -> Party {
    Party {
        age: "30".to_string(),
        relation_type: RelationType::from("மகன்"),
        ..Party::named("Buyer")
    }
}

fn model_with(buyers: usize, sellers: usize) -> DocumentModel {
    DocumentModel {
        kind: InstrumentKind::SaleAgreement,
        buyers: (0..buyers)
            .map(|i| Party::named(format!("வாங்குநர் {}", i + 1)))
            .collect(),
        sellers: (0..sellers)
            .map(|i| Party::named(format!("விற்குநர் {}", i + 1)))
            .collect(),
        witnesses: vec![Party::named("சாட்சி ஒன்று")],
        ..Default::default()
    }
}

#[test]
fn single_buyer_and_seller() {
    let mut model = DocumentModel {
        buyers: vec![buyer()],
        sellers: vec![Party::named("Seller")],
        ..DocumentModel::blank(InstrumentKind::SaleAgreement)
    };
    model.terms.set_agreement_amount("100000");
    model.terms.set_advance_amount("20000");

    assert_eq!(model.terms.balance(), Some(80000));

    let html = compose_html(&model);
    assert!(html.contains("ரூ.80000/-(ரூபாய் எண்பது ஆயிரம் மட்டும்)"));
    assert!(html.contains("வாங்குபவர்"));
    assert!(html.contains("விற்பவர்"));
    assert!(!html.contains("வாங்குபவர்கள்"));
    assert!(!html.contains("விற்பவர்கள்"));
    assert!(html.contains("திரு. Buyer (1) - வாங்குபவர்"));
    assert!(html.contains("Seller (2) - விற்பவர்"));
    assert!(html.contains("நாங்கள் இருவரும்"));
}

#[test]
fn two_buyers_one_seller() {
    let html = compose_html(&model_with(2, 1));

    assert!(html.contains("(1) - வாங்குபவர்கள்"));
    assert!(html.contains("(2) - வாங்குபவர்கள்"));
    assert!(html.contains("(3) - விற்பவர்"));
    assert!(!html.contains("விற்பவர்கள்"));
    assert!(html.contains("நாங்கள் அனைவரும்"));
    assert!(!html.contains("நாங்கள் இருவரும்"));
}

#[test]
fn seller_ordinals_continue_after_buyers() {
    for (buyers, sellers) in [(1, 1), (1, 3), (3, 2), (4, 4)] {
        let doc = compose(&model_with(buyers, sellers));
        let parties = doc.section(SectionKind::Parties).unwrap().plain_text();

        let mut last = 0;
        for index in 1..=buyers + sellers {
            let needle = format!("({})", index);
            let pos = parties
                .find(&needle)
                .unwrap_or_else(|| panic!("missing ordinal {index} in {parties}"));
            assert!(pos >= last, "ordinal {index} out of order");
            last = pos;
        }
        assert!(!parties.contains(&format!("({})", buyers + sellers + 1)));
    }
}

#[test]
fn pluralization_is_uniform() {
    for kind in InstrumentKind::ALL {
        let mut model = model_with(1, 1);
        model.kind = kind;
        let single = compose_html(&model);

        model.witnesses.push(Party::named("சாட்சி இரண்டு"));
        let plural_witness = compose_html(&model);

        assert!(!single.contains("சாட்சிகள்"), "{kind}");
        assert!(plural_witness.contains("சாட்சிகள்"), "{kind}");
    }
}

#[test]
fn empty_property_list_placeholder() {
    let model = DocumentModel {
        properties: vec![
            PropertyParcel {
                area: "2 ஏக்கர்".to_string(),
                ..Default::default()
            },
            PropertyParcel::default(),
        ],
        ..model_with(1, 1)
    };
    let doc = compose(&model);
    let property: Vec<_> = doc.sections_of(SectionKind::Property).collect();
    assert_eq!(property.len(), 1);
    assert_eq!(property[0].plain_text(), NO_PROPERTY);
    assert!(!compose_html(&model).contains("2 ஏக்கர்"));
}

#[test]
fn balance_follows_both_inputs() {
    let pairs = [
        ("500000", "100000"),
        ("1,25,000", "25,000"),
        ("₹ 75000", "75000"),
        ("1000", "2500"),
    ];
    for (agreement, advance) in pairs {
        let mut terms = MonetaryTerms::default();
        terms.set_agreement_amount(agreement);
        terms.set_advance_amount(advance);

        let expected = terms.agreement().unwrap() - terms.advance().unwrap();
        assert_eq!(terms.balance(), Some(expected));
        assert_eq!(
            terms.balance_words(),
            Some(amount_in_words(expected).as_str())
        );

        terms.set_agreement_amount("");
        assert_eq!(terms.balance(), None);
        assert_eq!(terms.balance_words(), None);
    }
}

#[test]
fn composer_is_total_over_empty_and_garbage_input() {
    let garbage = DocumentModel::from_json_str(
        r#"{
            "date": "not a date",
            "terms": { "agreement_amount": "abc", "advance_amount": null },
            "time_frame": { "type": "weeks", "value": "" },
            "buyers": [{}],
            "sellers": [],
            "witnesses": [],
            "properties": [{ "survey_number": "12", "assessed_value": "NaN" }]
        }"#,
    )
    .unwrap();

    for kind in InstrumentKind::ALL {
        for mut model in [DocumentModel::default(), DocumentModel::blank(kind), garbage.clone()] {
            model.kind = kind;
            let html = compose_html(&model);
            for bad in ["undefined", "NaN", "Invalid Date", "null"] {
                assert!(!html.contains(bad), "{kind}: found {bad}");
            }
            assert!(html.contains("குறிப்பிடப்படவில்லை"));
        }
    }
}

#[test]
fn unparsed_date_is_kept_verbatim() {
    let mut model = model_with(1, 1);
    model.date = "தை 1".to_string();
    let doc = compose(&model);
    assert_eq!(
        doc.section(SectionKind::Date).unwrap().plain_text(),
        "நாள்: தை 1"
    );
}

#[test]
fn compose_is_idempotent() {
    let mut model = model_with(2, 2);
    model.terms = MonetaryTerms::new("300000", "50000");
    model.date = "2024-05-10".to_string();
    assert_eq!(compose_html(&model), compose_html(&model));
    assert_eq!(compose(&model), compose(&model));
}

#[test]
fn each_instrument_has_its_own_title() {
    let expected = [
        (InstrumentKind::SaleAgreement, "கிரைய ஒப்பந்தப் பத்திரம்"),
        (InstrumentKind::SaleDeed, "கிரையப் பத்திரம்"),
        (InstrumentKind::SettlementDeed, "தான செட்டில்மெண்ட் பத்திரம்"),
    ];
    for (kind, title) in expected {
        let doc = compose(&DocumentModel::blank(kind));
        assert_eq!(doc.title_text(), title);
    }
}

#[test]
fn settlement_deed_mentions_no_money() {
    let mut model = model_with(1, 1);
    model.kind = InstrumentKind::SettlementDeed;
    model.terms = MonetaryTerms::new("100000", "1000");
    let doc = compose(&model);
    let payment = doc.section(SectionKind::Payment).unwrap().plain_text();
    assert!(!payment.contains("ரூ."));
    assert!(payment.contains("செட்டில்மெண்ட் பெறுபவர்"));
}
