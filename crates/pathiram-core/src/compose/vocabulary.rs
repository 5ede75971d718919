//! Per-instrument vocabulary

use crate::grammar::RoleNoun;
use crate::model::InstrumentKind;

/// Title and role nouns of one instrument kind
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub title: &'static str,
    /// Receiving side (buyers list)
    pub transferee: RoleNoun,
    /// Conveying side (sellers list)
    pub transferor: RoleNoun,
    pub witness: RoleNoun,
}

const WITNESS: RoleNoun = RoleNoun::new("சாட்சி", "சாட்சிகள்");

static SALE_AGREEMENT: Vocabulary = Vocabulary {
    title: "கிரைய ஒப்பந்தப் பத்திரம்",
    transferee: RoleNoun::new("வாங்குபவர்", "வாங்குபவர்கள்"),
    transferor: RoleNoun::new("விற்பவர்", "விற்பவர்கள்"),
    witness: WITNESS,
};

static SALE_DEED: Vocabulary = Vocabulary {
    title: "கிரையப் பத்திரம்",
    transferee: RoleNoun::new("கிரையம் பெறுபவர்", "கிரையம் பெறுபவர்கள்"),
    transferor: RoleNoun::new("கிரையம் கொடுப்பவர்", "கிரையம் கொடுப்பவர்கள்"),
    witness: WITNESS,
};

static SETTLEMENT_DEED: Vocabulary = Vocabulary {
    title: "தான செட்டில்மெண்ட் பத்திரம்",
    transferee: RoleNoun::new("செட்டில்மெண்ட் பெறுபவர்", "செட்டில்மெண்ட் பெறுபவர்கள்"),
    transferor: RoleNoun::new("செட்டில்மெண்ட் எழுதிக் கொடுப்பவர்", "செட்டில்மெண்ட் எழுதிக் கொடுப்பவர்கள்"),
    witness: WITNESS,
};

impl Vocabulary {
    pub fn of(kind: InstrumentKind) -> &'static Vocabulary {
        match kind {
            InstrumentKind::SaleAgreement => &SALE_AGREEMENT,
            InstrumentKind::SaleDeed => &SALE_DEED,
            InstrumentKind::SettlementDeed => &SETTLEMENT_DEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_distinct_title() {
        let titles: Vec<_> = InstrumentKind::ALL
            .iter()
            .map(|kind| Vocabulary::of(*kind).title)
            .collect();
        assert_eq!(titles.len(), 3);
        assert_ne!(titles[0], titles[1]);
        assert_ne!(titles[1], titles[2]);
    }

    #[test]
    fn test_plural_extends_singular() {
        for kind in InstrumentKind::ALL {
            let vocab = Vocabulary::of(kind);
            for noun in [vocab.transferee, vocab.transferor, vocab.witness] {
                assert!(noun.plural.starts_with(noun.singular));
            }
        }
    }
}
