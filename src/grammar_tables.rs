//! # Grammar Tables Module
//!
//! Static Polish declension data for measure nouns and the word "porcja",
//! plus the accepted display fractions. These tables are process-wide,
//! read-only and never mutated after compilation.

use crate::measurement_types::{MeasureKind, QuantityClass};

/// Fractions an amount may be displayed with, in ascending order
pub const ACCEPTED_FRACTIONS: [f64; 6] = [0.0, 0.25, 0.33, 0.5, 0.67, 0.75];

/// Display glyphs index-aligned with `ACCEPTED_FRACTIONS`; zero has none
pub const FRACTION_GLYPHS: [Option<&str>; 6] =
    [None, Some("1/4"), Some("1/3"), Some("1/2"), Some("2/3"), Some("3/4")];

/// Glyph for one of the accepted fractions
pub fn fraction_glyph(snapped: f64) -> Option<&'static str> {
    ACCEPTED_FRACTIONS
        .iter()
        .position(|accepted| *accepted == snapped)
        .and_then(|index| FRACTION_GLYPHS[index])
}

/// A noun declined for every quantity class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclinedNoun {
    /// Form used with exactly one ("łyżeczka")
    pub one: &'static str,
    /// Form used with 2, 3 and 4 ("łyżeczki")
    pub few: &'static str,
    /// Form used with five and more ("łyżeczek")
    pub many: &'static str,
    /// Form used with fractions ("łyżeczki")
    pub fractional: &'static str,
}

impl DeclinedNoun {
    pub const fn form(&self, class: QuantityClass) -> &'static str {
        match class {
            QuantityClass::Singular => self.one,
            QuantityClass::Few => self.few,
            QuantityClass::Many => self.many,
            QuantityClass::Fractional => self.fractional,
        }
    }
}

/// Grammar data attached to a measure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarTable {
    /// Measure noun declined by quantity class
    Declined(DeclinedNoun),
    /// A single phrase used regardless of quantity
    Fixed(&'static str),
    /// No measure noun; the ingredient name carries the count
    NoNoun,
}

pub static TEASPOON_GRAMMAR_PL: GrammarTable = GrammarTable::Declined(DeclinedNoun {
    one: "łyżeczka",
    few: "łyżeczki",
    many: "łyżeczek",
    fractional: "łyżeczki",
});

pub static TABLESPOON_GRAMMAR_PL: GrammarTable = GrammarTable::Declined(DeclinedNoun {
    one: "łyżka",
    few: "łyżki",
    many: "łyżek",
    fractional: "łyżki",
});

pub static GLASS_GRAMMAR_PL: GrammarTable = GrammarTable::Declined(DeclinedNoun {
    one: "szklanka",
    few: "szklanki",
    many: "szklanek",
    fractional: "szklanki",
});

pub static PINCH_GRAMMAR_PL: GrammarTable = GrammarTable::Declined(DeclinedNoun {
    one: "szczypta",
    few: "szczypty",
    many: "szczypt",
    fractional: "szczypty",
});

pub static GRAM_GRAMMAR_PL: GrammarTable = GrammarTable::Declined(DeclinedNoun {
    one: "gram",
    few: "gramy",
    many: "gramów",
    fractional: "grama",
});

pub static TO_TASTE_GRAMMAR_PL: GrammarTable = GrammarTable::Fixed("do smaku");

pub static UNIT_GRAMMAR_PL: GrammarTable = GrammarTable::NoNoun;

/// Accusative forms of "porcja", as in "przepis na 2 porcje"
pub static PORTION_GRAMMAR_PL: DeclinedNoun = DeclinedNoun {
    one: "porcję",
    few: "porcje",
    many: "porcji",
    fractional: "porcji",
};

impl MeasureKind {
    /// Grammar table for this measure
    pub fn grammar(self) -> &'static GrammarTable {
        match self {
            MeasureKind::Teaspoon => &TEASPOON_GRAMMAR_PL,
            MeasureKind::Tablespoon => &TABLESPOON_GRAMMAR_PL,
            MeasureKind::Glass => &GLASS_GRAMMAR_PL,
            MeasureKind::Pinch => &PINCH_GRAMMAR_PL,
            MeasureKind::Gram => &GRAM_GRAMMAR_PL,
            MeasureKind::ToTaste => &TO_TASTE_GRAMMAR_PL,
            MeasureKind::Unit => &UNIT_GRAMMAR_PL,
        }
    }
}
