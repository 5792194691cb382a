//! # Grammar Tests
//!
//! Pins every (measure, quantity class) cell of the grammar selection rules.

#[cfg(test)]
mod tests {
    use recipes::grammar_selector::select_grammar;
    use recipes::measurement_types::{classify, MeasureKind, QuantityClass};
    use recipes::recipe_model::IngredientNameForms;

    // Quantities representing each class: Singular, Few, Many, Fractional
    const QUANTITIES: [f64; 4] = [1.0, 3.0, 7.0, 1.5];

    fn marked_forms() -> IngredientNameForms {
        IngredientNameForms::new("base").with_forms("one", "two", "five", "half")
    }

    #[test]
    fn test_class_order_at_boundaries() {
        assert_eq!(classify(0.99), QuantityClass::Fractional);
        assert_eq!(classify(1.0), QuantityClass::Singular);
        assert_eq!(classify(1.01), QuantityClass::Fractional);
        assert_eq!(classify(4.0), QuantityClass::Few);
        assert_eq!(classify(4.99), QuantityClass::Fractional);
        assert_eq!(classify(5.0), QuantityClass::Many);
    }

    #[test]
    fn test_declined_measures() {
        let expected = [
            (MeasureKind::Teaspoon, ["łyżeczka", "łyżeczki", "łyżeczek", "łyżeczki"]),
            (MeasureKind::Tablespoon, ["łyżka", "łyżki", "łyżek", "łyżki"]),
            (MeasureKind::Glass, ["szklanka", "szklanki", "szklanek", "szklanki"]),
            (MeasureKind::Gram, ["gram", "gramy", "gramów", "grama"]),
        ];

        for (measure, nouns) in expected {
            for (quantity, noun) in QUANTITIES.iter().zip(nouns) {
                let selection = select_grammar(measure, &marked_forms(), *quantity).unwrap();
                assert!(selection.needs_measure_name);
                assert_eq!(selection.measure_name, Some(noun), "{measure} {quantity}");
                assert_eq!(selection.ingredient_name, "half", "{measure} {quantity}");
            }
        }
    }

    #[test]
    fn test_pinch_uses_singular_noun_for_every_class() {
        for quantity in QUANTITIES {
            let selection = select_grammar(MeasureKind::Pinch, &marked_forms(), quantity).unwrap();
            assert!(selection.needs_measure_name);
            assert_eq!(selection.measure_name, Some("szczypta"));
            assert_eq!(selection.ingredient_name, "half");
        }
    }

    #[test]
    fn test_to_taste_uses_fixed_phrase() {
        for quantity in QUANTITIES {
            let selection = select_grammar(MeasureKind::ToTaste, &marked_forms(), quantity).unwrap();
            assert!(selection.needs_measure_name);
            assert_eq!(selection.measure_name, Some("do smaku"));
            assert_eq!(selection.ingredient_name, "one");
        }
    }

    #[test]
    fn test_unit_maps_class_to_name_form() {
        let expected = ["one", "two", "five", "half"];
        for (quantity, name) in QUANTITIES.iter().zip(expected) {
            let selection = select_grammar(MeasureKind::Unit, &marked_forms(), *quantity).unwrap();
            assert!(!selection.needs_measure_name);
            assert_eq!(selection.measure_name, None);
            assert_eq!(selection.ingredient_name, name, "{quantity}");
        }

        // Fractions below one and fractional values above five are "half"
        for quantity in [0.5, 5.5] {
            let selection = select_grammar(MeasureKind::Unit, &marked_forms(), quantity).unwrap();
            assert_eq!(selection.ingredient_name, "half");
        }
    }

    #[test]
    fn test_missing_forms_fall_back_to_base_name() {
        let forms = IngredientNameForms::new("test ingredient");
        let selection = select_grammar(MeasureKind::Unit, &forms, 2.0).unwrap();
        assert_eq!(selection.ingredient_name, "test ingredient");
    }

    #[test]
    fn test_teaspoon_many_scenario() {
        let selection = select_grammar(MeasureKind::Teaspoon, &marked_forms(), 2.0 * 3.0).unwrap();
        assert_eq!(selection.measure_name, Some("łyżeczek"));
    }
}
