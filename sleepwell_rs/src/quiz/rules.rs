//! Recommendation rule table.
//!
//! Rules fire in a fixed order (temperature, position, concern) and the
//! result is deduplicated then capped, so the order of the pushes below
//! decides which products survive the cap.

use serde::Serialize;

use super::answers::CompleteAnswers;
use super::questions::{Concern, Position, Temperature};

/// Upper bound on recommended products.
pub const MAX_PRODUCTS: usize = 4;

const COOLBREEZE_PILLOW: &str = "CoolBreeze Gel Pillow";
const COOLING_TOPPER: &str = "Cooling Gel Mattress Topper";
const CLOUD_PILLOW: &str = "Cloud Memory Foam Pillow";
const WEIGHTED_BLANKET: &str = "Weighted Therapy Blanket";
const MEMORY_TOPPER: &str = "Premium Memory Foam Topper";
const CERVICAL_PILLOW: &str = "Cervical Support Pillow";
const MELATONIN: &str = "Melatonin Sleep Aid";
const NATURAL_FORMULA: &str = "Natural Sleep Support Formula";
const SHEETS_SET: &str = "Luxury Sleep Sheets Set";

/// Derived quiz result, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    /// Unique names, at most [`MAX_PRODUCTS`], in rule order
    pub products: Vec<&'static str>,
}

/// Evaluate the rule table for a complete set of answers.
pub fn recommend(answers: &CompleteAnswers) -> Recommendation {
    let mut picks: Vec<&'static str> = Vec::with_capacity(6);

    let (title, description) = match answers.temperature {
        Temperature::Hot => {
            picks.extend([COOLBREEZE_PILLOW, COOLING_TOPPER]);
            (
                "Stay Cool All Night",
                "Based on your preference for cooler sleep, we recommend our cooling gel products.",
            )
        }
        Temperature::Cold => {
            picks.extend([CLOUD_PILLOW, WEIGHTED_BLANKET]);
            (
                "Warm & Cozy Setup",
                "For a warmer sleep experience, these products provide comfort and warmth.",
            )
        }
        Temperature::Neutral => {
            picks.extend([CLOUD_PILLOW, MEMORY_TOPPER]);
            (
                "Balanced Comfort",
                "Perfect temperature regulation with our balanced product selection.",
            )
        }
    };

    if matches!(answers.position, Position::Side | Position::Back) {
        push_unique(&mut picks, CERVICAL_PILLOW);
    }

    match answers.concerns {
        Concern::Pain => {
            push_unique(&mut picks, CERVICAL_PILLOW);
            // may duplicate the neutral topper; the final dedup handles it
            picks.push(MEMORY_TOPPER);
        }
        Concern::Insomnia => picks.extend([MELATONIN, WEIGHTED_BLANKET]),
        Concern::Quality => picks.extend([NATURAL_FORMULA, SHEETS_SET]),
        Concern::Comfort => {}
    }

    Recommendation {
        title,
        description,
        products: dedup_capped(picks),
    }
}

/// Rule results for every answer combination, in [`CompleteAnswers::all`] order.
pub fn all_recommendations() -> Vec<(CompleteAnswers, Recommendation)> {
    CompleteAnswers::all()
        .map(|answers| (answers, recommend(&answers)))
        .collect()
}

fn push_unique(picks: &mut Vec<&'static str>, name: &'static str) {
    if !picks.contains(&name) {
        picks.push(name);
    }
}

fn dedup_capped(picks: Vec<&'static str>) -> Vec<&'static str> {
    let mut out = Vec::with_capacity(MAX_PRODUCTS);
    for name in picks {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out.truncate(MAX_PRODUCTS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn answers(position: Position, temperature: Temperature, concerns: Concern) -> CompleteAnswers {
        CompleteAnswers {
            position,
            temperature,
            concerns,
        }
    }

    #[test]
    fn every_combination_is_unique_and_capped() {
        for (answers, rec) in all_recommendations() {
            assert!(rec.products.len() <= MAX_PRODUCTS, "{} too long", answers.key());
            let unique: HashSet<_> = rec.products.iter().collect();
            assert_eq!(unique.len(), rec.products.len(), "{} has duplicates", answers.key());
            assert!(!rec.products.is_empty());
        }
    }

    #[test]
    fn side_hot_pain() {
        let rec = recommend(&answers(Position::Side, Temperature::Hot, Concern::Pain));
        assert_eq!(rec.title, "Stay Cool All Night");
        assert_eq!(
            rec.products,
            vec![
                "CoolBreeze Gel Pillow",
                "Cooling Gel Mattress Topper",
                "Cervical Support Pillow",
                "Premium Memory Foam Topper",
            ]
        );
    }

    #[test]
    fn stomach_cold_insomnia_drops_second_blanket() {
        let rec = recommend(&answers(Position::Stomach, Temperature::Cold, Concern::Insomnia));
        assert_eq!(rec.title, "Warm & Cozy Setup");
        assert_eq!(
            rec.products,
            vec![
                "Cloud Memory Foam Pillow",
                "Weighted Therapy Blanket",
                "Melatonin Sleep Aid",
            ]
        );
    }

    #[test]
    fn back_neutral_comfort() {
        let rec = recommend(&answers(Position::Back, Temperature::Neutral, Concern::Comfort));
        assert_eq!(rec.title, "Balanced Comfort");
        assert_eq!(
            rec.products,
            vec![
                "Cloud Memory Foam Pillow",
                "Premium Memory Foam Topper",
                "Cervical Support Pillow",
            ]
        );
    }

    #[test]
    fn neutral_pain_dedups_the_repeated_topper() {
        let rec = recommend(&answers(Position::Combo, Temperature::Neutral, Concern::Pain));
        assert_eq!(
            rec.products,
            vec![
                "Cloud Memory Foam Pillow",
                "Premium Memory Foam Topper",
                "Cervical Support Pillow",
            ]
        );
    }

    #[test]
    fn cap_keeps_rule_order_when_five_candidates_accumulate() {
        let rec = recommend(&answers(Position::Side, Temperature::Hot, Concern::Quality));
        assert_eq!(
            rec.products,
            vec![
                "CoolBreeze Gel Pillow",
                "Cooling Gel Mattress Topper",
                "Cervical Support Pillow",
                "Natural Sleep Support Formula",
            ]
        );
    }
}
