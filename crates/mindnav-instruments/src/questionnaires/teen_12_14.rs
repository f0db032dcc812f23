use std::sync::LazyLock;

use mindnav_core::models::response::AgeGroup;

use crate::Questionnaire;
use crate::scoring::CategoryDef;

/// Variant for ages 12–14: 25 base questions, 5 per category.
/// Lower trigger thresholds than the 15–18 variant.
pub struct Teen12To14;

impl Questionnaire for Teen12To14 {
    fn id(&self) -> &str {
        "teen_12_14"
    }

    fn name(&self) -> &str {
        "Neurodiversiteit Quiz 12-14"
    }

    fn age_group(&self) -> AgeGroup {
        AgeGroup::Teen12To14
    }

    fn categories(&self) -> &[CategoryDef] {
        static CATEGORIES: LazyLock<Vec<CategoryDef>> = LazyLock::new(|| {
            vec![
                category("ADD", "Aandacht & Focus", 5, 2.0),
                category("ADHD", "Energie & Impulsen", 5, 2.0),
                category("HSP", "Prikkelverwerking", 5, 2.8),
                category("ASS", "Structuur & Sociale Voorkeuren", 5, 2.8),
                category("AngstDepressie", "Stemming & Spanning", 5, 2.8),
            ]
        });
        &CATEGORIES
    }
}

fn category(key: &str, name: &str, question_count: usize, threshold: f64) -> CategoryDef {
    CategoryDef {
        key: key.to_string(),
        name: name.to_string(),
        question_count,
        threshold,
    }
}
