use std::sync::LazyLock;

use mindnav_core::models::response::AgeGroup;

use crate::Questionnaire;
use crate::scoring::CategoryDef;

/// Variant for ages 15–18: 30 base questions, 6 per category.
pub struct Teen15To18;

impl Questionnaire for Teen15To18 {
    fn id(&self) -> &str {
        "teen_15_18"
    }

    fn name(&self) -> &str {
        "Neurodiversiteit Quiz 15-18"
    }

    fn age_group(&self) -> AgeGroup {
        AgeGroup::Teen15To18
    }

    fn categories(&self) -> &[CategoryDef] {
        static CATEGORIES: LazyLock<Vec<CategoryDef>> = LazyLock::new(|| {
            vec![
                category("ADD", "Aandacht & Focus", 6, 2.5),
                category("ADHD", "Energie & Impulsen", 6, 2.5),
                category("HSP", "Prikkelverwerking", 6, 3.0),
                category("ASS", "Structuur & Sociale Voorkeuren", 6, 3.0),
                category("AngstDepressie", "Stemming & Spanning", 6, 3.0),
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
