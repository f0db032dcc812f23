//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the MindNavigator results bucket.

use uuid::Uuid;

pub fn quiz_result(id: Uuid) -> String {
    format!("results/{id}.json")
}

pub fn report_analysis(id: Uuid) -> String {
    format!("reports/{id}/analysis.md")
}

pub fn report_summary(id: Uuid) -> String {
    format!("reports/{id}/summary.txt")
}

pub fn report_transaction(id: Uuid) -> String {
    format!("reports/{id}/transaction.json")
}

pub const RESULTS_PREFIX: &str = "results/";

pub fn report_prefix(id: Uuid) -> String {
    format!("reports/{id}/")
}
