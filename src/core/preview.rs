use crate::config::toml_config::BookConfig;

/// Text shown by `--dry-run`: each recipe that passes the book's filter, its labels
/// and its ingredients. Nothing is written to storage.
pub fn dry_run_summary(book: &BookConfig) -> String {
    let classified = book.classified();
    let mut lines = vec![format!(
        "📖 {} ({} of {} recipes)",
        book.book.name,
        classified.len(),
        book.recipes.len()
    )];

    for (recipe, profile) in classified {
        let labels: Vec<&str> = profile.labels().iter().map(|l| l.as_str()).collect();
        let labels = if labels.is_empty() {
            "-".to_string()
        } else {
            labels.join(", ")
        };
        lines.push(format!("  • {} [{}]", recipe.name(), labels));
        for ingredient in recipe.ingredients() {
            lines.push(format!("      {}", ingredient));
        }
    }

    lines.join("\n")
}
