//! Manifestation and daily action display formatting

use crate::models::{DailyAction, Manifestation};

/// Format the manifestation list
pub fn format_manifestation_list(items: &[Manifestation]) -> String {
    if items.is_empty() {
        return "No manifestations yet.".to_string();
    }

    items
        .iter()
        .map(|m| format!("{:<12}  {}\n", m.id.short(), m.content))
        .collect()
}

/// Format daily actions with their results
pub fn format_action_list(items: &[DailyAction], date_format: &str) -> String {
    if items.is_empty() {
        return "No daily actions yet.".to_string();
    }

    let mut output = String::new();
    for action in items {
        output.push_str(&format!(
            "{:<12}  {}  {}\n",
            action.id.short(),
            action.created_at.format(date_format),
            action.content
        ));
        if !action.results.is_empty() {
            output.push_str(&format!("{:<12}  Results: {}\n", "", action.results));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_results_shown() {
        let mut action = DailyAction::new("Call mom");
        action.set_results("She was happy");
        let output = format_action_list(&[action], "%Y-%m-%d");
        assert!(output.contains("Call mom"));
        assert!(output.contains("Results: She was happy"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_manifestation_list(&[]), "No manifestations yet.");
        assert_eq!(format_action_list(&[], "%Y-%m-%d"), "No daily actions yet.");
    }
}
