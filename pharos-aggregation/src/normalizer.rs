//! Flattens heterogeneous suggestion payload entries into uniform records.

use pharos_core::models::{Issue, Suggestion, SuggestionIssue};

/// Build the flat record for one payload issue.
///
/// Selector and markup come from the first occurrence; absent optional
/// fields default to empty strings rather than failing the pass.
pub fn normalize_issue(suggestion: &Suggestion, issue: &SuggestionIssue) -> Issue {
    let first = issue.html_with_issues.first();
    Issue {
        issue_name: issue.issue_type.clone(),
        suggestion_id: suggestion.id.clone(),
        target_selector: first.map(|o| o.target_selector.clone()).unwrap_or_default(),
        faulty_line: first.map(|o| o.update_from.clone()).unwrap_or_default(),
        issue_description: issue.description.clone(),
        url: suggestion.data.url.clone(),
    }
}
