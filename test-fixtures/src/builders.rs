//! Builders for suggestion payloads.

use pharos_core::models::{
    MarkupOccurrence, Suggestion, SuggestionData, SuggestionIssue, SuggestionStatus,
};

/// Fluent builder for test suggestions.
pub struct SuggestionBuilder {
    suggestion: Suggestion,
}

impl SuggestionBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            suggestion: Suggestion {
                id: id.to_string(),
                opportunity_id: "opp-1".to_string(),
                status: SuggestionStatus::New,
                data: SuggestionData::default(),
            },
        }
    }

    pub fn opportunity(mut self, opportunity_id: &str) -> Self {
        self.suggestion.opportunity_id = opportunity_id.to_string();
        self
    }

    pub fn status(mut self, status: SuggestionStatus) -> Self {
        self.suggestion.status = status;
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.suggestion.data.url = url.to_string();
        self
    }

    pub fn source(mut self, source: &str) -> Self {
        self.suggestion.data.source = Some(source.to_string());
        self
    }

    /// Append an issue with one markup occurrence.
    pub fn issue(mut self, issue_type: &str, selector: &str, markup: &str) -> Self {
        self.suggestion.data.issues.push(SuggestionIssue {
            issue_type: issue_type.to_string(),
            description: format!("{issue_type} detected"),
            html_with_issues: vec![MarkupOccurrence {
                update_from: markup.to_string(),
                target_selector: selector.to_string(),
                guidance: None,
            }],
        });
        self
    }

    /// Append an issue whose first occurrence already carries guidance.
    pub fn resolved_issue(
        mut self,
        issue_type: &str,
        selector: &str,
        markup: &str,
        guidance: serde_json::Value,
    ) -> Self {
        self.suggestion.data.issues.push(SuggestionIssue {
            issue_type: issue_type.to_string(),
            description: format!("{issue_type} detected"),
            html_with_issues: vec![MarkupOccurrence {
                update_from: markup.to_string(),
                target_selector: selector.to_string(),
                guidance: Some(guidance),
            }],
        });
        self
    }

    pub fn build(self) -> Suggestion {
        self.suggestion
    }
}
