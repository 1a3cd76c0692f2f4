//! Completed-interview history: filtering and summary statistics.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CompletedInterview, InterviewCategory};
use crate::domain::ports::SessionStore;

pub use crate::domain::models::{duration_label, relative_date_label};

/// Aggregate view over a set of completed interviews
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    /// Completed interviews counted
    pub count: usize,
    /// Mean over scored interviews
    pub average_score: Option<f64>,
    /// Highest score seen
    pub best_score: Option<u8>,
    /// Interview count per category
    pub by_category: BTreeMap<InterviewCategory, usize>,
}

/// Keeps only `category`, or everything when `None`.
pub fn filter_by_category(
    items: &[CompletedInterview],
    category: InterviewCategory,
) -> Vec<CompletedInterview> {
    items
        .iter()
        .filter(|item| item.session.category == category)
        .cloned()
        .collect()
}

/// Aggregate figures over completed interviews.
pub fn summarize(items: &[CompletedInterview]) -> HistorySummary {
    let scores: Vec<u8> = items.iter().filter_map(|item| item.session.score).collect();

    let average_score = if scores.is_empty() {
        None
    } else {
        let total: u32 = scores.iter().map(|&s| u32::from(s)).sum();
        Some(f64::from(total) / scores.len() as f64)
    };

    let mut by_category = BTreeMap::new();
    for item in items {
        *by_category.entry(item.session.category).or_insert(0) += 1;
    }

    HistorySummary {
        count: items.len(),
        average_score,
        best_score: scores.iter().copied().max(),
        by_category,
    }
}

/// Read-side view over completed interviews.
pub struct HistoryService {
    store: Arc<dyn SessionStore>,
}

impl HistoryService {
    /// Service reading from `store`.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Completed interviews for `owner_id`, oldest first, optionally narrowed
    /// to one category.
    pub async fn completed(
        &self,
        owner_id: &str,
        category: Option<InterviewCategory>,
    ) -> DomainResult<Vec<CompletedInterview>> {
        let items = self.store.list_completed(owner_id).await?;
        Ok(match category {
            Some(category) => filter_by_category(&items, category),
            None => items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{InterviewSession, InterviewStatus};
    use chrono::Utc;

    fn completed(category: InterviewCategory, score: u8) -> CompletedInterview {
        let mut session = InterviewSession::new(category, "alice");
        session.apply_status(InterviewStatus::Completed, || score).unwrap();
        CompletedInterview::annotate(session, Utc::now())
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_score, None);
        assert_eq!(summary.best_score, None);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_summarize_scores_and_categories() {
        let items = vec![
            completed(InterviewCategory::Technical, 80),
            completed(InterviewCategory::Technical, 95),
            completed(InterviewCategory::Behavioral, 86),
        ];
        let summary = summarize(&items);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.best_score, Some(95));
        assert!((summary.average_score.unwrap() - 87.0).abs() < f64::EPSILON);
        assert_eq!(summary.by_category[&InterviewCategory::Technical], 2);
        assert_eq!(summary.by_category[&InterviewCategory::Behavioral], 1);
        assert!(!summary.by_category.contains_key(&InterviewCategory::Industry));
    }

    #[test]
    fn test_filter_by_category() {
        let items = vec![
            completed(InterviewCategory::Industry, 90),
            completed(InterviewCategory::Technical, 81),
        ];
        let industry = filter_by_category(&items, InterviewCategory::Industry);
        assert_eq!(industry.len(), 1);
        assert_eq!(industry[0].session.score, Some(90));
    }
}
