use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use crate::{
    errors::AppResult,
    models::{domain::GeneratedQuestion, dto::response::DedupeReport},
    repositories::GeneratedQuestionRepository,
};

pub struct GeneratedQuestionService {
    repository: Arc<dyn GeneratedQuestionRepository>,
}

/// Newest first: `created_at` descending, ties broken by id descending.
fn newest_first(a: &GeneratedQuestion, b: &GeneratedQuestion) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// Ids of every duplicate except the newest copy, plus the number of groups
/// that had duplicates. Duplicates share passage, question type and content.
pub fn find_duplicates(questions: Vec<GeneratedQuestion>) -> (Vec<String>, usize) {
    let mut groups: HashMap<(String, String, String), Vec<GeneratedQuestion>> = HashMap::new();
    for question in questions {
        let key = (
            question.passage_id.clone(),
            question.question_type_id.clone(),
            question.fingerprint(),
        );
        groups.entry(key).or_default().push(question);
    }

    let mut removed = Vec::new();
    let mut duplicate_groups = 0;
    for (_, mut group) in groups {
        if group.len() < 2 {
            continue;
        }
        duplicate_groups += 1;
        group.sort_by(newest_first);
        removed.extend(group.into_iter().skip(1).map(|q| q.id));
    }

    removed.sort();
    (removed, duplicate_groups)
}

impl GeneratedQuestionService {
    pub fn new(repository: Arc<dyn GeneratedQuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> AppResult<Vec<GeneratedQuestion>> {
        self.repository.find_all().await
    }

    pub async fn list_for_passage(
        &self,
        passage_id: &str,
        question_type_id: Option<&str>,
    ) -> AppResult<Vec<GeneratedQuestion>> {
        self.repository
            .find_by_passage(passage_id, question_type_id)
            .await
    }

    pub async fn save(&self, question: GeneratedQuestion) -> AppResult<GeneratedQuestion> {
        self.repository.create(question).await
    }

    pub async fn delete_by_passage(
        &self,
        passage_id: &str,
        question_type_id: &str,
    ) -> AppResult<u64> {
        let deleted = self
            .repository
            .delete_by_passage_and_type(passage_id, question_type_id)
            .await?;
        log::info!(
            "Deleted {} generated questions for passage {} / question type {}",
            deleted,
            passage_id,
            question_type_id
        );
        Ok(deleted)
    }

    /// Removes duplicate generated questions, keeping the newest of each group.
    pub async fn dedupe(&self, dry_run: bool) -> AppResult<DedupeReport> {
        let questions = self.repository.find_all().await?;
        let scanned = questions.len();
        let (removed_ids, duplicate_groups) = find_duplicates(questions);

        if !dry_run && !removed_ids.is_empty() {
            let deleted = self.repository.delete_by_ids(&removed_ids).await?;
            log::info!(
                "Removed {} duplicate generated questions across {} groups",
                deleted,
                duplicate_groups
            );
        }

        Ok(DedupeReport {
            scanned,
            duplicate_groups,
            removed_ids,
            dry_run,
        })
    }
}
