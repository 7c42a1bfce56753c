#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use content_admin_server::{
    app_state::{AppState, Repositories},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{GeneratedQuestion, Passage, PromptTemplate, QuestionType, Textbook, Unit},
    repositories::{
        GeneratedQuestionRepository, PassageRepository, PromptRepository, QuestionTypeRepository,
        TextbookRepository, UnitRepository,
    },
    services::model_service::QuestionGenerator,
};

pub fn test_config() -> Config {
    Config {
        supabase_url: "http://localhost:54321".to_string(),
        supabase_anon_key: SecretString::from("anon-test-key".to_string()),
        supabase_service_role_key: None,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        cors_allowed_origin: None,
        openai_api_key: None,
        openai_base_url: "http://localhost:9999/v1".to_string(),
        openai_model: "test-model".to_string(),
        passage_placeholder: "passage".to_string(),
        http_timeout_secs: 5,
    }
}

#[derive(Default)]
pub struct InMemoryTextbookRepository {
    pub rows: RwLock<HashMap<String, Textbook>>,
}

#[async_trait]
impl TextbookRepository for InMemoryTextbookRepository {
    async fn find_all(&self) -> AppResult<Vec<Textbook>> {
        let rows = self.rows.read().await;
        let mut items: Vec<_> = rows.values().cloned().collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Textbook>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn create(&self, textbook: Textbook) -> AppResult<Textbook> {
        self.rows
            .write()
            .await
            .insert(textbook.id.clone(), textbook.clone());
        Ok(textbook)
    }

    async fn update(&self, textbook: Textbook) -> AppResult<Textbook> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&textbook.id) {
            return Err(AppError::NotFound("Textbook".to_string()));
        }
        rows.insert(textbook.id.clone(), textbook.clone());
        Ok(textbook)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.rows
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Textbook".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryUnitRepository {
    pub rows: RwLock<HashMap<String, Unit>>,
    /// Updates to these ids fail with a database error.
    pub failing_ids: RwLock<HashSet<String>>,
}

#[async_trait]
impl UnitRepository for InMemoryUnitRepository {
    async fn find_by_textbook(&self, textbook_id: &str) -> AppResult<Vec<Unit>> {
        let mut items: Vec<_> = self
            .rows
            .read()
            .await
            .values()
            .filter(|u| u.textbook_id == textbook_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.order_index.cmp(&b.order_index).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn find_all(&self) -> AppResult<Vec<Unit>> {
        let mut items: Vec<_> = self.rows.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.order_index.cmp(&b.order_index).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Unit>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn create(&self, unit: Unit) -> AppResult<Unit> {
        self.rows.write().await.insert(unit.id.clone(), unit.clone());
        Ok(unit)
    }

    async fn update_order_index(&self, id: &str, order_index: i32) -> AppResult<()> {
        if self.failing_ids.read().await.contains(id) {
            return Err(AppError::DatabaseError(format!("update of unit {} failed", id)));
        }

        let mut rows = self.rows.write().await;
        let unit = rows
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Unit '{}'", id)))?;
        unit.order_index = order_index;
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.rows
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Unit".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryPassageRepository {
    pub rows: RwLock<HashMap<String, Passage>>,
}

#[async_trait]
impl PassageRepository for InMemoryPassageRepository {
    async fn find_all(&self, unit_id: Option<&str>) -> AppResult<Vec<Passage>> {
        let mut items: Vec<_> = self
            .rows
            .read()
            .await
            .values()
            .filter(|p| unit_id.map(|id| p.unit_id.as_deref() == Some(id)).unwrap_or(true))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn find_by_units(&self, unit_ids: &[String]) -> AppResult<Vec<Passage>> {
        let mut items: Vec<_> = self
            .rows
            .read()
            .await
            .values()
            .filter(|p| {
                p.unit_id
                    .as_ref()
                    .map(|id| unit_ids.contains(id))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Passage>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn create(&self, passage: Passage) -> AppResult<Passage> {
        self.rows
            .write()
            .await
            .insert(passage.id.clone(), passage.clone());
        Ok(passage)
    }

    async fn update(&self, passage: Passage) -> AppResult<Passage> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&passage.id) {
            return Err(AppError::NotFound("Passage".to_string()));
        }
        rows.insert(passage.id.clone(), passage.clone());
        Ok(passage)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.rows
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Passage".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryPromptRepository {
    pub rows: RwLock<HashMap<String, PromptTemplate>>,
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn find_all(&self) -> AppResult<Vec<PromptTemplate>> {
        let mut items: Vec<_> = self.rows.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<PromptTemplate>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn create(&self, prompt: PromptTemplate) -> AppResult<PromptTemplate> {
        self.rows
            .write()
            .await
            .insert(prompt.id.clone(), prompt.clone());
        Ok(prompt)
    }

    async fn update(&self, prompt: PromptTemplate) -> AppResult<PromptTemplate> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&prompt.id) {
            return Err(AppError::NotFound("Prompt".to_string()));
        }
        rows.insert(prompt.id.clone(), prompt.clone());
        Ok(prompt)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.rows
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Prompt".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryQuestionTypeRepository {
    pub rows: RwLock<HashMap<String, QuestionType>>,
}

#[async_trait]
impl QuestionTypeRepository for InMemoryQuestionTypeRepository {
    async fn find_all(&self) -> AppResult<Vec<QuestionType>> {
        let mut items: Vec<_> = self.rows.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuestionType>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn create(&self, question_type: QuestionType) -> AppResult<QuestionType> {
        self.rows
            .write()
            .await
            .insert(question_type.id.clone(), question_type.clone());
        Ok(question_type)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.rows
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Question type".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryGeneratedQuestionRepository {
    pub rows: RwLock<HashMap<String, GeneratedQuestion>>,
    pub delete_calls: AtomicUsize,
}

impl InMemoryGeneratedQuestionRepository {
    pub fn delete_call_count(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    async fn remove_where(&self, predicate: impl Fn(&GeneratedQuestion) -> bool) -> u64 {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|_, q| !predicate(q));
        (before - rows.len()) as u64
    }
}

#[async_trait]
impl GeneratedQuestionRepository for InMemoryGeneratedQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<GeneratedQuestion>> {
        let mut items: Vec<_> = self.rows.read().await.values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn find_by_passage(
        &self,
        passage_id: &str,
        question_type_id: Option<&str>,
    ) -> AppResult<Vec<GeneratedQuestion>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|q| q.passage_id == passage_id)
            .filter(|q| {
                question_type_id
                    .map(|id| q.question_type_id == id)
                    .unwrap_or(true)
            })
            .collect())
    }

    async fn create(&self, question: GeneratedQuestion) -> AppResult<GeneratedQuestion> {
        self.rows
            .write()
            .await
            .insert(question.id.clone(), question.clone());
        Ok(question)
    }

    async fn delete_by_passage_and_type(
        &self,
        passage_id: &str,
        question_type_id: &str,
    ) -> AppResult<u64> {
        Ok(self
            .remove_where(|q| q.passage_id == passage_id && q.question_type_id == question_type_id)
            .await)
    }

    async fn delete_by_question_type(&self, question_type_id: &str) -> AppResult<u64> {
        Ok(self
            .remove_where(|q| q.question_type_id == question_type_id)
            .await)
    }

    async fn delete_by_ids(&self, ids: &[String]) -> AppResult<u64> {
        Ok(self.remove_where(|q| ids.contains(&q.id)).await)
    }
}

/// Returns a fixed completion.
pub struct StaticGenerator(pub String);

#[async_trait]
impl QuestionGenerator for StaticGenerator {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

/// In-memory repositories plus the state built on top of them.
#[derive(Default)]
pub struct TestStore {
    pub textbooks: Arc<InMemoryTextbookRepository>,
    pub units: Arc<InMemoryUnitRepository>,
    pub passages: Arc<InMemoryPassageRepository>,
    pub prompts: Arc<InMemoryPromptRepository>,
    pub question_types: Arc<InMemoryQuestionTypeRepository>,
    pub generated_questions: Arc<InMemoryGeneratedQuestionRepository>,
}

impl TestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            textbooks: self.textbooks.clone(),
            units: self.units.clone(),
            passages: self.passages.clone(),
            prompts: self.prompts.clone(),
            question_types: self.question_types.clone(),
            generated_questions: self.generated_questions.clone(),
        }
    }

    pub fn state(&self) -> AppState {
        self.state_with_generator(Arc::new(StaticGenerator(
            r#"{ "question": "What is the main idea?", "answer": "Foxes are quick." }"#.to_string(),
        )))
    }

    pub fn state_with_generator(&self, generator: Arc<dyn QuestionGenerator>) -> AppState {
        AppState::from_parts(self.repositories(), generator, test_config())
    }

    pub async fn seed_unit(&self, id: &str, parent: Option<&str>, order_index: i32) -> Unit {
        let unit = Unit {
            id: id.to_string(),
            textbook_id: "tb-1".to_string(),
            parent_id: parent.map(str::to_string),
            title: format!("Unit {}", id),
            order_index,
            created_at: None,
        };
        self.units.create(unit.clone()).await.unwrap();
        unit
    }

    pub async fn seed_textbook(&self, id: &str) -> Textbook {
        let textbook = Textbook {
            id: id.to_string(),
            title: format!("Textbook {}", id),
            description: None,
            created_at: None,
        };
        self.textbooks.create(textbook.clone()).await.unwrap();
        textbook
    }

    pub async fn seed_passage(&self, id: &str, unit_id: Option<&str>, content: &str) -> Passage {
        let passage = Passage {
            id: id.to_string(),
            unit_id: unit_id.map(str::to_string),
            title: Some(format!("Passage {}", id)),
            content: content.to_string(),
            created_at: None,
        };
        self.passages.create(passage.clone()).await.unwrap();
        passage
    }

    pub async fn seed_prompt(&self, id: &str, prompt: &str) -> PromptTemplate {
        let template = PromptTemplate {
            id: id.to_string(),
            label: format!("Prompt {}", id),
            prompt: prompt.to_string(),
            created_at: None,
        };
        self.prompts.create(template.clone()).await.unwrap();
        template
    }

    pub async fn seed_question_type(&self, id: &str, prompt_id: &str) -> QuestionType {
        let question_type = QuestionType {
            id: id.to_string(),
            name: format!("Type {}", id),
            prompt_id: prompt_id.to_string(),
            description: None,
            created_at: None,
        };
        self.question_types
            .create(question_type.clone())
            .await
            .unwrap();
        question_type
    }

    pub async fn seed_question(
        &self,
        id: &str,
        passage_id: &str,
        question_type_id: &str,
        data: serde_json::Value,
    ) -> GeneratedQuestion {
        let mut question = GeneratedQuestion::new(passage_id, question_type_id, data);
        question.id = id.to_string();
        self.generated_questions
            .create(question.clone())
            .await
            .unwrap();
        question
    }
}
