// tests/support/mocks/article_repo.rs
use async_trait::async_trait;
use bson::oid::ObjectId;
use inkpot::domain::article::{
    Article, ArticleCategory, ArticleContent, ArticleId, ArticleRepository, ArticleTitle,
    NewArticle,
};
use inkpot::domain::errors::{DomainError, DomainResult};
use inkpot::domain::user::{UserId, Username};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Document store stand-in keyed by ObjectId.
#[derive(Default)]
pub struct InMemoryArticles {
    articles: Mutex<HashMap<ArticleId, Article>>,
    fail_reads: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryArticles {
    /// Seeds one article and returns its hex id.
    pub fn seed(&self, title: &str) -> String {
        let id = ArticleId::from(ObjectId::new());
        let article = Article {
            id,
            title: ArticleTitle::new(title).unwrap(),
            content: ArticleContent::new("body").unwrap(),
            category: ArticleCategory::new("general").unwrap(),
            publisher_id: UserId::new(9).unwrap(),
            publisher_name: Username::new("editor").unwrap(),
            created_at: super::fixed_now(),
        };
        self.articles.lock().unwrap().insert(id, article);
        id.to_hex()
    }

    pub fn get(&self, hex: &str) -> Option<Article> {
        let id = ArticleId::parse(hex).ok()?;
        self.articles.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticles {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("document store unreachable".into()));
        }
        Ok(self.articles.lock().unwrap().get(id).cloned())
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let id = ArticleId::from(ObjectId::new());
        self.articles
            .lock()
            .unwrap()
            .insert(id, article.into_article(id));
        Ok(id)
    }
}
