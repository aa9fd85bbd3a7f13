// src/infrastructure/repositories/mongo_article.rs
use super::map_mongo;
use crate::domain::article::{
    Article, ArticleCategory, ArticleContent, ArticleId, ArticleRepository, ArticleTitle,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

const ARTICLE_COLLECTION: &str = "articles";

#[derive(Clone)]
pub struct MongoArticleRepository {
    collection: Collection<ArticleDocument>,
}

impl MongoArticleRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ARTICLE_COLLECTION),
        }
    }
}

/// Stored shape of an article.
#[derive(Debug, Serialize, Deserialize)]
struct ArticleDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    title: String,
    content: String,
    category: String,
    publisher_id: i64,
    publisher_name: String,
}

impl From<NewArticle> for ArticleDocument {
    fn from(article: NewArticle) -> Self {
        Self {
            id: None,
            created_at: article.created_at,
            title: article.title.into(),
            content: article.content.into(),
            category: article.category.into(),
            publisher_id: article.publisher_id.into(),
            publisher_name: article.publisher_name.into(),
        }
    }
}

impl TryFrom<ArticleDocument> for Article {
    type Error = DomainError;

    fn try_from(document: ArticleDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| DomainError::Persistence("article document without _id".into()))?;
        // Stored documents are returned as written, even by other writers.
        Ok(Article {
            id: ArticleId::from(id),
            title: ArticleTitle::from_stored(document.title),
            content: ArticleContent::from_stored(document.content),
            category: ArticleCategory::from_stored(document.category),
            publisher_id: UserId(document.publisher_id),
            publisher_name: Username::from_stored(document.publisher_name),
            created_at: document.created_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for MongoArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let document = self
            .collection
            .find_one(doc! { "_id": *id.as_object_id() })
            .await
            .map_err(map_mongo)?;

        document.map(Article::try_from).transpose()
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let result = self
            .collection
            .insert_one(ArticleDocument::from(article))
            .await
            .map_err(map_mongo)?;

        result
            .inserted_id
            .as_object_id()
            .map(ArticleId::from)
            .ok_or_else(|| DomainError::Persistence("inserted id is not an ObjectId".into()))
    }
}
