// src/domain/comment/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<CommentContent> for String {
    fn from(value: CommentContent) -> Self {
        value.0
    }
}

/// One-based page window over an article's comments.
///
/// `page == 0` only arises from [`CommentPage::clamp_to`] on an article
/// without comments and addresses no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPage {
    limit: u32,
    page: u32,
}

impl CommentPage {
    pub fn new(limit: u32, page: u32) -> DomainResult<Self> {
        if limit == 0 {
            return Err(DomainError::Validation("limit must be positive".into()));
        }
        if page == 0 {
            return Err(DomainError::Validation("page must be positive".into()));
        }
        Ok(Self { limit, page })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_empty(&self) -> bool {
        self.page == 0
    }

    /// Last page that holds any of `total` comments, `0` when there are none.
    pub fn max_page(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.limit))
    }

    /// Pulls an overshooting page back to the last one. Never moves upward.
    #[must_use]
    pub fn clamp_to(self, total: u64) -> Self {
        let max_page = self.max_page(total);
        if u64::from(self.page) > max_page {
            // max_page < page <= u32::MAX here, so the narrowing is lossless
            let page = u32::try_from(max_page).unwrap_or(self.page);
            Self { page, ..self }
        } else {
            self
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}
