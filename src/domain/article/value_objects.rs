// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use bson::oid::ObjectId;
use std::fmt;

/// Identifier assigned by the document store. Crosses the boundary as its
/// 24 character hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(ObjectId);

impl ArticleId {
    pub fn parse(value: &str) -> DomainResult<Self> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|err| DomainError::InvalidId(format!("{value:?} is not an article id: {err}")))
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl From<ObjectId> for ArticleId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for ObjectId {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

macro_rules! non_empty_text {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.is_empty() {
                    return Err(DomainError::Validation(concat!($label, " cannot be empty").into()));
                }
                Ok(Self(value))
            }

            /// Wraps a value read back from the store as-is.
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

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_text!(ArticleTitle, "title");
non_empty_text!(ArticleContent, "content");
non_empty_text!(ArticleCategory, "category");
