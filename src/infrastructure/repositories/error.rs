// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_LIKES_PKEY: &str = "likes_pkey";
const CNT_LIKES_COMMENT: &str = "likes_comment_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_LIKES_PKEY => DomainError::Conflict("comment already liked".into()),
                    CNT_LIKES_COMMENT => DomainError::NotFound("comment not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn map_mongo(err: mongodb::error::Error) -> DomainError {
    DomainError::Persistence(format!("document store: {err}"))
}
