// src/infrastructure/mongo.rs
//! MongoDB connection bootstrap.

use bson::doc;
use mongodb::{Client, Database};
use tracing::info;

/// Connects and pings the database.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    info!(db_name, "connecting to MongoDB");

    let client = Client::with_uri_str(with_timeouts(uri)).await?;
    let database = client.database(db_name);
    database.run_command(doc! { "ping": 1 }).await?;

    info!(db_name, "connected to MongoDB");
    Ok(database)
}

/// Appends short server selection and connect timeouts to a connection string.
fn with_timeouts(uri: &str) -> String {
    const TIMEOUTS: &str = "serverSelectionTimeoutMS=3000&connectTimeoutMS=3000";
    if uri.contains('?') {
        return format!("{uri}&{TIMEOUTS}");
    }
    let host_part = uri.split_once("://").map_or(uri, |(_, rest)| rest);
    if host_part.contains('/') {
        format!("{uri}?{TIMEOUTS}")
    } else {
        format!("{uri}/?{TIMEOUTS}")
    }
}
