//! Service package model.

use serde::Serialize;
use sqlx::FromRow;

use crate::types::DbId;

/// A row from the `packages` table: a sellable service bundle.
///
/// `price` is free-form text, not a number (listings like "₹5000" or
/// "from ₹12,000" are valid). `features` is opaque comma-separated text;
/// the client splits it for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Package {
    pub id: DbId,
    pub title: String,
    pub price: String,
    pub description: String,
    pub features: String,
    pub image_url: String,
}

/// Fields for a new package. `image_url` is resolved by the handler
/// before the insert.
#[derive(Debug, Clone)]
pub struct CreatePackage {
    pub title: String,
    pub price: String,
    pub description: String,
    pub features: String,
    pub image_url: String,
}
