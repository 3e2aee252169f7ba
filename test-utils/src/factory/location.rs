//! Location factory for creating test location entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with customizable fields.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    province: String,
    country: String,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Location {id}"` where id is auto-incremented
    /// - province: `"Test Province"`
    /// - country: `"Test Country"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Location {}", id),
            province: "Test Province".to_string(),
            country: "Test Country".to_string(),
        }
    }

    /// Sets the location name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the province.
    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = province.into();
        self
    }

    /// Sets the country.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Builds and inserts the location entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::location::Model)` - Created location entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            province: ActiveValue::Set(self.province),
            country: ActiveValue::Set(self.country),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
