// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profiles, vote and upload counters)
//! - Photos (submissions, vote ledgers, moderation state)
//! - Monthly themes and the global settings document
//!
//! Every operation that touches more than one document runs in a Firestore
//! transaction. The rule deciding the new state is passed in as a closure so
//! this layer stays free of contest logic.

use crate::db::collections;
use crate::error::AppError;
use crate::models::photo::{PhotoFlags, PhotoStub};
use crate::models::{AppSettings, MonthlyTheme, Photo, Role, User};
use crate::period::{now_rfc3339, MonthPeriod};
use crate::services::SweepPlan;
use futures_util::{stream, StreamExt};

const MAX_CONCURRENT_DB_OPS: usize = 50;
// Firestore limits batch/transaction writes to 500 operations.
// We use a safe limit of 400 to allow headroom.
const BATCH_SIZE: usize = 400;

/// Approved and pending photo totals across all periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModerationCounts {
    pub approved: u32,
    pub pending: u32,
}

impl ModerationCounts {
    pub fn from_flags(flags: &[PhotoFlags]) -> Self {
        let pending = flags.iter().filter(|f| f.pending).count() as u32;
        Self {
            approved: flags.len() as u32 - pending,
            pending,
        }
    }
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user profile by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        let user: Option<User> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(user.map(|mut u| {
            u.id = user_id.to_string();
            u
        }))
    }

    /// Fetch the profile for a signed-in user, creating it on first sign-in.
    ///
    /// The profile is written with create-only semantics so an existing
    /// document is never overwritten.
    pub async fn get_or_create_user(
        &self,
        user_id: &str,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<User, AppError> {
        if let Some(user) = self.get_user(user_id).await? {
            return Ok(user);
        }

        let user = User::new(user_id, name, email, role, &now_rfc3339());
        let created: Result<User, _> = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::USERS)
            .document_id(user_id)
            .object(&user)
            .execute()
            .await;

        match created {
            Ok(_) => {
                tracing::info!(user_id, role = ?role, "Created user profile");
                Ok(user)
            }
            // A concurrent first request created it; use the stored profile.
            Err(e) => self
                .get_user(user_id)
                .await?
                .ok_or_else(|| AppError::Database(format!("Failed to create user: {}", e))),
        }
    }

    /// Read a user, apply `apply`, and write it back atomically.
    ///
    /// Used for profile edits and counter resets so concurrent votes and
    /// uploads are never overwritten with stale values.
    pub async fn modify_user<F>(&self, user_id: &str, apply: F) -> Result<User, AppError>
    where
        F: FnOnce(&mut User) -> Result<(), AppError>,
    {
        let client = self.get_client()?;
        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        let reader = client.clone_with_consistency_selector(
            firestore::FirestoreConsistencySelector::Transaction(
                transaction.transaction_id().clone(),
            ),
        );

        let user: Option<User> = reader
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to read user in transaction: {}", e)))?;

        let Some(mut user) = user else {
            let _ = transaction.rollback().await;
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        };
        user.id = user_id.to_string();

        if let Err(e) = apply(&mut user) {
            let _ = transaction.rollback().await;
            return Err(e);
        }

        client
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(user_id)
            .object(&user)
            .add_to_transaction(&mut transaction)
            .map_err(|e| AppError::Database(format!("Failed to add user to transaction: {}", e)))?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        Ok(user)
    }

    // ─── Photo Queries ───────────────────────────────────────────

    /// Get a photo by ID.
    pub async fn get_photo(&self, photo_id: &str) -> Result<Option<Photo>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::PHOTOS)
            .obj()
            .one(photo_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All photos submitted during `period`, pending ones included.
    pub async fn list_photos_for_period(&self, period: MonthPeriod) -> Result<Vec<Photo>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::PHOTOS)
            .filter(move |q| {
                q.for_all([
                    q.field("month").eq(period.month),
                    q.field("year").eq(period.year),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All photos owned by a user, newest first.
    pub async fn list_photos_for_user(&self, user_id: &str) -> Result<Vec<Photo>, AppError> {
        let mut photos: Vec<Photo> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::PHOTOS)
            .filter(|q| q.field("userID").eq(user_id))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        photos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(photos)
    }

    /// Photos awaiting approval, oldest first.
    pub async fn list_pending_photos(&self) -> Result<Vec<Photo>, AppError> {
        let mut photos: Vec<Photo> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::PHOTOS)
            .filter(|q| q.field("pending").eq(true))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        photos.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(photos)
    }

    /// Owner and upload time of every photo, without image payloads.
    pub async fn list_photo_stubs(&self) -> Result<Vec<PhotoStub>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .fields(["userID", "createdAt"])
            .from(collections::PHOTOS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count approved and pending photos across the whole collection.
    pub async fn count_photos_by_state(&self) -> Result<ModerationCounts, AppError> {
        let flags: Vec<PhotoFlags> = self
            .get_client()?
            .fluent()
            .select()
            .fields(["pending"])
            .from(collections::PHOTOS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(ModerationCounts::from_flags(&flags))
    }

    // ─── Transactional Photo Operations ──────────────────────────

    /// Create a photo for `user_id` and update the uploader's profile atomically.
    ///
    /// `build` receives the uploader's profile and the current settings as read
    /// inside the transaction, plus a freshly generated document ID, and
    /// returns the photo to store. Returning an error aborts without writing.
    pub async fn create_photo<F>(&self, user_id: &str, build: F) -> Result<Photo, AppError>
    where
        F: FnOnce(&mut User, &AppSettings, &str) -> Result<Photo, AppError>,
    {
        let client = self.get_client()?;
        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        // Reads through this handle are registered with the transaction for
        // conflict detection.
        let reader = client.clone_with_consistency_selector(
            firestore::FirestoreConsistencySelector::Transaction(
                transaction.transaction_id().clone(),
            ),
        );

        let user: Option<User> = reader
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to read user in transaction: {}", e)))?;

        let Some(mut user) = user else {
            let _ = transaction.rollback().await;
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        };
        user.id = user_id.to_string();

        let settings: Option<AppSettings> = reader
            .fluent()
            .select()
            .by_id_in(collections::APP_SETTINGS)
            .obj()
            .one(collections::CONFIG_DOC_ID)
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to read settings in transaction: {}", e))
            })?;
        let settings = settings.unwrap_or_default();

        let photo_id = uuid::Uuid::new_v4().simple().to_string();
        let photo = match build(&mut user, &settings, &photo_id) {
            Ok(photo) => photo,
            Err(e) => {
                let _ = transaction.rollback().await;
                return Err(e);
            }
        };

        client
            .fluent()
            .update()
            .in_col(collections::PHOTOS)
            .document_id(&photo.id)
            .object(&photo)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add photo to transaction: {}", e))
            })?;

        client
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.id)
            .object(&user)
            .add_to_transaction(&mut transaction)
            .map_err(|e| AppError::Database(format!("Failed to add user to transaction: {}", e)))?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        tracing::info!(
            user_id,
            photo_id = %photo.id,
            pending = photo.pending,
            uploaded = user.photos_uploaded_base64,
            "Photo created"
        );

        Ok(photo)
    }

    /// Read a photo and a user, apply `apply`, and write both back atomically.
    ///
    /// Used for vote toggles, where the photo's ledger and the voter's
    /// counters must change together.
    pub async fn modify_photo_and_user<T, F>(
        &self,
        photo_id: &str,
        user_id: &str,
        apply: F,
    ) -> Result<T, AppError>
    where
        F: FnOnce(&mut Photo, &mut User) -> Result<T, AppError>,
    {
        let client = self.get_client()?;
        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        let reader = client.clone_with_consistency_selector(
            firestore::FirestoreConsistencySelector::Transaction(
                transaction.transaction_id().clone(),
            ),
        );

        let photo: Option<Photo> = reader
            .fluent()
            .select()
            .by_id_in(collections::PHOTOS)
            .obj()
            .one(photo_id)
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to read photo in transaction: {}", e))
            })?;

        let user: Option<User> = reader
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to read user in transaction: {}", e)))?;

        let (mut photo, mut user) = match (photo, user) {
            (Some(photo), Some(user)) => (photo, user),
            (None, _) => {
                let _ = transaction.rollback().await;
                return Err(AppError::NotFound(format!("Photo {} not found", photo_id)));
            }
            (_, None) => {
                let _ = transaction.rollback().await;
                return Err(AppError::NotFound(format!("User {} not found", user_id)));
            }
        };
        photo.id = photo_id.to_string();
        user.id = user_id.to_string();

        let result = match apply(&mut photo, &mut user) {
            Ok(result) => result,
            Err(e) => {
                let _ = transaction.rollback().await;
                return Err(e);
            }
        };

        client
            .fluent()
            .update()
            .in_col(collections::PHOTOS)
            .document_id(photo_id)
            .object(&photo)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add photo to transaction: {}", e))
            })?;

        client
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(user_id)
            .object(&user)
            .add_to_transaction(&mut transaction)
            .map_err(|e| AppError::Database(format!("Failed to add user to transaction: {}", e)))?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        Ok(result)
    }

    /// Read a single photo, apply `apply`, and write it back atomically.
    pub async fn modify_photo<F>(&self, photo_id: &str, apply: F) -> Result<Photo, AppError>
    where
        F: FnOnce(&mut Photo) -> Result<(), AppError>,
    {
        let client = self.get_client()?;
        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        let reader = client.clone_with_consistency_selector(
            firestore::FirestoreConsistencySelector::Transaction(
                transaction.transaction_id().clone(),
            ),
        );

        let photo: Option<Photo> = reader
            .fluent()
            .select()
            .by_id_in(collections::PHOTOS)
            .obj()
            .one(photo_id)
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to read photo in transaction: {}", e))
            })?;

        let Some(mut photo) = photo else {
            let _ = transaction.rollback().await;
            return Err(AppError::NotFound(format!("Photo {} not found", photo_id)));
        };
        photo.id = photo_id.to_string();

        if let Err(e) = apply(&mut photo) {
            let _ = transaction.rollback().await;
            return Err(e);
        }

        client
            .fluent()
            .update()
            .in_col(collections::PHOTOS)
            .document_id(photo_id)
            .object(&photo)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add photo to transaction: {}", e))
            })?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        Ok(photo)
    }

    /// Delete a photo and decrement its owner's upload counter atomically.
    ///
    /// `authorize` sees the photo before anything is written; an error aborts
    /// the deletion. A missing owner profile (deleted account) is skipped.
    pub async fn delete_photo<F>(&self, photo_id: &str, authorize: F) -> Result<Photo, AppError>
    where
        F: FnOnce(&Photo) -> Result<(), AppError>,
    {
        let client = self.get_client()?;
        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        let reader = client.clone_with_consistency_selector(
            firestore::FirestoreConsistencySelector::Transaction(
                transaction.transaction_id().clone(),
            ),
        );

        let photo: Option<Photo> = reader
            .fluent()
            .select()
            .by_id_in(collections::PHOTOS)
            .obj()
            .one(photo_id)
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to read photo in transaction: {}", e))
            })?;

        let Some(mut photo) = photo else {
            let _ = transaction.rollback().await;
            return Err(AppError::NotFound(format!("Photo {} not found", photo_id)));
        };
        photo.id = photo_id.to_string();

        if let Err(e) = authorize(&photo) {
            let _ = transaction.rollback().await;
            return Err(e);
        }

        let owner: Option<User> = reader
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(&photo.user_id)
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to read owner in transaction: {}", e))
            })?;

        client
            .fluent()
            .delete()
            .from(collections::PHOTOS)
            .document_id(photo_id)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add deletion to transaction: {}", e))
            })?;

        if let Some(mut owner) = owner {
            owner.photos_uploaded_base64 = owner.photos_uploaded_base64.saturating_sub(1);
            client
                .fluent()
                .update()
                .in_col(collections::USERS)
                .document_id(&photo.user_id)
                .object(&owner)
                .add_to_transaction(&mut transaction)
                .map_err(|e| {
                    AppError::Database(format!("Failed to add owner to transaction: {}", e))
                })?;
        }

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        tracing::info!(photo_id, owner = %photo.user_id, "Photo deleted");
        Ok(photo)
    }

    // ─── Theme & Settings ────────────────────────────────────────

    /// Get the theme for a period, if an admin has set one.
    pub async fn get_theme(&self, period: MonthPeriod) -> Result<Option<MonthlyTheme>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::MONTHLY_THEMES)
            .obj()
            .one(&period.key())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or replace the theme for its period.
    pub async fn set_theme(&self, theme: &MonthlyTheme) -> Result<(), AppError> {
        let key = MonthPeriod::new(theme.year, theme.month)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid month {}", theme.month)))?
            .key();

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::MONTHLY_THEMES)
            .document_id(&key)
            .object(theme)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get the settings document, defaulting when absent.
    pub async fn get_settings(&self) -> Result<AppSettings, AppError> {
        let settings: Option<AppSettings> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::APP_SETTINGS)
            .obj()
            .one(collections::CONFIG_DOC_ID)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(settings.unwrap_or_default())
    }

    pub async fn set_settings(&self, settings: &AppSettings) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::APP_SETTINGS)
            .document_id(collections::CONFIG_DOC_ID)
            .object(settings)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Limit Sweep ─────────────────────────────────────────────

    /// Apply a sweep plan: delete the excess photos in transactional batches,
    /// then reset each affected owner's upload counter.
    pub async fn apply_sweep(&self, plan: &SweepPlan) -> Result<(), AppError> {
        self.batch_delete(&plan.deletions, collections::PHOTOS, |id: &String| {
            id.clone()
        })
        .await?;

        stream::iter(plan.retained.clone())
            .map(|(user_id, retained)| async move {
                let reset = self
                    .modify_user(&user_id, |user| {
                        user.photos_uploaded_base64 = retained;
                        Ok(())
                    })
                    .await;
                match reset {
                    // Owner deleted their account in the meantime.
                    Ok(_) | Err(AppError::NotFound(_)) => Ok(()),
                    Err(e) => Err(e),
                }
            })
            .buffer_unordered(MAX_CONCURRENT_DB_OPS)
            .collect::<Vec<Result<(), AppError>>>()
            .await
            .into_iter()
            .collect::<Result<Vec<()>, AppError>>()?;

        tracing::info!(
            photos_deleted = plan.deletions.len(),
            users_affected = plan.retained.len(),
            "Photo limit sweep applied"
        );

        Ok(())
    }

    // ─── Helper Methods ────────────────────────────────────────────

    /// Helper to batch delete documents using transactions.
    async fn batch_delete<T, F>(
        &self,
        items: &[T],
        collection: &str,
        id_extractor: F,
    ) -> Result<(), AppError>
    where
        F: Fn(&T) -> String,
    {
        let client = self.get_client()?;

        for chunk in items.chunks(BATCH_SIZE) {
            let mut transaction = client
                .begin_transaction()
                .await
                .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

            for item in chunk {
                let doc_id = id_extractor(item);
                client
                    .fluent()
                    .delete()
                    .from(collection)
                    .document_id(&doc_id)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        AppError::Database(format!(
                            "Failed to add deletion to transaction for {}: {}",
                            collection, e
                        ))
                    })?;
            }

            transaction.commit().await.map_err(|e| {
                AppError::Database(format!("Failed to commit batch deletion: {}", e))
            })?;
        }

        Ok(())
    }

    // ─── Account Deletion ──────────────────────────────────────────

    /// Delete a user's profile and every photo they own.
    ///
    /// Votes the user cast on other photos are left in place.
    ///
    /// Returns the number of documents deleted.
    pub async fn delete_user_data(&self, user_id: &str) -> Result<usize, AppError> {
        let photos: Vec<PhotoStub> = self
            .get_client()?
            .fluent()
            .select()
            .fields(["userID", "createdAt"])
            .from(collections::PHOTOS)
            .filter(|q| q.field("userID").eq(user_id))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let count = photos.len();
        self.batch_delete(&photos, collections::PHOTOS, |photo: &PhotoStub| {
            photo.id.clone()
        })
        .await?;
        tracing::debug!(user_id, count, "Deleted photos");

        self.get_client()?
            .fluent()
            .delete()
            .from(collections::USERS)
            .document_id(user_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        tracing::debug!(user_id, "Deleted user profile");

        let deleted_count = count + 1;
        tracing::info!(user_id, deleted_count, "User data deletion complete");

        Ok(deleted_count)
    }
}
