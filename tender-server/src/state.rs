use {
    crate::{
        access,
        api::RestError,
        kernel::{
            db::DB,
            document_store::DocumentStore,
        },
        models,
        tender,
    },
    axum_prometheus::metrics_exporter_prometheus::PrometheusHandle,
    base64::{
        engine::general_purpose::URL_SAFE_NO_PAD,
        Engine,
    },
    rand::Rng,
    std::{
        collections::HashMap,
        sync::Arc,
    },
    tender_api_types::profile::CreateProfile,
    tokio::sync::RwLock,
    uuid::Uuid,
};

pub struct Store {
    pub db:               DB,
    pub access_tokens:    RwLock<HashMap<models::AccessTokenToken, models::Profile>>,
    pub metrics_recorder: PrometheusHandle,
}

pub struct StoreNew {
    pub store:          Arc<Store>,
    pub tender_service: tender::service::Service,
    pub access_service: access::service::Service,
    pub document_store: Arc<dyn DocumentStore>,
}

fn generate_access_token() -> models::AccessTokenToken {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

impl Store {
    pub async fn create_profile(
        &self,
        create_profile: CreateProfile,
    ) -> Result<models::Profile, RestError> {
        let email: models::EmailAddress = create_profile
            .email
            .try_into()
            .map_err(|_| RestError::BadParameters("Invalid email".to_string()))?;
        if create_profile.address.trim().is_empty() {
            return Err(RestError::BadParameters(
                "Address must not be empty".to_string(),
            ));
        }
        let profile = models::Profile {
            id: Uuid::new_v4(),
            name: create_profile.name,
            email,
            address: create_profile.address,
        };
        sqlx::query("INSERT INTO profile (id, name, email, address) VALUES ($1, $2, $3, $4)")
            .bind(profile.id)
            .bind(&profile.name)
            .bind(profile.email.0.as_str())
            .bind(&profile.address)
            .execute(&self.db)
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .is_some_and(|db_error| db_error.is_unique_violation())
                {
                    return RestError::BadParameters(
                        "A profile with this email or address already exists".to_string(),
                    );
                }
                tracing::error!(error = e.to_string(), "DB: Failed to insert profile");
                RestError::TemporarilyUnavailable
            })?;
        Ok(profile)
    }

    pub async fn get_profile_by_email(
        &self,
        email: &models::EmailAddress,
    ) -> Result<Option<models::Profile>, RestError> {
        let row = sqlx::query_as::<_, models::ProfileRow>(
            "SELECT id, name, email, address FROM profile WHERE email = $1",
        )
        .bind(email.0.as_str())
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), "DB: Failed to fetch profile");
            RestError::TemporarilyUnavailable
        })?;
        row.map(|row| {
            row.get_profile().map_err(|e| {
                tracing::error!(error = e.to_string(), "Failed to convert profile row");
                RestError::TemporarilyUnavailable
            })
        })
        .transpose()
    }

    pub async fn get_profile(
        &self,
        profile_id: models::ProfileId,
    ) -> Result<Option<models::Profile>, RestError> {
        let row = sqlx::query_as::<_, models::ProfileRow>(
            "SELECT id, name, email, address FROM profile WHERE id = $1",
        )
        .bind(profile_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), "DB: Failed to fetch profile");
            RestError::TemporarilyUnavailable
        })?;
        row.map(|row| {
            row.get_profile().map_err(|e| {
                tracing::error!(error = e.to_string(), "Failed to convert profile row");
                RestError::TemporarilyUnavailable
            })
        })
        .transpose()
    }

    /// Returns the profile's live access token, minting one if none exists.
    /// The boolean is true when a new token was created.
    pub async fn get_or_create_access_token(
        &self,
        profile_id: models::ProfileId,
    ) -> Result<(models::AccessToken, bool), RestError> {
        let profile = self
            .get_profile(profile_id)
            .await?
            .ok_or(RestError::ProfileNotFound)?;
        let existing = sqlx::query_as::<_, models::AccessToken>(
            "SELECT id, profile_id, token FROM access_token WHERE profile_id = $1 AND revoked_at IS NULL",
        )
        .bind(profile_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), "DB: Failed to fetch access token");
            RestError::TemporarilyUnavailable
        })?;
        if let Some(token) = existing {
            return Ok((token, false));
        }

        let token = models::AccessToken {
            id:         Uuid::new_v4(),
            profile_id,
            token:      generate_access_token(),
        };
        sqlx::query("INSERT INTO access_token (id, profile_id, token) VALUES ($1, $2, $3)")
            .bind(token.id)
            .bind(token.profile_id)
            .bind(&token.token)
            .execute(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = e.to_string(), "DB: Failed to insert access token");
                RestError::TemporarilyUnavailable
            })?;
        self.access_tokens
            .write()
            .await
            .insert(token.token.clone(), profile);
        Ok((token, true))
    }

    pub async fn revoke_access_token(
        &self,
        token: &models::AccessTokenToken,
    ) -> Result<(), RestError> {
        sqlx::query("UPDATE access_token SET revoked_at = now() WHERE token = $1")
            .bind(token)
            .execute(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = e.to_string(), "DB: Failed to revoke access token");
                RestError::TemporarilyUnavailable
            })?;
        self.access_tokens.write().await.remove(token);
        Ok(())
    }

    pub async fn get_profile_by_token(
        &self,
        token: &str,
    ) -> Result<models::Profile, RestError> {
        if let Some(profile) = self.access_tokens.read().await.get(token) {
            return Ok(profile.clone());
        }
        let row = sqlx::query_as::<_, models::ProfileRow>(
            "SELECT profile.id, profile.name, profile.email, profile.address FROM profile \
             JOIN access_token ON access_token.profile_id = profile.id \
             WHERE access_token.token = $1 AND access_token.revoked_at IS NULL",
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), "DB: Failed to fetch token profile");
            RestError::TemporarilyUnavailable
        })?
        .ok_or(RestError::Unauthorized)?;
        let profile = row.get_profile().map_err(|e| {
            tracing::error!(error = e.to_string(), "Failed to convert profile row");
            RestError::TemporarilyUnavailable
        })?;
        self.access_tokens
            .write()
            .await
            .insert(token.to_string(), profile.clone());
        Ok(profile)
    }
}
