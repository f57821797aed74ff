//! Boundary to the platform that stores configurations and output locations.
//!
//! Everything behind this trait is CRUD glue owned by the host platform:
//! listing app contexts, listing indexes, creating an index, and persisting a
//! [`DataInputConfig`]. The preview pipeline never depends on it; a rejected
//! save leaves the preview state untouched.

use crate::config::DataInputConfig;
use crate::error::ApiFeedError;

/// Operations the host platform exposes for managing data inputs.
pub trait ManagementApi {
    /// Lists the app contexts an input can be created in, in display order.
    async fn list_apps(&self) -> Result<Vec<String>, ApiFeedError>;

    /// Lists the existing indexes, in display order.
    async fn list_indexes(&self) -> Result<Vec<String>, ApiFeedError>;

    /// Creates a new index with the given name.
    async fn create_index(&self, name: &str) -> Result<(), ApiFeedError>;

    /// Persists the data input configuration.
    async fn save_config(&self, config: &DataInputConfig) -> Result<(), ApiFeedError>;
}

/// Validates `config` and hands it to the collaborator for persistence.
///
/// # Errors
///
/// Returns [`ApiFeedError::MissingField`] for an incomplete configuration and
/// [`ApiFeedError::ConfigRejected`] when the collaborator refuses the save.
pub async fn save_data_input<A: ManagementApi>(
    api: &A,
    config: &DataInputConfig,
) -> Result<(), ApiFeedError> {
    config.validate()?;
    api.save_config(config).await
}

/// Creates a new index after checking the name is not blank.
///
/// # Errors
///
/// Returns [`ApiFeedError::MissingField`] for a blank name and
/// [`ApiFeedError::ConfigRejected`] when the collaborator refuses creation.
pub async fn create_index<A: ManagementApi>(api: &A, name: &str) -> Result<(), ApiFeedError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiFeedError::MissingField { field: "index name" });
    }
    api.create_index(name).await
}
