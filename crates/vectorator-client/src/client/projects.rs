//! Project operations.

use vectorator_data::{Project, TenantScope};

use super::{expect_success, VectoratorClient};
use crate::error::Result;
use crate::route::Route;
use crate::TRACING_TARGET_CLIENT;

impl VectoratorClient {
    /// Creates a project for the tenant.
    pub async fn create_project(&self, tenant: &TenantScope, project: &str) -> Result<Project> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            tenant = %tenant,
            project,
            "Creating project"
        );

        let response = self
            .request(&Route::ProjectCreate { tenant, project })?
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Lists the tenant's projects.
    pub async fn list_projects(&self, tenant: &TenantScope) -> Result<Vec<Project>> {
        let response = self.request(&Route::ProjectList { tenant })?.send().await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Deletes a project. Best effort; the backend cascades the delete to
    /// the project's documents and chats.
    pub async fn delete_project(&self, tenant: &TenantScope, project: &str) -> Result<()> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            tenant = %tenant,
            project,
            "Deleting project"
        );

        let response = self
            .request(&Route::ProjectDelete { tenant, project })?
            .send()
            .await?;

        expect_success(response).await?;
        Ok(())
    }
}
