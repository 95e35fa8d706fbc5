use crate::client::Client;
use crate::error::AppError;
use crate::model::requests::ListOrganizationsProjectsOptions;
use crate::model::responses::Project;
use crate::pagination::ApiResponse;
use reqwest::Method;
use tracing::{debug, info};

impl Client {
    /// Lists the projects associated with a given organization
    ///
    /// `GET organizations/{organization_id}/projects`
    ///
    /// When `opts` carries a next-page URL from a previous response, that
    /// URL's path and raw query are used verbatim instead of re-deriving the
    /// endpoint from the organization id and fresh options.
    ///
    /// # Arguments
    /// * `organization_id` - Identifier of the organization
    /// * `opts` - Optional page-size options or a next-page URL
    ///
    /// # Returns
    /// * `Ok((Vec<Project>, ApiResponse))` - The projects on this page plus
    ///   pagination metadata
    /// * `Err(AppError)` - If the request fails
    pub async fn list_organizations_projects(
        &self,
        organization_id: &str,
        opts: Option<&ListOrganizationsProjectsOptions>,
    ) -> Result<(Vec<Project>, ApiResponse), AppError> {
        info!("Listing projects of organization {}", organization_id);

        let request = match opts.and_then(|o| o.next_page_url.as_ref()) {
            Some(next) => {
                let endpoint = match next.query() {
                    Some(query) => {
                        format!("{}?{}", next.path().trim_start_matches('/'), query)
                    }
                    None => next.path().trim_start_matches('/').to_string(),
                };
                self.request(Method::GET, &endpoint, None::<&()>, None::<&()>)?
            }
            None => {
                let path = format!("organizations/{organization_id}/projects");
                self.request(Method::GET, &path, opts, None::<&()>)?
            }
        };

        let (projects, response): (Vec<Project>, ApiResponse) = self.execute(request).await?;

        debug!("Projects obtained: {}", projects.len());
        Ok((projects, response))
    }
}
