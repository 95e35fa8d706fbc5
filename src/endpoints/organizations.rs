use crate::client::Client;
use crate::error::AppError;
use crate::model::requests::ListCurrentUsersOrganizationsOptions;
use crate::model::responses::Organization;
use crate::pagination::ApiResponse;
use reqwest::Method;
use tracing::{debug, info};

impl Client {
    /// Lists the organizations that the current user is a member of
    ///
    /// `GET user/organizations`
    ///
    /// # Arguments
    /// * `opts` - Optional filter and page-size options; `None` sends no
    ///   query parameters
    ///
    /// # Returns
    /// * `Ok((Vec<Organization>, ApiResponse))` - The organizations on this
    ///   page plus pagination metadata
    /// * `Err(AppError)` - If the request fails
    pub async fn list_current_users_organizations(
        &self,
        opts: Option<&ListCurrentUsersOrganizationsOptions>,
    ) -> Result<(Vec<Organization>, ApiResponse), AppError> {
        info!("Listing the current user's organizations");

        let request = self.request(Method::GET, "user/organizations", opts, None::<&()>)?;
        let (orgs, response): (Vec<Organization>, ApiResponse) = self.execute(request).await?;

        debug!("Organizations obtained: {}", orgs.len());
        Ok((orgs, response))
    }
}
