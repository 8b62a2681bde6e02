use crate::app_config::Meraki;
use crate::meraki::MerakiError;
use crate::meraki::domain::Organization;
use crate::meraki::request::get_json;
use reqwest::Client;
use tracing::{info, instrument};

#[instrument(skip(client, config))]
pub async fn get_organizations(client: &Client, config: &Meraki) -> Result<Vec<Organization>, MerakiError> {
    info!("Retrieving organizations...");

    let organizations: Vec<Organization> = get_json(client, &format!("{}/organizations", config.url()), &[]).await?;
    info!("Retrieving organizations... OK, {} found", organizations.len());

    Ok(organizations)
}

/// Id of the first organization the API key has access to.
#[instrument(skip(client, config))]
pub async fn get_organization_id(client: &Client, config: &Meraki) -> Result<String, MerakiError> {
    let organizations = get_organizations(client, config).await?;

    organizations
        .first()
        .and_then(Organization::id)
        .map(str::to_string)
        .ok_or(MerakiError::NoOrganizations)
}
