use gamesmith_domain::TemplateSummary;
use tracing::debug;

use crate::error::ApiError;
use crate::transport::{endpoints, ApiRequest, Transport};

/// Read access to the server's template list.
pub struct TemplateCatalog;

impl TemplateCatalog {
    pub fn list<T>(transport: &mut T) -> Result<Vec<TemplateSummary>, ApiError>
    where
        T: Transport + ?Sized,
    {
        let response = transport.send(ApiRequest::get(endpoints::ALL_TEMPLATES))?;
        if response.status != 200 {
            return Err(response.into_error());
        }
        let templates: Vec<TemplateSummary> = response.decode()?;
        debug!(count = templates.len(), "templates listed");
        Ok(templates)
    }
}
