use serde_json::{Map, Value};
use slab_model::queries::{SEARCH_OPERATION_NAME, SEARCH_POSTS};
use tracing::{debug, info};

use super::{ControlError, SlabControlPlane};
use crate::format;

/// Page size used when the caller does not pick one.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

impl SlabControlPlane {
    /// Searches posts, users, and comments and renders the first page.
    ///
    /// # Errors
    /// Returns `ControlError` if the request fails or the payload cannot be decoded.
    pub async fn search(&self, term: &str, limit: u32) -> Result<String, ControlError> {
        info!(operation = SEARCH_OPERATION_NAME, term, limit, "searching slab");

        let mut variables = Map::new();
        variables.insert("query".to_string(), Value::from(term));
        variables.insert("first".to_string(), Value::from(limit));

        let data = self.client.execute(SEARCH_POSTS, variables).await?;
        if let Some(page_info) = data.pointer("/search/pageInfo") {
            debug!(%page_info, "search page info");
        }

        Ok(format::search_response(term, &data)?)
    }
}
