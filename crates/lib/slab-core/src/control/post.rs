use serde_json::{Map, Value};
use slab_model::queries::{GET_POST, GET_POST_OPERATION_NAME};
use tracing::info;

use super::{ControlError, SlabControlPlane};
use crate::format;

impl SlabControlPlane {
    /// Fetches a single post by id and renders it in full.
    ///
    /// # Errors
    /// Returns `ControlError` if the request fails or the payload cannot be decoded.
    pub async fn get_post(&self, post_id: &str) -> Result<String, ControlError> {
        info!(operation = GET_POST_OPERATION_NAME, post_id, "fetching slab post");

        let mut variables = Map::new();
        variables.insert("id".to_string(), Value::from(post_id));

        let data = self.client.execute(GET_POST, variables).await?;
        Ok(format::post_response(post_id, &data)?)
    }
}
