use std::{error::Error, fmt};

use crate::client::{ClientError, SlabClient};

pub mod post;
pub mod search;

pub use search::DEFAULT_SEARCH_LIMIT;

#[derive(Debug)]
pub enum ControlError {
    Client(ClientError),
    Decode(serde_json::Error),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "unexpected response shape: {err}"),
        }
    }
}

impl Error for ControlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Client(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<ClientError> for ControlError {
    fn from(err: ClientError) -> Self {
        Self::Client(err)
    }
}

impl From<serde_json::Error> for ControlError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

/// Entry point for the Slab operations exposed as tools.
///
/// Each operation returns rendered text. "Nothing found" outcomes and
/// GraphQL errors echoed inside the data payload are `Ok` text; transport and
/// envelope failures are `Err`.
#[derive(Clone, Debug)]
pub struct SlabControlPlane {
    client: SlabClient,
}

impl SlabControlPlane {
    #[must_use]
    pub const fn new(client: SlabClient) -> Self {
        Self { client }
    }
}
