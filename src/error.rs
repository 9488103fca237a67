use thiserror::Error;

use crate::service::catalog::features::StructureError;
use crate::service::catalog::CatalogError;
use crate::service::input::InputError;

/// Every terminal failure of a tracker run.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl TrackerError {
    /// Single line shown to the user when the run stops.
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::Input(InputError::InvalidDays { input }) => {
                format!("Error: invalid number of days: {input}")
            }
            TrackerError::Catalog(CatalogError::HttpStatus(code)) => {
                format!("Error: HTTP response code - {code}")
            }
            TrackerError::Catalog(CatalogError::Transport(msg)) => {
                format!("An error occurred while retrieving earthquake data: {msg}")
            }
            TrackerError::Structure(err) => {
                format!("Error: unexpected response structure - {err}")
            }
            other => format!("Error: {other}"),
        }
    }
}
