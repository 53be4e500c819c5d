//! Value store backends.

pub mod gh;

pub use gh::GhStore;

use crate::error::Result;

/// Destination for secrets and variables.
///
/// Implementations write one value to one named slot on one target.
/// Writes overwrite; failures are reported per call and the engine turns
/// them into per-item outcomes.
pub trait SecretStore {
    fn set_secret(&self, repository: &str, name: &str, value: &str) -> Result<()>;
    fn set_variable(&self, repository: &str, name: &str, value: &str) -> Result<()>;
}
