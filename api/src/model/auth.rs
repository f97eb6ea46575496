use garde::Validate;
use serde::Deserialize;

/// Login payload. The email is trusted here; validating that the caller
/// controls it is the upstream identity provider's job.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenRequest {
    #[garde(email)]
    pub email: String,
}
