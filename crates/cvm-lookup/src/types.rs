//! CVM inventory payload types.

use serde::{Deserialize, Deserializer, Serialize};

/// Status value that excludes a record from lookup.
pub const STATUS_TERMINATED: &str = "terminated";

/// One record in a cloud CVM inventory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CvmRecord {
    /// Lifecycle status of the VM itself
    pub status: Option<String>,

    /// Nested hosted-app record; anything other than a JSON object
    /// collapses to an empty one
    #[serde(default, deserialize_with = "hosted_or_empty")]
    pub hosted: HostedInfo,

    /// VM name
    pub name: Option<String>,

    /// VM identifier
    pub id: Option<String>,

    /// Legacy VM identifier
    pub vm_uuid: Option<String>,

    /// Deployed application identifier
    pub app_id: Option<String>,

    /// Dashboard URL reported on the VM record
    pub dapp_dashboard_url: Option<String>,
}

/// Hosted-app sub-record carrying an alternate set of identifying fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostedInfo {
    pub status: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub app_id: Option<String>,
    pub app_url: Option<String>,
}

/// Three-field projection of a matched record.
///
/// All three keys are always emitted; a field with no source value
/// serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvmSummary {
    pub id: Option<String>,
    pub app_id: Option<String>,
    pub dashboard_url: Option<String>,
}

impl CvmRecord {
    /// Whether the record (or its hosted app) is terminated.
    pub fn is_terminated(&self) -> bool {
        self.status.as_deref() == Some(STATUS_TERMINATED)
            || self.hosted.status.as_deref() == Some(STATUS_TERMINATED)
    }

    /// Whether the record's own name or its hosted name equals `name`.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name) || self.hosted.name.as_deref() == Some(name)
    }

    /// Project the record into a summary, first-non-null-wins per field.
    pub fn into_summary(self) -> CvmSummary {
        CvmSummary {
            id: self.hosted.id.or(self.id).or(self.vm_uuid),
            app_id: self.hosted.app_id.or(self.app_id),
            dashboard_url: self.dapp_dashboard_url.or(self.hosted.app_url),
        }
    }
}

fn hosted_or_empty<'de, D>(deserializer: D) -> Result<HostedInfo, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Object(_) => {
            serde_json::from_value(value).map_err(serde::de::Error::custom)
        }
        _ => Ok(HostedInfo::default()),
    }
}
