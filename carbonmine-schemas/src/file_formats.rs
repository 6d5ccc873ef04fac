use crate::profile::ProfileSubmission;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFile {
    pub schema_version: String,
    pub profiles: Vec<ProfileSubmission>,
}
