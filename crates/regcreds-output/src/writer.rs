//! Writes registry credential output documents to timestamped YAML files.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{RegcredsError, Result};
use crate::types::{CredResources, CredsOutputEntry, RegistryCredsOutput};

/// Timestamp layout used in output filenames (`20230102T030405Z`).
///
/// Callers match filenames against this exact layout; it is part of the
/// public contract.
pub const CRED_FILE_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Base name of every credential output file.
pub const CRED_FILE_BASE_NAME: &str = "ecs-registry-creds";

/// Build a credential entry from its parts.
///
/// Inputs are taken verbatim; empty strings and empty name lists are
/// accepted. An empty `kms_key_id` means no encryption key was used and
/// maps to `None`, so the field is omitted from the serialized document.
#[must_use]
pub fn build_output_entry(
    credential_arn: impl Into<String>,
    kms_key_id: impl Into<String>,
    container_names: Vec<String>,
) -> CredsOutputEntry {
    let kms_key_id = kms_key_id.into();
    CredsOutputEntry {
        credential_arn: credential_arn.into(),
        kms_key_id: (!kms_key_id.is_empty()).then_some(kms_key_id),
        container_names,
    }
}

/// Serialize the given credentials to YAML and write them to a
/// timestamped file in `output_dir`.
///
/// An empty `output_dir` resolves to the process current working
/// directory at call time. `creation_time` defaults to now (UTC); it
/// determines the filename suffix, so two calls with the same directory
/// and effective timestamp produce the same filename and the second
/// write replaces the first.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`RegcredsError::Serialization`] if YAML encoding fails,
/// [`RegcredsError::DirectoryResolution`] if the working directory
/// cannot be resolved, and [`RegcredsError::FileCreate`] /
/// [`RegcredsError::Write`] for filesystem failures. The file handle is
/// released on every exit path.
pub fn generate_creds_output(
    creds: HashMap<String, CredsOutputEntry>,
    role_name: &str,
    output_dir: &Path,
    creation_time: Option<DateTime<Utc>>,
) -> Result<PathBuf> {
    let doc = RegistryCredsOutput::new(CredResources {
        task_execution_role: role_name.to_string(),
        container_credentials: creds,
    });
    let yaml = serde_yaml::to_string(&doc)?;

    let output_dir = if output_dir.as_os_str().is_empty() {
        std::env::current_dir().map_err(RegcredsError::DirectoryResolution)?
    } else {
        output_dir.to_path_buf()
    };

    let timestamp = creation_time.unwrap_or_else(Utc::now);
    let file_name = format!(
        "{CRED_FILE_BASE_NAME}_{}.yml",
        timestamp.format(CRED_FILE_TIMESTAMP_FORMAT)
    );
    let path = output_dir.join(file_name);

    let mut file = File::create(&path).map_err(|source| RegcredsError::FileCreate {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "Writing registry credential output file");

    file.write_all(yaml.as_bytes())
        .map_err(|source| RegcredsError::Write {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
