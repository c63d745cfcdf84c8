//! Data model for registry credential output documents.
//!
//! Field names are part of the on-disk format and must not change:
//! downstream tooling parses these files by key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schema version written into every output document.
pub const OUTPUT_DOC_VERSION: &str = "1";

/// One resolved registry credential and the containers that use it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredsOutputEntry {
    /// Identifier of the secret holding the registry credential
    /// (e.g. a Secrets Manager ARN).
    #[serde(rename = "secret_manager_arn")]
    pub credential_arn: String,

    /// Identifier of the key used to encrypt the secret, if any.
    /// Omitted from the document entirely when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// Names of the containers that share this credential.
    pub container_names: Vec<String>,
}

/// All credential entries resolved for one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredResources {
    /// Execution role associated with these credentials.
    pub task_execution_role: String,

    /// Credential entries keyed by a caller-chosen registry name.
    /// Keys are unique; insertion order carries no meaning.
    pub container_credentials: HashMap<String, CredsOutputEntry>,
}

/// Top-level credential output document.
///
/// Built fresh for each write and discarded after serialization; the
/// file on disk is the only durable artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryCredsOutput {
    /// Document schema version, always [`OUTPUT_DOC_VERSION`].
    pub version: String,

    /// The credential resources for this task.
    #[serde(rename = "registry_credential_outputs")]
    pub credential_resources: CredResources,
}

impl RegistryCredsOutput {
    /// Wrap the given resources in a versioned document.
    #[must_use]
    pub fn new(credential_resources: CredResources) -> Self {
        Self {
            version: OUTPUT_DOC_VERSION.to_string(),
            credential_resources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kms_key_omitted_when_none() {
        let entry = CredsOutputEntry {
            credential_arn: "arn:aws:secretsmanager:us-east-1:111:secret:reg".to_string(),
            kms_key_id: None,
            container_names: vec!["web".to_string()],
        };

        let yaml = serde_yaml::to_string(&entry).unwrap();
        assert!(!yaml.contains("kms_key_id"));
        assert!(yaml.contains("secret_manager_arn"));
    }

    #[test]
    fn test_kms_key_present_when_set() {
        let entry = CredsOutputEntry {
            credential_arn: "arn:aws:secretsmanager:us-east-1:111:secret:reg".to_string(),
            kms_key_id: Some("arn:aws:kms:us-east-1:111:key/abc".to_string()),
            container_names: vec!["web".to_string()],
        };

        let yaml = serde_yaml::to_string(&entry).unwrap();
        assert!(yaml.contains("kms_key_id:"));
        assert!(yaml.contains("arn:aws:kms:us-east-1:111:key/abc"));
    }

    #[test]
    fn test_document_version_constant() {
        let doc = RegistryCredsOutput::new(CredResources {
            task_execution_role: "myRole".to_string(),
            container_credentials: HashMap::new(),
        });
        assert_eq!(doc.version, "1");

        // The version string must serialize quoted so parsers see a
        // string, not the integer 1.
        let yaml = serde_yaml::to_string(&doc).unwrap();
        assert!(yaml.contains("version: '1'") || yaml.contains("version: \"1\""));
    }

    #[test]
    fn test_wire_field_names() {
        let mut creds = HashMap::new();
        creds.insert(
            "my-registry".to_string(),
            CredsOutputEntry {
                credential_arn: "arn:secret".to_string(),
                kms_key_id: Some("arn:key".to_string()),
                container_names: vec!["web".to_string(), "logging".to_string()],
            },
        );
        let doc = RegistryCredsOutput::new(CredResources {
            task_execution_role: "taskRole".to_string(),
            container_credentials: creds,
        });

        let yaml = serde_yaml::to_string(&doc).unwrap();
        for key in [
            "registry_credential_outputs",
            "task_execution_role",
            "container_credentials",
            "secret_manager_arn",
            "kms_key_id",
            "container_names",
        ] {
            assert!(yaml.contains(key), "missing field {key} in:\n{yaml}");
        }
    }
}
