//! Registry credential output files for container tasks.
//!
//! After registry credentials have been resolved for a task, this crate
//! records the result: a versioned YAML document naming the task
//! execution role and, per registry, the secret holding the credential,
//! the encryption key (if any), and the containers that use it. The
//! document is written to a timestamped `ecs-registry-creds_*.yml` file
//! so successive runs do not clobber each other.
//!
//! # Example
//!
//! ```no_run
//! use regcreds_output::{build_output_entry, generate_creds_output};
//! use std::collections::HashMap;
//! use std::path::Path;
//!
//! # fn main() -> regcreds_output::Result<()> {
//! let mut creds = HashMap::new();
//! creds.insert(
//!     "my-registry".to_string(),
//!     build_output_entry(
//!         "arn:aws:secretsmanager:us-east-1:111:secret:my-registry",
//!         "",
//!         vec!["web".to_string()],
//!     ),
//! );
//!
//! let path = generate_creds_output(creds, "myTaskExecutionRole", Path::new("."), None)?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

mod error;
mod types;
mod writer;

pub use error::{RegcredsError, Result};
pub use types::{CredResources, CredsOutputEntry, RegistryCredsOutput, OUTPUT_DOC_VERSION};
pub use writer::{
    build_output_entry, generate_creds_output, CRED_FILE_BASE_NAME, CRED_FILE_TIMESTAMP_FORMAT,
};

use std::path::Path;

/// Parse a credential output document from a YAML string.
pub fn from_yaml_str(yaml: &str) -> Result<RegistryCredsOutput> {
    let doc: RegistryCredsOutput = serde_yaml::from_str(yaml)?;
    Ok(doc)
}

/// Parse a credential output document from a YAML file.
pub fn from_yaml_file(path: &Path) -> Result<RegistryCredsOutput> {
    let content = std::fs::read_to_string(path).map_err(|source| RegcredsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_yaml_str(&content)
}
