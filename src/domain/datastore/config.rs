use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::kind::DatastoreKind;
use super::name::DatastoreName;

/// Connection parameters for one datastore kind.
///
/// The tag doubles as the kind selector so the catalog file stays
/// self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DatastoreParams {
    Access {
        path: PathBuf,
    },
    Excel {
        path: PathBuf,
    },
    Json {
        path: PathBuf,
    },
    Xml {
        path: PathBuf,
    },
    Sas {
        directory: PathBuf,
    },
    Dbase {
        path: PathBuf,
    },
    Odb {
        path: PathBuf,
    },
    DynamoDb {
        region: String,
        access_key_id: String,
        secret_access_key: String,
    },
    HBase {
        zookeeper_host: String,
        zookeeper_port: u16,
    },
    Neo4j {
        host: String,
        port: u16,
        username: String,
        password: String,
    },
    SugarCrm {
        base_url: String,
        username: String,
        password: String,
    },
    Datahub {
        host: String,
        port: u16,
        tenant: String,
        username: String,
        security_token: String,
    },
}

impl DatastoreParams {
    pub fn kind(&self) -> DatastoreKind {
        match self {
            Self::Access { .. } => DatastoreKind::Access,
            Self::Excel { .. } => DatastoreKind::Excel,
            Self::Json { .. } => DatastoreKind::Json,
            Self::Xml { .. } => DatastoreKind::Xml,
            Self::Sas { .. } => DatastoreKind::Sas,
            Self::Dbase { .. } => DatastoreKind::Dbase,
            Self::Odb { .. } => DatastoreKind::Odb,
            Self::DynamoDb { .. } => DatastoreKind::DynamoDb,
            Self::HBase { .. } => DatastoreKind::HBase,
            Self::Neo4j { .. } => DatastoreKind::Neo4j,
            Self::SugarCrm { .. } => DatastoreKind::SugarCrm,
            Self::Datahub { .. } => DatastoreKind::Datahub,
        }
    }
}

/// Immutable datastore configuration: a validated name plus the
/// kind-specific connection parameters. Owned by the catalog after
/// registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatastoreConfig {
    pub name: DatastoreName,
    #[serde(flatten)]
    pub params: DatastoreParams,
}

impl DatastoreConfig {
    pub fn new(name: DatastoreName, params: DatastoreParams) -> Self {
        Self { name, params }
    }

    pub fn kind(&self) -> DatastoreKind {
        self.params.kind()
    }

    /// Short human-readable summary of where this datastore points.
    pub fn display_endpoint(&self) -> String {
        match &self.params {
            DatastoreParams::Access { path }
            | DatastoreParams::Excel { path }
            | DatastoreParams::Json { path }
            | DatastoreParams::Xml { path }
            | DatastoreParams::Dbase { path }
            | DatastoreParams::Odb { path } => path.display().to_string(),
            DatastoreParams::Sas { directory } => directory.display().to_string(),
            DatastoreParams::DynamoDb { region, .. } => format!("dynamodb:{}", region),
            DatastoreParams::HBase {
                zookeeper_host,
                zookeeper_port,
            } => format!("{}:{}", zookeeper_host, zookeeper_port),
            DatastoreParams::Neo4j { host, port, .. } => format!("bolt://{}:{}", host, port),
            DatastoreParams::SugarCrm { base_url, .. } => base_url.clone(),
            DatastoreParams::Datahub {
                host, port, tenant, ..
            } => format!("{}:{}/{}", host, port, tenant),
        }
    }

    /// Connection URI for the service-backed kinds. Credentials are
    /// percent-encoded for special characters. File-based kinds have no URI.
    pub fn connection_uri(&self) -> Option<String> {
        match &self.params {
            DatastoreParams::Neo4j {
                host,
                port,
                username,
                password,
            } => {
                let encoded_password = urlencoding::encode(password);
                Some(format!(
                    "bolt://{}:{}@{}:{}",
                    username, encoded_password, host, port
                ))
            }
            DatastoreParams::SugarCrm {
                base_url, username, ..
            } => Some(format!("{}/service/v4/rest.php#{}", base_url, username)),
            DatastoreParams::Datahub {
                host,
                port,
                tenant,
                username,
                ..
            } => {
                let encoded_user = urlencoding::encode(username);
                Some(format!(
                    "https://{}:{}/repository/{}?user={}",
                    host, port, tenant, encoded_user
                ))
            }
            _ => None,
        }
    }

    /// For logging - secrets replaced with ****
    pub fn masked_endpoint(&self) -> String {
        match &self.params {
            DatastoreParams::DynamoDb { region, .. } => {
                format!("dynamodb:{} (key ****)", region)
            }
            DatastoreParams::Neo4j {
                host,
                port,
                username,
                ..
            } => format!("bolt://{}:****@{}:{}", username, host, port),
            DatastoreParams::SugarCrm {
                base_url, username, ..
            } => format!("{} (user {}, password ****)", base_url, username),
            DatastoreParams::Datahub {
                host,
                port,
                tenant,
                username,
                ..
            } => format!("{}:{}/{} (user {}, token ****)", host, port, tenant, username),
            _ => self.display_endpoint(),
        }
    }
}
