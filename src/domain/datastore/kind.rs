use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The datastore type a configuration connects to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatastoreKind {
    Access,
    Excel,
    Json,
    Xml,
    Sas,
    Dbase,
    Odb,
    DynamoDb,
    HBase,
    Neo4j,
    SugarCrm,
    Datahub,
}

impl DatastoreKind {
    pub fn all_variants() -> &'static [DatastoreKind] {
        &[
            DatastoreKind::Access,
            DatastoreKind::Excel,
            DatastoreKind::Json,
            DatastoreKind::Xml,
            DatastoreKind::Sas,
            DatastoreKind::Dbase,
            DatastoreKind::Odb,
            DatastoreKind::DynamoDb,
            DatastoreKind::HBase,
            DatastoreKind::Neo4j,
            DatastoreKind::SugarCrm,
            DatastoreKind::Datahub,
        ]
    }

    /// Kinds backed by a single local file or directory rather than a service.
    pub fn is_file_based(&self) -> bool {
        matches!(
            self,
            DatastoreKind::Access
                | DatastoreKind::Excel
                | DatastoreKind::Json
                | DatastoreKind::Xml
                | DatastoreKind::Sas
                | DatastoreKind::Dbase
                | DatastoreKind::Odb
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatastoreKind::Access => "MS Access database",
            DatastoreKind::Excel => "Excel spreadsheet",
            DatastoreKind::Json => "JSON file",
            DatastoreKind::Xml => "XML file",
            DatastoreKind::Sas => "SAS library",
            DatastoreKind::Dbase => "dBase database",
            DatastoreKind::Odb => "OpenOffice.org database",
            DatastoreKind::DynamoDb => "DynamoDB table store",
            DatastoreKind::HBase => "HBase database",
            DatastoreKind::Neo4j => "Neo4j graph database",
            DatastoreKind::SugarCrm => "SugarCRM system",
            DatastoreKind::Datahub => "Datahub instance",
        }
    }
}

impl fmt::Display for DatastoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatastoreKind::Access => write!(f, "access"),
            DatastoreKind::Excel => write!(f, "excel"),
            DatastoreKind::Json => write!(f, "json"),
            DatastoreKind::Xml => write!(f, "xml"),
            DatastoreKind::Sas => write!(f, "sas"),
            DatastoreKind::Dbase => write!(f, "dbase"),
            DatastoreKind::Odb => write!(f, "odb"),
            DatastoreKind::DynamoDb => write!(f, "dynamodb"),
            DatastoreKind::HBase => write!(f, "hbase"),
            DatastoreKind::Neo4j => write!(f, "neo4j"),
            DatastoreKind::SugarCrm => write!(f, "sugarcrm"),
            DatastoreKind::Datahub => write!(f, "datahub"),
        }
    }
}

impl FromStr for DatastoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "access" => Ok(DatastoreKind::Access),
            "excel" => Ok(DatastoreKind::Excel),
            "json" => Ok(DatastoreKind::Json),
            "xml" => Ok(DatastoreKind::Xml),
            "sas" => Ok(DatastoreKind::Sas),
            "dbase" => Ok(DatastoreKind::Dbase),
            "odb" => Ok(DatastoreKind::Odb),
            "dynamodb" => Ok(DatastoreKind::DynamoDb),
            "hbase" => Ok(DatastoreKind::HBase),
            "neo4j" => Ok(DatastoreKind::Neo4j),
            "sugarcrm" => Ok(DatastoreKind::SugarCrm),
            "datahub" => Ok(DatastoreKind::Datahub),
            _ => Err(format!("Unknown datastore kind: {}", s)),
        }
    }
}
