//! Construction of configuration values from accepted form states.
//!
//! Deterministic: equal form states produce equal configurations. The
//! builder runs only after the validator accepts the form, so every error
//! here is defensive and aborts the submission without touching the catalog.

use std::path::PathBuf;

use thiserror::Error;

use crate::app::form_state::FormState;
use crate::domain::datastore::{
    DatastoreConfig, DatastoreKind, DatastoreName, DatastoreNameError, DatastoreParams,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    InvalidName(#[from] DatastoreNameError),
    #[error("Field '{field}' is not a valid port: {value:?}")]
    InvalidPort { field: &'static str, value: String },
}

pub fn build(form: &FormState) -> Result<DatastoreConfig, BuildError> {
    let name = DatastoreName::new(form.value("name"))?;
    let params = match form.kind() {
        DatastoreKind::Access => DatastoreParams::Access {
            path: path_of(form, "path"),
        },
        DatastoreKind::Excel => DatastoreParams::Excel {
            path: path_of(form, "path"),
        },
        DatastoreKind::Json => DatastoreParams::Json {
            path: path_of(form, "path"),
        },
        DatastoreKind::Xml => DatastoreParams::Xml {
            path: path_of(form, "path"),
        },
        DatastoreKind::Sas => DatastoreParams::Sas {
            directory: path_of(form, "directory"),
        },
        DatastoreKind::Dbase => DatastoreParams::Dbase {
            path: path_of(form, "path"),
        },
        DatastoreKind::Odb => DatastoreParams::Odb {
            path: path_of(form, "path"),
        },
        DatastoreKind::DynamoDb => DatastoreParams::DynamoDb {
            region: text_of(form, "region"),
            access_key_id: text_of(form, "access_key_id"),
            secret_access_key: secret_of(form, "secret_access_key"),
        },
        DatastoreKind::HBase => DatastoreParams::HBase {
            zookeeper_host: text_of(form, "zookeeper_host"),
            zookeeper_port: port_of(form, "zookeeper_port")?,
        },
        DatastoreKind::Neo4j => DatastoreParams::Neo4j {
            host: text_of(form, "host"),
            port: port_of(form, "port")?,
            username: text_of(form, "username"),
            password: secret_of(form, "password"),
        },
        DatastoreKind::SugarCrm => DatastoreParams::SugarCrm {
            base_url: text_of(form, "base_url"),
            username: text_of(form, "username"),
            password: secret_of(form, "password"),
        },
        DatastoreKind::Datahub => DatastoreParams::Datahub {
            host: text_of(form, "host"),
            port: port_of(form, "port")?,
            tenant: text_of(form, "tenant"),
            username: text_of(form, "username"),
            security_token: secret_of(form, "security_token"),
        },
    };
    Ok(DatastoreConfig::new(name, params))
}

fn text_of(form: &FormState, id: &str) -> String {
    form.value(id).trim().to_string()
}

/// Secrets are taken verbatim: trailing spaces may be significant.
fn secret_of(form: &FormState, id: &str) -> String {
    form.value(id).to_string()
}

fn path_of(form: &FormState, id: &str) -> PathBuf {
    PathBuf::from(form.value(id).trim())
}

fn port_of(form: &FormState, field: &'static str) -> Result<u16, BuildError> {
    let value = form.value(field).trim();
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(BuildError::InvalidPort {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hbase_form() -> FormState {
        let mut form = FormState::from_template(DatastoreKind::HBase);
        form.set("name", "ds1");
        form.set("zookeeper_host", "localhost");
        form.set("zookeeper_port", "2181");
        form
    }

    mod build {
        use super::*;

        #[test]
        fn produces_expected_hbase_config() {
            let config = build(&hbase_form()).unwrap();
            assert_eq!(config.name.as_str(), "ds1");
            assert_eq!(
                config.params,
                DatastoreParams::HBase {
                    zookeeper_host: "localhost".to_string(),
                    zookeeper_port: 2181,
                }
            );
        }

        #[test]
        fn is_deterministic() {
            assert_eq!(build(&hbase_form()).unwrap(), build(&hbase_form()).unwrap());
        }

        #[test]
        fn trims_text_fields() {
            let mut form = hbase_form();
            form.set("zookeeper_host", "  localhost  ");
            let config = build(&form).unwrap();
            assert!(matches!(
                config.params,
                DatastoreParams::HBase { ref zookeeper_host, .. } if zookeeper_host == "localhost"
            ));
        }

        #[test]
        fn keeps_secrets_verbatim() {
            let mut form = FormState::from_template(DatastoreKind::Neo4j);
            form.set("name", "graph");
            form.set("password", " pw ");
            let config = build(&form).unwrap();
            assert!(matches!(
                config.params,
                DatastoreParams::Neo4j { ref password, .. } if password == " pw "
            ));
        }

        #[test]
        fn roundtrips_through_form_state() {
            let config = build(&hbase_form()).unwrap();
            let reopened = FormState::from_config(&config);
            assert_eq!(build(&reopened).unwrap(), config);
        }
    }

    mod defensive_errors {
        use super::*;

        #[test]
        fn empty_name_is_rejected() {
            let mut form = hbase_form();
            form.set("name", "");
            assert!(matches!(build(&form), Err(BuildError::InvalidName(_))));
        }

        #[test]
        fn malformed_port_is_rejected() {
            let mut form = hbase_form();
            form.set("zookeeper_port", "0");
            assert!(matches!(
                build(&form),
                Err(BuildError::InvalidPort { field: "zookeeper_port", .. })
            ));
        }
    }
}
