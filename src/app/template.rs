//! Per-kind form templates.
//!
//! One static field list per datastore kind, selected by tag instead of a
//! dialog subclass per kind. Every template starts with the datastore name.

use crate::app::field::{FieldKind, FieldSpec};
use crate::domain::datastore::DatastoreKind;

const NAME: FieldSpec = FieldSpec::required("name", "Datastore name", FieldKind::Text);

const ACCESS: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("path", "Database file", FieldKind::Path),
];

const EXCEL: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("path", "Spreadsheet file", FieldKind::Path),
];

const JSON: &[FieldSpec] = &[NAME, FieldSpec::required("path", "JSON file", FieldKind::Path)];

const XML: &[FieldSpec] = &[NAME, FieldSpec::required("path", "XML file", FieldKind::Path)];

const SAS: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("directory", "Library directory", FieldKind::Path),
];

const DBASE: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("path", "dBase file", FieldKind::Path),
];

const ODB: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("path", "Database file", FieldKind::Path),
];

const DYNAMODB: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("region", "Region", FieldKind::Text).with_default("us-east-1"),
    FieldSpec::required("access_key_id", "Access key ID", FieldKind::Text),
    FieldSpec::required("secret_access_key", "Secret access key", FieldKind::Secret),
];

const HBASE: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("zookeeper_host", "Hostname", FieldKind::Text),
    FieldSpec::required("zookeeper_port", "Port", FieldKind::Port).with_default("2181"),
];

const NEO4J: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("host", "Hostname", FieldKind::Text).with_default("localhost"),
    FieldSpec::required("port", "Port", FieldKind::Port).with_default("7687"),
    FieldSpec::required("username", "Username", FieldKind::Text).with_default("neo4j"),
    FieldSpec::optional("password", "Password", FieldKind::Secret),
];

const SUGARCRM: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("base_url", "Base URL", FieldKind::Url),
    FieldSpec::required("username", "Username", FieldKind::Text),
    FieldSpec::optional("password", "Password", FieldKind::Secret),
];

const DATAHUB: &[FieldSpec] = &[
    NAME,
    FieldSpec::required("host", "Hostname", FieldKind::Text),
    FieldSpec::required("port", "Port", FieldKind::Port).with_default("8080"),
    FieldSpec::required("tenant", "Tenant", FieldKind::Text),
    FieldSpec::required("username", "Username", FieldKind::Text),
    FieldSpec::optional("security_token", "Security token", FieldKind::Secret),
];

pub fn fields_for(kind: DatastoreKind) -> &'static [FieldSpec] {
    match kind {
        DatastoreKind::Access => ACCESS,
        DatastoreKind::Excel => EXCEL,
        DatastoreKind::Json => JSON,
        DatastoreKind::Xml => XML,
        DatastoreKind::Sas => SAS,
        DatastoreKind::Dbase => DBASE,
        DatastoreKind::Odb => ODB,
        DatastoreKind::DynamoDb => DYNAMODB,
        DatastoreKind::HBase => HBASE,
        DatastoreKind::Neo4j => NEO4J,
        DatastoreKind::SugarCrm => SUGARCRM,
        DatastoreKind::Datahub => DATAHUB,
    }
}

/// File extensions a path field is expected to carry, for advisory checks.
pub fn expected_extensions(kind: DatastoreKind) -> &'static [&'static str] {
    match kind {
        DatastoreKind::Access => &["mdb", "accdb"],
        DatastoreKind::Excel => &["xls", "xlsx"],
        DatastoreKind::Json => &["json"],
        DatastoreKind::Xml => &["xml"],
        DatastoreKind::Dbase => &["dbf"],
        DatastoreKind::Odb => &["odb"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_starts_with_name() {
        for kind in DatastoreKind::all_variants() {
            let fields = fields_for(*kind);
            assert_eq!(fields[0].id, "name", "template for {kind}");
        }
    }

    #[test]
    fn field_ids_are_unique_within_template() {
        for kind in DatastoreKind::all_variants() {
            let fields = fields_for(*kind);
            for (i, field) in fields.iter().enumerate() {
                assert!(
                    !fields[..i].iter().any(|f| f.id == field.id),
                    "duplicate id {} in template for {kind}",
                    field.id
                );
            }
        }
    }

    #[test]
    fn file_based_kinds_have_a_path_field() {
        for kind in DatastoreKind::all_variants().iter().filter(|k| k.is_file_based()) {
            let has_path = fields_for(*kind)
                .iter()
                .any(|f| f.kind == FieldKind::Path);
            assert!(has_path, "template for {kind}");
        }
    }

    #[test]
    fn hbase_port_defaults_to_zookeeper() {
        let port = fields_for(DatastoreKind::HBase)
            .iter()
            .find(|f| f.id == "zookeeper_port")
            .unwrap();
        assert_eq!(port.default, "2181");
    }

    #[test]
    fn secrets_are_never_defaulted() {
        for kind in DatastoreKind::all_variants() {
            for field in fields_for(*kind).iter().filter(|f| f.is_secret()) {
                assert_eq!(field.default, "", "secret default in template for {kind}");
            }
        }
    }
}
