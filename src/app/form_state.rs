use crate::app::field::{FieldKind, FieldSpec};
use crate::app::template;
use crate::domain::datastore::{DatastoreConfig, DatastoreKind, DatastoreParams};

pub const INPUT_VISIBLE_WIDTH: usize = 26;

/// One live field: its static spec plus the current text.
#[derive(Debug, Clone)]
pub struct Field {
    pub spec: FieldSpec,
    pub value: String,
}

/// Live, editable state of one open setup form.
///
/// Field order comes from the kind's template and doubles as presentation
/// and validation order. Owned exclusively by its dialog; created when the
/// dialog opens and dropped when it closes.
#[derive(Debug, Clone)]
pub struct FormState {
    kind: DatastoreKind,
    fields: Vec<Field>,
    focused: usize,
    pub cursor_position: usize,
    pub viewport_offset: usize,
}

impl FormState {
    /// Fresh form for the create flow, template defaults applied.
    pub fn from_template(kind: DatastoreKind) -> Self {
        let fields = template::fields_for(kind)
            .iter()
            .map(|spec| Field {
                spec: *spec,
                value: spec.default.to_string(),
            })
            .collect();
        Self {
            kind,
            fields,
            focused: 0,
            cursor_position: 0,
            viewport_offset: 0,
        }
    }

    /// Pre-populated form for the edit flow.
    pub fn from_config(config: &DatastoreConfig) -> Self {
        let mut form = Self::from_template(config.kind());
        form.set("name", config.name.as_str());
        match &config.params {
            DatastoreParams::Access { path }
            | DatastoreParams::Excel { path }
            | DatastoreParams::Json { path }
            | DatastoreParams::Xml { path }
            | DatastoreParams::Dbase { path }
            | DatastoreParams::Odb { path } => {
                form.set("path", path.display().to_string());
            }
            DatastoreParams::Sas { directory } => {
                form.set("directory", directory.display().to_string());
            }
            DatastoreParams::DynamoDb {
                region,
                access_key_id,
                secret_access_key,
            } => {
                form.set("region", region);
                form.set("access_key_id", access_key_id);
                form.set("secret_access_key", secret_access_key);
            }
            DatastoreParams::HBase {
                zookeeper_host,
                zookeeper_port,
            } => {
                form.set("zookeeper_host", zookeeper_host);
                form.set("zookeeper_port", zookeeper_port.to_string());
            }
            DatastoreParams::Neo4j {
                host,
                port,
                username,
                password,
            } => {
                form.set("host", host);
                form.set("port", port.to_string());
                form.set("username", username);
                form.set("password", password);
            }
            DatastoreParams::SugarCrm {
                base_url,
                username,
                password,
            } => {
                form.set("base_url", base_url);
                form.set("username", username);
                form.set("password", password);
            }
            DatastoreParams::Datahub {
                host,
                port,
                tenant,
                username,
                security_token,
            } => {
                form.set("host", host);
                form.set("port", port.to_string());
                form.set("tenant", tenant);
                form.set("username", username);
                form.set("security_token", security_token);
            }
        }
        form.cursor_to_end();
        form
    }

    pub fn kind(&self) -> DatastoreKind {
        self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn value(&self, id: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.spec.id == id)
            .map_or("", |f| f.value.as_str())
    }

    /// Overwrites a field by id. Returns false when the template has no
    /// such field, leaving the form untouched.
    pub fn set(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.spec.id == id) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn focused_field(&self) -> &Field {
        &self.fields[self.focused]
    }

    pub fn focus_next(&mut self) -> bool {
        if self.focused + 1 < self.fields.len() {
            self.focused += 1;
            self.cursor_to_end();
            true
        } else {
            false
        }
    }

    pub fn focus_prev(&mut self) -> bool {
        if self.focused > 0 {
            self.focused -= 1;
            self.cursor_to_end();
            true
        } else {
            false
        }
    }

    /// Inserts at the cursor, respecting char boundaries. Port fields only
    /// accept digits and cap at five chars.
    pub fn insert_char(&mut self, c: char) {
        let field = &mut self.fields[self.focused];
        if field.spec.kind == FieldKind::Port && (!c.is_ascii_digit() || char_count(&field.value) >= 5)
        {
            return;
        }
        let byte_idx = char_to_byte_index(&field.value, self.cursor_position);
        field.value.insert(byte_idx, c);
        let new_cursor = self.cursor_position + 1;
        self.update_cursor(new_cursor, INPUT_VISIBLE_WIDTH);
    }

    pub fn backspace(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let field = &mut self.fields[self.focused];
        let char_pos = self.cursor_position - 1;
        if let Some((byte_idx, _)) = field.value.char_indices().nth(char_pos) {
            field.value.remove(byte_idx);
            self.update_cursor(char_pos, INPUT_VISIBLE_WIDTH);
        }
    }

    pub fn update_cursor(&mut self, cursor: usize, visible_width: usize) {
        self.cursor_position = cursor;
        if cursor < self.viewport_offset {
            self.viewport_offset = cursor;
        } else if cursor >= self.viewport_offset + visible_width {
            self.viewport_offset = cursor.saturating_sub(visible_width) + 1;
        }
    }

    pub fn cursor_to_end(&mut self) {
        let len = char_count(&self.fields[self.focused].value);
        self.cursor_position = len;
        self.viewport_offset = 0;
    }
}

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}
