/// Input discipline for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Free text whose value must never be echoed or logged.
    Secret,
    /// Decimal port number, 1..=65535.
    Port,
    /// Absolute URL with scheme and host.
    Url,
    /// Filesystem path; never checked against the filesystem.
    Path,
}

/// Static descriptor for one field of a setup form. Declaration order in a
/// template is both presentation order and validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn required(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            kind,
            required: true,
            default: "",
        }
    }

    pub const fn optional(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            kind,
            required: false,
            default: "",
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }

    pub fn is_secret(&self) -> bool {
        self.kind == FieldKind::Secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_constructor_sets_flag() {
        let spec = FieldSpec::required("host", "Hostname", FieldKind::Text);
        assert!(spec.required);
        assert_eq!(spec.default, "");
    }

    #[test]
    fn with_default_overrides_empty_default() {
        let spec = FieldSpec::required("port", "Port", FieldKind::Port).with_default("2181");
        assert_eq!(spec.default, "2181");
    }

    #[test]
    fn only_secret_kind_is_secret() {
        assert!(FieldSpec::optional("password", "Password", FieldKind::Secret).is_secret());
        assert!(!FieldSpec::required("host", "Hostname", FieldKind::Text).is_secret());
    }
}
