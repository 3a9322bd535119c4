use crate::error::StaticError;

/// Registration of a static error kind, submitted by `#[static_error]`.
/// - `name`: `module_path::IDENT` unless overridden with `name = "..."`.
/// - `error`: the registered `static` item itself (identity = its address).
pub struct Registration {
    name: &'static str,
    error: &'static StaticError,
}

impl Registration {
    pub const fn new(name: &'static str, error: &'static StaticError) -> Self {
        Self { name, error }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn error(&self) -> &'static StaticError {
        self.error
    }
}

inventory::collect!(Registration);

/// Find a registered kind by name. With duplicate names the first registration wins.
pub fn lookup(name: &str) -> Option<&'static StaticError> {
    let mut found: Option<&'static Registration> = None;
    for reg in inventory::iter::<Registration> {
        if reg.name != name {
            continue;
        }
        match found {
            None => found = Some(reg),
            Some(first) => {
                tracing::warn!(name, kept = %first.error, dropped = %reg.error, "duplicate static error name in catalog");
            }
        }
    }
    found.map(|r| r.error)
}

/// Registered name of `kind`, matched by address.
pub fn name_of(kind: &StaticError) -> Option<&'static str> {
    inventory::iter::<Registration>
        .into_iter()
        .find(|reg| std::ptr::eq(reg.error, kind))
        .map(|reg| reg.name)
}

/// Iterate all registrations
pub fn all() -> Vec<&'static Registration> {
    inventory::iter::<Registration>.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::kinds;

    #[crate::static_error]
    static LOCAL_DEFAULT_NAME: StaticError = StaticError::new("local");

    #[crate::static_error(name = "test.renamed")]
    static LOCAL_RENAMED: StaticError = StaticError::new("renamed");

    static UNREGISTERED: StaticError = StaticError::new("local");

    #[test]
    fn default_name_is_module_path_qualified() {
        assert_eq!(
            name_of(&LOCAL_DEFAULT_NAME),
            Some("mmg_error::catalog::tests::LOCAL_DEFAULT_NAME")
        );
        let found = lookup("mmg_error::catalog::tests::LOCAL_DEFAULT_NAME");
        assert!(found.is_some_and(|k| std::ptr::eq(k, &LOCAL_DEFAULT_NAME)));
    }

    #[test]
    fn explicit_name_overrides() {
        assert_eq!(name_of(&LOCAL_RENAMED), Some("test.renamed"));
        let e = Error::from_static(lookup("test.renamed").unwrap());
        assert!(e == LOCAL_RENAMED);
    }

    #[test]
    fn identity_not_text_decides_membership() {
        assert_eq!(name_of(&UNREGISTERED), None);
        assert!(lookup("no.such.kind").is_none());
    }

    #[test]
    fn well_known_kinds_are_listed() {
        let names: Vec<&str> = all().iter().map(|r| r.name()).collect();
        for n in ["eof", "not_found", "timeout", "unsupported", "cancelled"] {
            assert!(names.contains(&n), "missing {n}");
        }
        assert!(lookup("timeout").is_some_and(|k| std::ptr::eq(k, &kinds::TIMEOUT)));
    }
}
