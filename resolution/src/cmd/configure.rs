//! `resolution configure` command — persist a provider choice.

use crate::error::{Error, Result};
use crate::record::{ProviderKind, split_provider_input};
use crate::resolver::ProviderResolver;
use crate::store::ConfigStore;

/// Execute the `configure` command.
///
/// `provider` uses the command-line `kind:value` form; only `infura` and
/// `url` kinds are accepted.
///
/// # Errors
///
/// Returns an error if the kind is not settable, the value is empty, or the
/// store cannot be written.
pub fn run<S: ConfigStore>(resolver: &ProviderResolver<S>, provider: &str) -> Result<()> {
    let (tag, value) = split_provider_input(provider);
    let kind = ProviderKind::from_tag(tag);
    if !kind.is_settable() {
        return Err(Error::UnsettableKind(tag.to_owned()));
    }
    resolver.store_provider_choice(kind, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ProviderRecord;
    use crate::testing::{MemoryStore, fresh_store};

    #[test]
    fn stores_parsed_provider() {
        let (_dir, store) = fresh_store();
        let resolver = ProviderResolver::new(store);
        run(&resolver, "url:http://a:8080").unwrap();
        assert_eq!(
            resolver.store().get().unwrap(),
            ProviderRecord::new(ProviderKind::Url, "http://a:8080")
        );
        assert_eq!(
            std::fs::read_to_string(resolver.store().path()).unwrap(),
            "url=http://a:8080"
        );
    }

    #[test]
    fn rejects_unknown_kind_without_writing() {
        let resolver = ProviderResolver::new(MemoryStore::default());
        assert!(matches!(
            run(&resolver, "unknown:x"),
            Err(Error::UnsettableKind(ref tag)) if tag == "unknown"
        ));
        let err = run(&resolver, "alchemy:KEY").unwrap_err();
        assert!(matches!(err, Error::UnsettableKind(ref tag) if tag == "alchemy"));
        assert!(err.to_string().contains("'alchemy'"));
        assert_eq!(resolver.store().writes(), 0);
    }

    #[test]
    fn known_kind_without_value_reports_empty_value() {
        let resolver = ProviderResolver::new(MemoryStore::default());
        assert!(matches!(
            run(&resolver, "infura:"),
            Err(Error::EmptyValue(ProviderKind::Infura))
        ));
        assert!(matches!(
            run(&resolver, "url"),
            Err(Error::EmptyValue(ProviderKind::Url))
        ));
        assert_eq!(resolver.store().writes(), 0);
    }
}
