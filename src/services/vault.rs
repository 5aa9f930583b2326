//! Vault service
//!
//! Business logic over the credential store: encrypting and saving
//! passwords, revealing them, and resolving loosely spelled names.

use crate::crypto::{self, Secret};
use crate::error::{KeystashError, KeystashResult};
use crate::models::CredentialEntry;
use crate::search::{self, Match};
use crate::storage::CredentialRepository;

/// How a requested name resolved against the stored credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// The name exists exactly as given
    Exact(String),
    /// A close stored name was confidently matched
    Approximate(String),
    /// Nothing close enough; ranked suggestions, possibly empty
    NotFound { suggestions: Vec<Match> },
}

/// Service for credential management
///
/// Holds the verified master secret for the duration of one command; every
/// envelope it writes or opens uses that secret.
pub struct VaultService<'a> {
    store: &'a CredentialRepository,
    secret: &'a Secret,
}

impl<'a> VaultService<'a> {
    /// Create a new vault service
    pub fn new(store: &'a CredentialRepository, secret: &'a Secret) -> Self {
        Self { store, secret }
    }

    /// Encrypt and store a password under a new name
    pub fn save_new(&self, name: &str, password: &Secret) -> KeystashResult<CredentialEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(KeystashError::Validation(
                "Credential name cannot be empty".into(),
            ));
        }

        let envelope = crypto::encrypt(self.secret, password.expose())?;
        let entry = CredentialEntry::new(name, envelope);
        self.store.put(entry.clone())?;
        self.store.save()?;

        Ok(entry)
    }

    /// Encrypt and store a replacement password for an existing name
    pub fn update_existing(&self, name: &str, password: &Secret) -> KeystashResult<()> {
        let envelope = crypto::encrypt(self.secret, password.expose())?;
        self.store.update(name, envelope)?;
        self.store.save()?;

        Ok(())
    }

    /// Decrypt the stored password for an exact name
    pub fn reveal(&self, name: &str) -> KeystashResult<Secret> {
        let entry = self.store.get(name)?;
        let plaintext = crypto::decrypt(self.secret, &entry.envelope)?;
        Ok(Secret::from(plaintext))
    }

    /// Resolve a possibly misspelled name against the stored credentials
    ///
    /// Exact names win outright. Otherwise the best fuzzy match is taken
    /// when one clears the confidence threshold; below that the caller gets
    /// ranked suggestions to show.
    pub fn resolve(&self, query: &str) -> KeystashResult<NameMatch> {
        if self.store.contains(query)? {
            return Ok(NameMatch::Exact(query.to_string()));
        }

        let names = self.store.names()?;
        if let Some(found) = search::best(&names, query) {
            return Ok(NameMatch::Approximate(found.name));
        }

        Ok(NameMatch::NotFound {
            suggestions: search::rank(&names, query),
        })
    }

    /// Check whether a credential with this exact name exists
    pub fn exists(&self, name: &str) -> KeystashResult<bool> {
        self.store.contains(name)
    }

    /// All stored credentials, sorted by name
    pub fn entries(&self) -> KeystashResult<Vec<CredentialEntry>> {
        self.store.list()
    }

    /// Rank stored names against a search query
    pub fn search_names(&self, query: &str) -> KeystashResult<Vec<Match>> {
        let names = self.store.names()?;
        Ok(search::rank(&names, query))
    }

    /// Whether the vault has no credentials yet
    pub fn is_empty(&self) -> KeystashResult<bool> {
        Ok(self.store.count()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, CredentialRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = CredentialRepository::new(temp_dir.path().join("credentials.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn master() -> Secret {
        Secret::from("master-password")
    }

    #[test]
    fn test_save_and_reveal() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);

        service
            .save_new("github", &Secret::from("gh-pass"))
            .unwrap();

        let revealed = service.reveal("github").unwrap();
        assert_eq!(revealed.expose(), "gh-pass");
    }

    #[test]
    fn test_save_trims_the_name() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);

        let entry = service
            .save_new("  github  ", &Secret::from("gh-pass"))
            .unwrap();

        assert_eq!(entry.name, "github");
        assert!(service.exists("github").unwrap());
    }

    #[test]
    fn test_save_rejects_empty_name() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);

        let err = service.save_new("   ", &Secret::from("pw")).unwrap_err();
        assert!(matches!(err, KeystashError::Validation(_)));
    }

    #[test]
    fn test_save_rejects_duplicate_name() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);

        service.save_new("github", &Secret::from("one")).unwrap();
        let err = service
            .save_new("github", &Secret::from("two"))
            .unwrap_err();

        assert!(matches!(err, KeystashError::Duplicate(_)));
        assert_eq!(service.reveal("github").unwrap().expose(), "one");
    }

    #[test]
    fn test_update_changes_the_password() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);

        service.save_new("github", &Secret::from("old")).unwrap();
        service
            .update_existing("github", &Secret::from("new"))
            .unwrap();

        assert_eq!(service.reveal("github").unwrap().expose(), "new");
    }

    #[test]
    fn test_update_missing_name() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);

        let err = service
            .update_existing("nope", &Secret::from("pw"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reveal_with_wrong_master_fails() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);
        service
            .save_new("github", &Secret::from("gh-pass"))
            .unwrap();

        let wrong = Secret::from("not-the-master");
        let imposter = VaultService::new(&repo, &wrong);

        let err = imposter.reveal("github").unwrap_err();
        assert!(err.is_invalid_secret());
    }

    #[test]
    fn test_resolve_exact() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);
        service.save_new("github", &Secret::from("pw")).unwrap();

        let resolved = service.resolve("github").unwrap();
        assert_eq!(resolved, NameMatch::Exact("github".to_string()));
    }

    #[test]
    fn test_resolve_approximate() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);
        service.save_new("github", &Secret::from("pw")).unwrap();

        // Dropped letter
        let resolved = service.resolve("githb").unwrap();
        assert_eq!(resolved, NameMatch::Approximate("github".to_string()));

        // Stored names match case-sensitively, so this resolves fuzzily
        let resolved = service.resolve("GITHUB").unwrap();
        assert_eq!(resolved, NameMatch::Approximate("github".to_string()));
    }

    #[test]
    fn test_resolve_not_found() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);
        service.save_new("github", &Secret::from("pw")).unwrap();

        let resolved = service.resolve("xyzzy").unwrap();
        assert_eq!(
            resolved,
            NameMatch::NotFound {
                suggestions: Vec::new()
            }
        );
    }

    #[test]
    fn test_search_names() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);
        service.save_new("github", &Secret::from("a")).unwrap();
        service.save_new("gitlab", &Secret::from("b")).unwrap();
        service.save_new("amazon", &Secret::from("c")).unwrap();

        let results = service.search_names("git").unwrap();
        let names: Vec<_> = results.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["github", "gitlab"]);
    }

    #[test]
    fn test_is_empty() {
        let (_temp_dir, repo) = create_test_store();
        let secret = master();
        let service = VaultService::new(&repo, &secret);

        assert!(service.is_empty().unwrap());
        service.save_new("github", &Secret::from("pw")).unwrap();
        assert!(!service.is_empty().unwrap());
    }
}
