//! Ordered registry of selectable backend profiles.

use crate::domain::Profile;

/// Ordered sequence of profiles offered for selection.
///
/// Static entries come first, discovered entries are appended. The first
/// entry is the implicit default. Lookup is first-match-wins, so on a key
/// collision the earlier entry shadows the later one; default marking uses
/// the same policy.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
}

impl ProfileRegistry {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Append a single profile.
    pub fn push(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    /// Append discovered profiles after the static ones.
    pub fn extend(&mut self, profiles: impl IntoIterator<Item = Profile>) {
        self.profiles.extend(profiles);
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// The implicit default selection: the first entry, if any.
    pub fn default_profile(&self) -> Option<&Profile> {
        self.profiles.first()
    }

    /// First profile whose key matches.
    pub fn lookup(&self, key: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.key == key)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BackendKind;

    fn registry() -> ProfileRegistry {
        ProfileRegistry::new(vec![
            Profile::new("Local", "local", BackendKind::LocalProcess),
            Profile::new("GPU box", "docker-img1", BackendKind::DockerContainer),
        ])
    }

    #[test]
    fn default_is_first_entry() {
        assert_eq!(registry().default_profile().unwrap().key, "local");
    }

    #[test]
    fn lookup_finds_by_key() {
        assert_eq!(registry().lookup("docker-img1").unwrap().display, "GPU box");
        assert!(registry().lookup("missing").is_none());
    }

    #[test]
    fn collision_shadows_later_entry() {
        let mut registry = registry();
        registry.extend(vec![
            Profile::new("Shadowed", "local", BackendKind::DockerContainer)
        ]);

        // First-match-wins: the static entry keeps winning lookups.
        let hit = registry.lookup("local").unwrap();
        assert_eq!(hit.display, "Local");
        assert_eq!(hit.backend, BackendKind::LocalProcess);
    }
}
