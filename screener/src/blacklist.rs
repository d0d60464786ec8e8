use std::collections::{HashMap, HashSet};

/// Insertion-only sets of banned token and developer addresses.
///
/// Seeded from configuration at startup; grown only by the bundling
/// check. All keys are lowercase addresses.
#[derive(Debug, Default, Clone)]
pub struct BlacklistSets {
    tokens: HashSet<String>,
    developers: HashSet<String>,
}

impl BlacklistSets {
    pub fn seeded(
        tokens: impl IntoIterator<Item = String>,
        developers: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            tokens: tokens.into_iter().map(|a| a.to_lowercase()).collect(),
            developers: developers.into_iter().map(|a| a.to_lowercase()).collect(),
        }
    }

    pub fn ban_token(&mut self, address: &str) {
        self.tokens.insert(address.to_lowercase());
    }

    pub fn ban_developer(&mut self, address: &str) {
        self.developers.insert(address.to_lowercase());
    }

    pub fn is_token_banned(&self, address: &str) -> bool {
        self.tokens.contains(&address.to_lowercase())
    }

    pub fn is_developer_banned(&self, address: &str) -> bool {
        self.developers.contains(&address.to_lowercase())
    }

    pub fn banned_token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn banned_developer_count(&self) -> usize {
        self.developers.len()
    }
}

/// Read-only lookup from token address to its controlling developer.
#[derive(Debug, Default, Clone)]
pub struct DeveloperMap {
    inner: HashMap<String, String>,
}

impl DeveloperMap {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            inner: pairs
                .into_iter()
                .map(|(t, d)| (t.to_lowercase(), d.to_lowercase()))
                .collect(),
        }
    }

    pub fn developer_of(&self, token_address: &str) -> Option<&str> {
        self.inner
            .get(&token_address.to_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_case_insensitive() {
        let mut bl = BlacklistSets::seeded(vec!["0xAAA".to_string()], vec![]);
        assert!(bl.is_token_banned("0xaaa"));
        assert!(bl.is_token_banned("0xAAA"));

        bl.ban_developer("0xDeV");
        assert!(bl.is_developer_banned("0xdev"));
    }

    #[test]
    fn developer_map_resolves_lowercase() {
        let map = DeveloperMap::from_pairs(vec![("0xTok".to_string(), "0xDev".to_string())]);
        assert_eq!(map.developer_of("0xTOK"), Some("0xdev"));
        assert_eq!(map.developer_of("0xother"), None);
    }
}
