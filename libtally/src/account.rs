use std::fmt;

/// A hierarchical account path, e.g. `assets:bank:checking`.
///
/// Segments are separated by `:`. The path string is the identity: equality,
/// hashing, and ordering are all lexicographic on it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Account(String);

impl Account {
    /// Panics on an empty path; accounts always have at least one segment.
    pub fn new(name: impl Into<String>) -> Account {
        let name = name.into();
        assert!(!name.is_empty(), "account path must not be empty");
        Account(name)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Number of colons in the path; a root account has depth 0.
    pub fn depth(&self) -> usize {
        self.0.matches(':').count()
    }

    /// The path with its last segment removed, or `None` for a root account.
    pub fn parent(&self) -> Option<Account> {
        self.0
            .rsplit_once(':')
            .map(|(parent, _)| Account(parent.to_string()))
    }

    pub fn last_component(&self) -> &str {
        self.0.rsplit(':').next().unwrap_or(&self.0)
    }

    /// Raw prefix containment: `cash` includes `cash:on-hand`, but also
    /// `cashflow`. Intentionally not segment-aware.
    pub fn includes(&self, other: &Account) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::account::Account;

    #[test]
    fn depth_counts_colons() {
        assert_eq!(Account::new("assets").depth(), 0);
        assert_eq!(Account::new("assets:bank:checking").depth(), 2);
    }

    #[test]
    fn parent_drops_the_last_segment() {
        assert_eq!(
            Account::new("a:b").parent(),
            Some(Account::new("a")),
        );
        assert_eq!(
            Account::new("assets:bank:checking").parent(),
            Some(Account::new("assets:bank")),
        );
        assert_eq!(Account::new("a").parent(), None);
    }

    #[test]
    fn last_component_is_the_final_segment() {
        assert_eq!(Account::new("assets:bank:checking").last_component(), "checking");
        assert_eq!(Account::new("assets").last_component(), "assets");
    }

    #[test]
    fn containment_is_a_prefix_test() {
        let a = Account::new("a");
        let ab = Account::new("a:b");
        assert!(a.includes(&ab));
        assert!(!ab.includes(&a));

        // documented quirk: not segment-aware
        assert!(Account::new("cash").includes(&Account::new("cashflow")));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut accounts = vec![
            Account::new("expenses:food"),
            Account::new("assets:bank"),
            Account::new("assets"),
        ];
        accounts.sort();
        assert_eq!(
            accounts,
            vec![
                Account::new("assets"),
                Account::new("assets:bank"),
                Account::new("expenses:food"),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "account path must not be empty")]
    fn empty_path_is_rejected() {
        Account::new("");
    }
}
