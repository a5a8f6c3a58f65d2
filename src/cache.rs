/// Collections the dashboard fetches and may need to refetch after a
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    ApiKeys,
    LnAddresses,
    Invoices,
    Payments,
    Balance,
}

impl CacheKey {
    pub const ALL: [CacheKey; 5] = [
        CacheKey::ApiKeys,
        CacheKey::LnAddresses,
        CacheKey::Invoices,
        CacheKey::Payments,
        CacheKey::Balance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::ApiKeys => "api_keys.list",
            CacheKey::LnAddresses => "ln_addresses.list",
            CacheKey::Invoices => "invoices.list",
            CacheKey::Payments => "payments.list",
            CacheKey::Balance => "wallet.balance",
        }
    }

    /// Keys whose data changes when this collection is mutated.
    pub fn dependents(&self) -> &'static [CacheKey] {
        match self {
            CacheKey::Invoices | CacheKey::Payments => &[CacheKey::Balance],
            _ => &[],
        }
    }
}

/// Marks a collection as stale so whoever displays it refetches.
pub trait Invalidate {
    fn invalidate(&self, key: CacheKey);
}

impl<I: Invalidate + ?Sized> Invalidate for &I {
    fn invalidate(&self, key: CacheKey) {
        (**self).invalidate(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_have_distinct_names() {
        let names: HashSet<&str> = CacheKey::ALL.iter().map(|key| key.as_str()).collect();
        assert_eq!(names.len(), CacheKey::ALL.len());
    }

    #[test]
    fn transaction_deletes_refresh_balance() {
        assert_eq!(CacheKey::Invoices.dependents(), &[CacheKey::Balance]);
        assert_eq!(CacheKey::Payments.dependents(), &[CacheKey::Balance]);
        assert!(CacheKey::ApiKeys.dependents().is_empty());
    }
}
