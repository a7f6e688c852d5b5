use crate::modules::auth::gate::AuthGate;
use crate::modules::auth::session::Session;
use crate::modules::auth::store::AccountStore;
use crate::modules::config::AppConfig;
use crate::modules::portfolio::zakat::{ZakatError, ZakatPolicy};

/// Everything a shell handler needs, passed explicitly instead of living in
/// process-wide globals. Owned by a single thread.
#[derive(Debug)]
pub struct AppContext {
    pub store: AccountStore,
    pub gate: AuthGate,
    pub session: Session,
    pub zakat: ZakatPolicy,
}

impl AppContext {
    pub fn new(store: AccountStore, gate: AuthGate, zakat: ZakatPolicy) -> Self {
        Self {
            store,
            gate,
            session: Session::new(),
            zakat,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ZakatError> {
        Ok(Self::new(
            AccountStore::new(config.data_file.clone()),
            AuthGate::new(config.max_login_attempts, config.password_hash_iterations),
            ZakatPolicy::new(config.gold_price_per_gram)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_config() {
        let config = AppConfig {
            data_file: "accounts.json".into(),
            gold_price_per_gram: 100.0,
            ..AppConfig::default()
        };

        let context = AppContext::from_config(&config).unwrap();
        assert_eq!(context.store.path(), std::path::Path::new("accounts.json"));
        assert_eq!(context.zakat.nisab_threshold(), 8500.0);
        assert!(!context.session.is_active());
    }

    #[test]
    fn test_context_rejects_bad_gold_price() {
        let config = AppConfig {
            gold_price_per_gram: f64::NAN,
            ..AppConfig::default()
        };
        assert!(AppContext::from_config(&config).is_err());
    }
}
