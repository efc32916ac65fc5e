//! Local login and customer-info cache.
//!
//! A name and 10-digit mobile number, stored under their own key so they
//! survive cart clears. Used only to personalize the greeting.

use std::sync::Arc;

use thiserror::Error;

use dandiya_store_core::{CustomerInfo, MobileNumber};

use crate::notify::{Notice, Notifier};
use crate::storage::Storage;

/// Storage key under which the serialized customer info lives.
pub const CUSTOMER_STORAGE_KEY: &str = "customerInfo";

/// Errors from the login form.
#[derive(Debug, Error)]
pub enum LoginError {
    /// Name or mobile was left blank.
    #[error("Please fill in all fields")]
    MissingFields,
    /// The mobile number is not a valid 10-digit number.
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,
}

/// The customer's local session: cached identity plus the login action.
pub struct CustomerSession {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    current: Option<CustomerInfo>,
}

impl CustomerSession {
    /// Load any cached customer info from storage.
    ///
    /// Missing or corrupt stored info simply means nobody is logged in.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>, notifier: Arc<dyn Notifier>) -> Self {
        let current = match storage.get(CUSTOMER_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw)
                .inspect_err(|e| {
                    tracing::debug!(error = %e, "stored customer info unparseable");
                })
                .ok(),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(error = %e, "customer storage unreadable");
                None
            }
        };

        Self {
            storage,
            notifier,
            current,
        }
    }

    /// The logged-in customer, if any.
    #[must_use]
    pub fn customer(&self) -> Option<&CustomerInfo> {
        self.current.as_ref()
    }

    /// Greeting label for the login control once logged in.
    #[must_use]
    pub fn greeting(&self) -> Option<String> {
        self.current
            .as_ref()
            .map(|info| format!("Logged in as {}", info.name))
    }

    /// Handle a login form submission.
    ///
    /// Validates a non-empty name and a 10-digit mobile number, persists
    /// the customer info, and emits a welcome notice. Validation failures
    /// emit an error notice with the same message as the returned error.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::MissingFields`] when either field is blank
    /// and [`LoginError::InvalidMobile`] when the mobile number does not
    /// parse.
    pub fn login(&mut self, name: &str, mobile: &str) -> Result<CustomerInfo, LoginError> {
        let name = name.trim();
        let mobile = mobile.trim();

        if name.is_empty() || mobile.is_empty() {
            let err = LoginError::MissingFields;
            self.notifier.notify(Notice::error(err.to_string()));
            return Err(err);
        }

        let Ok(mobile) = MobileNumber::parse(mobile) else {
            let err = LoginError::InvalidMobile;
            self.notifier.notify(Notice::error(err.to_string()));
            return Err(err);
        };

        let info = CustomerInfo {
            name: name.to_string(),
            mobile,
        };
        self.persist(&info);
        self.notifier
            .notify(Notice::success(format!("Welcome {name}!")));
        self.current = Some(info.clone());

        Ok(info)
    }

    fn persist(&self, info: &CustomerInfo) {
        let serialized = match serde_json::to_string(info) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize customer info");
                return;
            }
        };
        if let Err(e) = self.storage.set(CUSTOMER_STORAGE_KEY, &serialized) {
            tracing::warn!(error = %e, "failed to persist customer info");
        }
    }
}
