#[cfg(test)]
#[path = "data_purchase_test.rs"]
mod data_purchase_test;

use serde::{Deserialize, Serialize};

/// Selections made in the buy-data flow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPurchaseDraft {
    /// Network service id, e.g. `mtn-data`.
    pub service_id: String,
    /// Plan variation code chosen from the network's plan list.
    pub variation_code: Option<String>,
    pub phone: String,
}

impl DataPurchaseDraft {
    /// Choosing another network invalidates any plan picked for the old one.
    pub fn select_network(&mut self, service_id: &str) {
        if self.service_id != service_id {
            self.service_id = service_id.to_owned();
            self.variation_code = None;
        }
    }

    /// Network, plan, and phone number are all present.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.service_id.is_empty()
            && self.variation_code.as_deref().is_some_and(|v| !v.is_empty())
            && !self.phone.trim().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
