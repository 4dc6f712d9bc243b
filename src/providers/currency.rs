//! Currency conversion provider (exchangerate-api latest rates).

use std::collections::HashMap;

use serde::Deserialize;

use super::ContentProviders;
use crate::core::{AppError, AppResult};

#[derive(Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

impl ContentProviders {
    /// Convert `amount` from one currency code to another.
    ///
    /// Codes are expected uppercased by the caller; an unknown target code is
    /// a provider failure, not a validation failure, since only the provider
    /// knows which codes exist.
    pub async fn convert_currency(&self, amount: f64, from: &str, to: &str) -> AppResult<f64> {
        let url = format!("{}/v4/latest/{}", self.config().currency_base, from);
        let data: RatesResponse = self.get_json(&url).await?;

        let rate = data
            .rates
            .get(to)
            .ok_or_else(|| AppError::Provider(format!("no exchange rate for {}", to)))?;

        Ok(amount * rate)
    }
}
