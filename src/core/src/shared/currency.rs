use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrencyValue {
    pub amount: f64,
    pub currency: Currency,
}

impl CurrencyValue {
    pub fn new(amount: f64, currency: Currency) -> Self {
        CurrencyValue { amount, currency }
    }

    pub fn usd(amount: f64) -> Self {
        CurrencyValue::new(amount, Currency::Usd)
    }
}

impl Display for CurrencyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.currency {
            Currency::Usd => write!(f, "${:.2}", self.amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Currency {
    Usd,
}
