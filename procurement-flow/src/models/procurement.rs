//! Procurement create request/response shapes and the in-progress
//! invoice form.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::LineItem;

/// In-progress invoice fields for the final workflow step.
///
/// Starts empty and is filled in by the user; the validation layer
/// decides when it is complete enough to submit. Dates serialize as
/// `yyyy-MM-dd`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    #[validate(length(min = 1, message = "invoice number required"))]
    pub invoice_number: String,
    #[validate(custom(function = positive_amount))]
    pub invoice_amount: Decimal,
    pub credit_period: u32,
    pub invoice_date: Option<NaiveDate>,
    pub receipt_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

fn positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_positive() && !amount.is_zero() {
        Ok(())
    } else {
        let mut err = ValidationError::new("invoice_amount");
        err.message = Some("invoice amount must be greater than zero".into());
        Err(err)
    }
}

/// Body of `POST /procurements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcurementRequest {
    pub business_profile_id: String,
    pub invoice_number: String,
    pub invoice_amount: Decimal,
    pub credit_period: u32,
    pub invoice_date: NaiveDate,
    pub receipt_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Omitted entirely when no items were accumulated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
}

/// Created resource returned by `POST /procurements`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProcurement {
    pub id: String,
}

impl CreatedProcurement {
    /// Where the console navigates after a successful create.
    pub fn location(&self) -> String {
        format!("/procurements/{}", self.id)
    }
}
