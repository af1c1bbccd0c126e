//! Form validation layer.
//!
//! Schema checks live on the models via `validator` derives; this
//! module flattens their output into the workflow's single-field
//! `FlowError::Validation` shape and adds the checks the derive
//! cannot express (required optional dates).

use console_core::error::FlowError;
use validator::{Validate, ValidationErrors};

use crate::models::InvoiceDraft;
use crate::workflow::state::{Step, WorkflowState};

/// Map a `validator` error set to the first offending field.
///
/// Fields are visited in name order so the reported field is stable
/// across runs.
pub fn first_violation(errors: &ValidationErrors) -> FlowError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    match fields.first() {
        Some(&(field, violations)) => {
            let message = violations
                .first()
                .and_then(|v| v.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            FlowError::Validation {
                field: display_field(field),
                message,
            }
        }
        None => FlowError::validation("form", "validation failed"),
    }
}

/// Derive-sourced violations carry Rust snake_case field names; inline
/// display uses the wire's camelCase register throughout.
fn display_field(field: &'static str) -> &'static str {
    match field {
        "invoice_number" => "invoiceNumber",
        "invoice_amount" => "invoiceAmount",
        "credit_period" => "creditPeriod",
        "invoice_date" => "invoiceDate",
        "receipt_date" => "receiptDate",
        other => other,
    }
}

/// Validate the invoice form: non-empty number, positive amount, both
/// dates present. Credit period is non-negative by type.
pub fn validate_invoice(draft: &InvoiceDraft) -> Result<(), FlowError> {
    draft.validate().map_err(|errors| first_violation(&errors))?;

    if draft.invoice_date.is_none() {
        return Err(FlowError::validation("invoiceDate", "invoice date required"));
    }
    if draft.receipt_date.is_none() {
        return Err(FlowError::validation("receiptDate", "receipt date required"));
    }
    Ok(())
}

/// Submit guard for the final step: on the invoice step, vendor set,
/// invoice complete.
pub fn validate_for_submit(state: &WorkflowState) -> Result<(), FlowError> {
    if state.step() != Step::Invoice {
        return Err(FlowError::IncompleteState(
            "submit is only valid on the invoice step",
        ));
    }
    if state.vendor().is_none() {
        return Err(FlowError::validation("vendor", "vendor required"));
    }
    validate_invoice(state.invoice())
}
