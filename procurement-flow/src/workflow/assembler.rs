//! Submission assembler: turns accumulated workflow state into the
//! external create call.

use std::sync::atomic::{AtomicBool, Ordering};

use console_core::error::FlowError;
use tracing::{error, instrument};

use crate::models::{CreateProcurementRequest, CreatedProcurement};
use crate::services::ConsoleApi;
use crate::workflow::state::{Step, WorkflowState};
use crate::workflow::validation;

/// Performs the final create call, at most one at a time.
///
/// The assembler does not re-validate field contents (the sequencer
/// and validation layer gate that); it only refuses to run when called
/// out of order.
#[derive(Debug, Default)]
pub struct SubmissionAssembler {
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the submit call resolves either way.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, FlowError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| FlowError::SubmitInFlight)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SubmissionAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a create call is currently outstanding. Hosts disable
    /// the submit action while this is true.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Map workflow state to the external create shape.
    ///
    /// Items are included only when at least one was accumulated.
    /// Fails with `IncompleteState` when invoked before the invoice
    /// step or with required selections missing.
    pub fn build_request(state: &WorkflowState) -> Result<CreateProcurementRequest, FlowError> {
        if state.step() != Step::Invoice {
            let err = FlowError::IncompleteState("assembler invoked before the invoice step");
            error!(step = state.step().as_str(), "{err}");
            return Err(err);
        }
        let vendor = state
            .vendor()
            .ok_or(FlowError::IncompleteState("no vendor selected"))?;

        let invoice = state.invoice();
        let invoice_date = invoice
            .invoice_date
            .ok_or(FlowError::IncompleteState("invoice date not set"))?;
        let receipt_date = invoice
            .receipt_date
            .ok_or(FlowError::IncompleteState("receipt date not set"))?;

        let items = state.items().items();
        Ok(CreateProcurementRequest {
            business_profile_id: vendor.id.clone(),
            invoice_number: invoice.invoice_number.clone(),
            invoice_amount: invoice.invoice_amount,
            credit_period: invoice.credit_period,
            invoice_date,
            receipt_date,
            notes: invoice.notes.clone(),
            items: if items.is_empty() {
                None
            } else {
                Some(items.to_vec())
            },
        })
    }

    /// Issue exactly one create call for the current state.
    ///
    /// The invoice form is checked through the validation layer first;
    /// an incomplete form blocks the call with a per-field
    /// `Validation` error. On success the workflow reaches `Done` and
    /// the created id is returned. On failure the state is left intact
    /// so the user can retry without re-entering anything; the remote
    /// message is surfaced verbatim.
    #[instrument(skip(self, state, api))]
    pub async fn submit(
        &self,
        state: &mut WorkflowState,
        api: &ConsoleApi,
    ) -> Result<CreatedProcurement, FlowError> {
        validation::validate_for_submit(state)?;
        let request = Self::build_request(state)?;
        let _guard = InFlight::acquire(&self.in_flight)?;

        let created = api.create_procurement(&request).await?;
        state.mark_done(&created.id);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessProfileSummary, LineItem};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn ready_state(with_items: bool) -> WorkflowState {
        let mut state = WorkflowState::new();
        state.select_vendor(BusinessProfileSummary {
            id: "bp-1".to_string(),
            name: "Acme Textiles".to_string(),
            gstin: None,
            city: None,
        });
        state.advance().unwrap();
        if with_items {
            state
                .add_item(LineItem {
                    product_id: "prod-1".to_string(),
                    product_name: "Cotton Shirt".to_string(),
                    variant_id: "var-1".to_string(),
                    variant_name: "Blue / M".to_string(),
                    quantity: 2,
                    unit_price: dec!(100.00),
                })
                .unwrap();
        }
        state.advance().unwrap();
        state.set_invoice_number("INV-2024-001");
        state.set_invoice_amount(dec!(250.00));
        state.set_credit_period(30);
        state.set_invoice_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        state.set_receipt_date(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        state
    }

    #[test]
    fn build_request_maps_fields_verbatim() {
        let request = SubmissionAssembler::build_request(&ready_state(true)).unwrap();
        assert_eq!(request.business_profile_id, "bp-1");
        assert_eq!(request.invoice_number, "INV-2024-001");
        assert_eq!(request.invoice_amount, dec!(250.00));
        assert_eq!(request.credit_period, 30);
        assert_eq!(request.items.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn build_request_omits_empty_items() {
        let mut state = ready_state(false);
        state.set_invoice_amount(dec!(99.00));

        let request = SubmissionAssembler::build_request(&state).unwrap();
        assert!(request.items.is_none());
        assert_eq!(request.invoice_amount, dec!(99.00));

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("items").is_none());
    }

    #[test]
    fn build_request_rejects_out_of_order_calls() {
        let state = WorkflowState::new();
        assert!(matches!(
            SubmissionAssembler::build_request(&state),
            Err(FlowError::IncompleteState(_))
        ));
    }

    #[test]
    fn in_flight_flag_resets_when_guard_drops() {
        let assembler = SubmissionAssembler::new();
        assert!(!assembler.is_in_flight());
        {
            let _guard = InFlight::acquire(&assembler.in_flight).unwrap();
            assert!(assembler.is_in_flight());
            assert!(matches!(
                InFlight::acquire(&assembler.in_flight),
                Err(FlowError::SubmitInFlight)
            ));
        }
        assert!(!assembler.is_in_flight());
    }
}
