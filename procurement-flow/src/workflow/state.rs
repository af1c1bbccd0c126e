//! Step sequencer and per-session workflow state.

use console_core::error::FlowError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{BusinessProfileSummary, InvoiceDraft, LineItem};
use crate::workflow::items::ItemAccumulator;

/// Workflow step. `Invoice` is the last form step; `Done` is reached
/// only through a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Vendor,
    Items,
    Invoice,
    Done,
}

impl Default for Step {
    fn default() -> Self {
        Step::Vendor
    }
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Vendor => "vendor",
            Step::Items => "items",
            Step::Invoice => "invoice",
            Step::Done => "done",
        }
    }
}

/// All state accumulated during one procurement creation session.
///
/// Created fresh per visit to the creation page, mutated step by step,
/// discarded on successful submit or cancel. Nothing persists across
/// reloads.
#[derive(Debug, Default, Clone)]
pub struct WorkflowState {
    step: Step,
    vendor: Option<BusinessProfileSummary>,
    items: ItemAccumulator,
    invoice: InvoiceDraft,
    items_touched: bool,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn vendor(&self) -> Option<&BusinessProfileSummary> {
        self.vendor.as_ref()
    }

    pub fn items(&self) -> &ItemAccumulator {
        &self.items
    }

    pub fn invoice(&self) -> &InvoiceDraft {
        &self.invoice
    }

    /// Whether any item mutation happened this session. Until then the
    /// invoice amount is independently editable and never auto-synced.
    pub fn items_touched(&self) -> bool {
        self.items_touched
    }

    /// Set or replace the selected vendor. Replacing clears no other
    /// state.
    pub fn select_vendor(&mut self, vendor: BusinessProfileSummary) {
        debug!(vendor_id = %vendor.id, vendor_name = %vendor.name, "vendor selected");
        self.vendor = Some(vendor);
    }

    /// Move forward one step if the current step's guard holds.
    /// State is unchanged on failure; steps are never skipped.
    pub fn advance(&mut self) -> Result<Step, FlowError> {
        let next = match self.step {
            Step::Vendor => {
                if self.vendor.is_none() {
                    return Err(FlowError::validation("vendor", "vendor required"));
                }
                Step::Items
            }
            // Items may stay empty; a procurement without lines is valid.
            Step::Items => Step::Invoice,
            Step::Invoice | Step::Done => {
                return Err(FlowError::IncompleteState(
                    "invoice is the final form step; submit to finish",
                ));
            }
        };

        debug!(from = self.step.as_str(), to = next.as_str(), "step advanced");
        self.step = next;
        Ok(next)
    }

    /// Move back one step. Always succeeds; on the first step this is
    /// a no-op. Data entered in later steps is preserved.
    pub fn retreat(&mut self) -> Step {
        let prev = match self.step {
            Step::Vendor | Step::Done => self.step,
            Step::Items => Step::Vendor,
            Step::Invoice => Step::Items,
        };
        if prev != self.step {
            debug!(from = self.step.as_str(), to = prev.as_str(), "step retreated");
        }
        self.step = prev;
        prev
    }

    /// Append a line item and re-sync the invoice amount.
    pub fn add_item(&mut self, item: LineItem) -> Result<(), FlowError> {
        self.items.add(item)?;
        self.sync_invoice_amount();
        Ok(())
    }

    /// Remove the line item at `index` and re-sync the invoice amount.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, FlowError> {
        let removed = self.items.remove(index)?;
        self.sync_invoice_amount();
        Ok(removed)
    }

    /// Item changes overwrite the invoice amount with the recomputed
    /// total, discarding any manual edit made earlier.
    fn sync_invoice_amount(&mut self) {
        self.items_touched = true;
        self.invoice.invoice_amount = self.items.total();
    }

    /// Set the invoice amount by hand.
    ///
    /// A manual value persists only until the next item change, which
    /// silently overwrites it with the recomputed item total. Before
    /// the first item change the amount is fully independent.
    pub fn set_invoice_amount(&mut self, amount: Decimal) {
        self.invoice.invoice_amount = amount;
    }

    pub fn set_invoice_number(&mut self, number: impl Into<String>) {
        self.invoice.invoice_number = number.into();
    }

    pub fn set_credit_period(&mut self, days: u32) {
        self.invoice.credit_period = days;
    }

    pub fn set_invoice_date(&mut self, date: chrono::NaiveDate) {
        self.invoice.invoice_date = Some(date);
    }

    pub fn set_receipt_date(&mut self, date: chrono::NaiveDate) {
        self.invoice.receipt_date = Some(date);
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.invoice.notes = notes;
    }

    pub(crate) fn mark_done(&mut self, procurement_id: &str) {
        info!(procurement_id, "procurement created, workflow done");
        self.step = Step::Done;
    }
}
