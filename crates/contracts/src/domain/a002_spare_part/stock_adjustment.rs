//! Stock adjustment rules: resulting level, signed movement and the checks
//! that run before an adjustment request leaves the form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKind {
    /// Add to current stock
    #[default]
    In,
    /// Remove from current stock
    Out,
    /// Replace current stock with an absolute level
    Set,
}

impl AdjustmentKind {
    pub const ALL: [AdjustmentKind; 3] = [Self::In, Self::Out, Self::Set];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Set => "set",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::In => "Stock In",
            Self::Out => "Stock Out",
            Self::Set => "Set Stock",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::In => "Add to current stock",
            Self::Out => "Remove from current stock",
            Self::Set => "Set stock to this quantity",
        }
    }

    /// Preview text such as `+5 units`
    pub fn delta_label(&self, quantity: u32) -> String {
        match self {
            Self::In => format!("+{} units", quantity),
            Self::Out => format!("-{} units", quantity),
            Self::Set => format!("Set to {} units", quantity),
        }
    }
}

/// Stock level after applying `quantity` with `kind`. Never negative.
pub fn new_stock_level(current: u32, kind: AdjustmentKind, quantity: u32) -> u32 {
    match kind {
        AdjustmentKind::In => current.saturating_add(quantity),
        AdjustmentKind::Out => current.saturating_sub(quantity),
        AdjustmentKind::Set => quantity,
    }
}

/// Signed stock movement recorded for the adjustment.
pub fn movement_quantity(current: u32, kind: AdjustmentKind, quantity: u32) -> i64 {
    match kind {
        AdjustmentKind::In => i64::from(quantity),
        AdjustmentKind::Out => -i64::from(quantity),
        AdjustmentKind::Set => i64::from(quantity) - i64::from(current),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasonOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Label of the escape reason that unlocks free-text input
pub const OTHER_REASON: &str = "Other";

/// Reasons offered in the adjustment form. The label is what gets submitted.
pub const REASON_OPTIONS: &[ReasonOption] = &[
    ReasonOption { value: "purchase", label: "Purchase Order" },
    ReasonOption { value: "sale", label: "Sale" },
    ReasonOption { value: "return", label: "Customer Return" },
    ReasonOption { value: "damage", label: "Damaged Goods" },
    ReasonOption { value: "expiry", label: "Expired Goods" },
    ReasonOption { value: "theft", label: "Theft/Loss" },
    ReasonOption { value: "adjustment", label: "Manual Adjustment" },
    ReasonOption { value: "transfer", label: "Location Transfer" },
    ReasonOption { value: "audit", label: "Stock Audit" },
    ReasonOption { value: "other", label: OTHER_REASON },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustmentError {
    #[error("Please enter a quantity")]
    MissingQuantity,

    #[error("Quantity must be greater than 0")]
    NonPositiveQuantity,

    #[error("Quantity is too large")]
    QuantityTooLarge,

    #[error("Cannot remove {requested} units: only {available} in stock")]
    ExceedsCurrentStock { requested: u32, available: u32 },

    #[error("Please select a reason")]
    MissingReason,
}

/// Validated adjustment request handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub kind: AdjustmentKind,
    pub quantity: u32,
    pub reason: String,
    pub notes: Option<String>,
}

/// Whole number typed into the quantity field, `None` for blank or
/// unparsable text (`"abc"`, `"2.5"`).
pub fn parse_quantity(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Raw state of the adjustment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockAdjustmentDraft {
    pub kind: AdjustmentKind,
    /// As typed; `None` when the field is empty or not a whole number.
    /// May be zero or negative.
    pub quantity: Option<i64>,
    /// Selected reason label, empty when nothing is selected
    pub reason: String,
    /// Free text used when `reason` is [`OTHER_REASON`]
    pub custom_reason: String,
    pub notes: String,
}

impl StockAdjustmentDraft {
    pub fn is_other_reason(&self) -> bool {
        self.reason == OTHER_REASON
    }

    /// Reason that would be submitted, trimmed. Empty when none.
    pub fn effective_reason(&self) -> String {
        let custom = self.custom_reason.trim();
        if self.is_other_reason() && !custom.is_empty() {
            custom.to_string()
        } else {
            self.reason.trim().to_string()
        }
    }

    /// Store the raw text of the quantity field.
    pub fn set_quantity_input(&mut self, input: &str) {
        self.quantity = parse_quantity(input);
    }

    /// Text for the quantity field. Empty only when nothing usable was entered.
    pub fn quantity_text(&self) -> String {
        self.quantity.map(|q| q.to_string()).unwrap_or_default()
    }

    /// Quantity clamped into the range a stock level can take.
    pub fn preview_quantity(&self) -> u32 {
        let quantity = self.quantity.unwrap_or(0).max(0);
        u32::try_from(quantity).unwrap_or(u32::MAX)
    }

    /// Level shown in the preview, before validation. An empty field
    /// leaves the level unchanged.
    pub fn preview_level(&self, current: u32) -> u32 {
        if self.quantity.is_none() {
            return current;
        }
        new_stock_level(current, self.kind, self.preview_quantity())
    }

    pub fn increment(&mut self) {
        self.quantity = Some(self.quantity.unwrap_or(0).saturating_add(1).max(1));
    }

    /// No-op on an empty field.
    pub fn decrement(&mut self) {
        if let Some(q) = self.quantity {
            self.quantity = Some(q.saturating_sub(1).max(0));
        }
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity.is_some_and(|q| q > 0)
    }

    /// Checks in order: presence, sign, over-removal, reason.
    ///
    /// `set` accepts an entered zero; `in` and `out` need a strictly
    /// positive quantity. An empty field never passes.
    pub fn validate(&self, current: u32) -> Result<StockAdjustment, AdjustmentError> {
        let Some(raw) = self.quantity else {
            return Err(AdjustmentError::MissingQuantity);
        };
        let zero_allowed = self.kind == AdjustmentKind::Set;
        if raw < 0 || (raw == 0 && !zero_allowed) {
            return Err(AdjustmentError::NonPositiveQuantity);
        }
        let quantity = u32::try_from(raw).map_err(|_| AdjustmentError::QuantityTooLarge)?;

        if self.kind == AdjustmentKind::Out && quantity > current {
            return Err(AdjustmentError::ExceedsCurrentStock {
                requested: quantity,
                available: current,
            });
        }

        let reason = self.effective_reason();
        if reason.is_empty() {
            return Err(AdjustmentError::MissingReason);
        }

        let notes = self.notes.trim();
        Ok(StockAdjustment {
            kind: self.kind,
            quantity,
            reason,
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(kind: AdjustmentKind, quantity: i64, reason: &str) -> StockAdjustmentDraft {
        StockAdjustmentDraft {
            kind,
            quantity: Some(quantity),
            reason: reason.to_string(),
            ..StockAdjustmentDraft::default()
        }
    }

    #[test]
    fn test_new_stock_level() {
        assert_eq!(new_stock_level(10, AdjustmentKind::In, 5), 15);
        assert_eq!(new_stock_level(10, AdjustmentKind::Out, 4), 6);
        assert_eq!(new_stock_level(10, AdjustmentKind::Out, 15), 0);
        assert_eq!(new_stock_level(10, AdjustmentKind::Set, 3), 3);
        assert_eq!(new_stock_level(10, AdjustmentKind::Set, 0), 0);
        assert_eq!(new_stock_level(u32::MAX, AdjustmentKind::In, 1), u32::MAX);
    }

    #[test]
    fn test_new_stock_level_over_range() {
        for current in 0..20u32 {
            for qty in 0..20u32 {
                assert_eq!(new_stock_level(current, AdjustmentKind::In, qty), current + qty);
                assert_eq!(
                    new_stock_level(current, AdjustmentKind::Out, qty),
                    current.saturating_sub(qty)
                );
                assert_eq!(new_stock_level(current, AdjustmentKind::Set, qty), qty);
            }
        }
    }

    #[test]
    fn test_movement_quantity() {
        assert_eq!(movement_quantity(10, AdjustmentKind::In, 5), 5);
        assert_eq!(movement_quantity(10, AdjustmentKind::Out, 5), -5);
        assert_eq!(movement_quantity(10, AdjustmentKind::Set, 4), -6);
        assert_eq!(movement_quantity(10, AdjustmentKind::Set, 12), 2);
    }

    #[test]
    fn test_stock_in_accepted() {
        let adjustment = draft(AdjustmentKind::In, 5, "Purchase Order")
            .validate(10)
            .unwrap();
        assert_eq!(
            adjustment,
            StockAdjustment {
                kind: AdjustmentKind::In,
                quantity: 5,
                reason: "Purchase Order".to_string(),
                notes: None,
            }
        );
        assert_eq!(new_stock_level(10, adjustment.kind, adjustment.quantity), 15);
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        for qty in [0, -1, -100] {
            for kind in [AdjustmentKind::In, AdjustmentKind::Out] {
                assert_eq!(
                    draft(kind, qty, "Sale").validate(10),
                    Err(AdjustmentError::NonPositiveQuantity)
                );
            }
        }
        assert_eq!(
            draft(AdjustmentKind::Set, -1, "Stock Audit").validate(10),
            Err(AdjustmentError::NonPositiveQuantity)
        );
    }

    #[test]
    fn test_set_to_zero_accepted() {
        let adjustment = draft(AdjustmentKind::Set, 0, "Stock Audit")
            .validate(10)
            .unwrap();
        assert_eq!(adjustment.kind, AdjustmentKind::Set);
        assert_eq!(adjustment.quantity, 0);
        assert_eq!(adjustment.reason, "Stock Audit");
        assert_eq!(adjustment.notes, None);
    }

    #[test]
    fn test_empty_quantity_rejected_for_every_kind() {
        for kind in AdjustmentKind::ALL {
            let d = StockAdjustmentDraft {
                kind,
                reason: "Stock Audit".to_string(),
                ..StockAdjustmentDraft::default()
            };
            assert_eq!(d.validate(10), Err(AdjustmentError::MissingQuantity));
        }
    }

    #[test]
    fn test_set_with_blank_or_garbage_input_rejected() {
        for input in ["", "   ", "abc", "2.5"] {
            let mut d = draft(AdjustmentKind::Set, 7, "Stock Audit");
            d.set_quantity_input(input);
            assert_eq!(d.quantity, None, "input {:?}", input);
            assert_eq!(d.validate(10), Err(AdjustmentError::MissingQuantity));
        }
    }

    #[test]
    fn test_typed_zero_is_kept_apart_from_empty() {
        let mut d = draft(AdjustmentKind::Set, 5, "Stock Audit");
        d.set_quantity_input(" 0 ");
        assert_eq!(d.quantity, Some(0));
        assert_eq!(d.quantity_text(), "0");
        assert_eq!(d.validate(10).unwrap().quantity, 0);

        d.set_quantity_input("");
        assert_eq!(d.quantity_text(), "");
    }

    #[test]
    fn test_over_removal_rejected() {
        assert_eq!(
            draft(AdjustmentKind::Out, 15, "Sale").validate(10),
            Err(AdjustmentError::ExceedsCurrentStock {
                requested: 15,
                available: 10
            })
        );
        assert!(draft(AdjustmentKind::Out, 10, "Sale").validate(10).is_ok());
    }

    #[test]
    fn test_quantity_checked_before_reason() {
        assert_eq!(
            draft(AdjustmentKind::Out, 0, "").validate(10),
            Err(AdjustmentError::NonPositiveQuantity)
        );
        assert!(matches!(
            draft(AdjustmentKind::Out, 11, "").validate(10),
            Err(AdjustmentError::ExceedsCurrentStock { .. })
        ));
    }

    #[test]
    fn test_blank_reason_rejected() {
        for reason in ["", "   ", "\t\n"] {
            assert_eq!(
                draft(AdjustmentKind::In, 1, reason).validate(0),
                Err(AdjustmentError::MissingReason)
            );
        }
    }

    #[test]
    fn test_other_reason_uses_custom_text() {
        let mut d = draft(AdjustmentKind::In, 2, OTHER_REASON);
        d.custom_reason = "  Found in back room ".to_string();
        assert_eq!(d.validate(0).unwrap().reason, "Found in back room");

        d.custom_reason = "   ".to_string();
        assert_eq!(d.validate(0).unwrap().reason, OTHER_REASON);
    }

    #[test]
    fn test_notes_trimmed_or_none() {
        let mut d = draft(AdjustmentKind::In, 1, "Sale");
        d.notes = "  counted twice  ".to_string();
        assert_eq!(d.validate(0).unwrap().notes.as_deref(), Some("counted twice"));
        d.notes = "  ".to_string();
        assert_eq!(d.validate(0).unwrap().notes, None);
    }

    #[test]
    fn test_quantity_too_large() {
        let d = draft(AdjustmentKind::In, i64::from(u32::MAX) + 1, "Sale");
        assert_eq!(d.validate(0), Err(AdjustmentError::QuantityTooLarge));
    }

    #[test]
    fn test_steppers_never_go_negative() {
        let mut d = StockAdjustmentDraft::default();
        d.decrement();
        assert_eq!(d.quantity, None);
        assert!(!d.can_decrement());
        d.increment();
        d.increment();
        assert_eq!(d.quantity, Some(2));
        assert!(d.can_decrement());
        d.decrement();
        d.decrement();
        d.decrement();
        assert_eq!(d.quantity, Some(0));
        d.quantity = Some(-7);
        d.increment();
        assert_eq!(d.quantity, Some(1));
    }

    #[test]
    fn test_preview_level_clamps_negative_input() {
        let d = draft(AdjustmentKind::In, -3, "");
        assert_eq!(d.preview_level(10), 10);
        let empty = StockAdjustmentDraft {
            kind: AdjustmentKind::Set,
            ..StockAdjustmentDraft::default()
        };
        assert_eq!(empty.preview_level(10), 10);
    }

    #[test]
    fn test_kind_serde_names() {
        for kind in AdjustmentKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AdjustmentError::NonPositiveQuantity.to_string(),
            "Quantity must be greater than 0"
        );
        assert_eq!(
            AdjustmentError::ExceedsCurrentStock {
                requested: 15,
                available: 10
            }
            .to_string(),
            "Cannot remove 15 units: only 10 in stock"
        );
    }

    #[test]
    fn test_reason_options_end_with_other() {
        assert_eq!(REASON_OPTIONS.last().map(|r| r.label), Some(OTHER_REASON));
        assert!(REASON_OPTIONS.iter().any(|r| r.label == "Stock Audit"));
    }
}
