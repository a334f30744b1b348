use crate::shared::notice::Notice;
use contracts::domain::a002_spare_part::{
    SparePartId, StockAdjustment, StockAdjustmentDraft, StockStatus,
};
use leptos::prelude::*;

/// Decides when the draft must go back to defaults: whenever the modal
/// goes from closed to open, or the target spare part changes while open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenTracker {
    was_open: bool,
    last_part: Option<SparePartId>,
}

impl OpenTracker {
    /// Record the latest state; true when the draft should be reset.
    pub fn observe(&mut self, is_open: bool, part: Option<SparePartId>) -> bool {
        let reset = is_open && part.is_some() && (!self.was_open || self.last_part != part);
        self.was_open = is_open;
        self.last_part = part;
        reset
    }
}

#[derive(Clone, Copy)]
pub struct StockAdjustVm {
    pub draft: RwSignal<StockAdjustmentDraft>,
    pub notice: Notice,
    tracker: StoredValue<OpenTracker>,
}

impl StockAdjustVm {
    pub fn new(notice_timeout_ms: u32) -> Self {
        Self {
            draft: RwSignal::new(StockAdjustmentDraft::default()),
            notice: Notice::new(notice_timeout_ms),
            tracker: StoredValue::new(OpenTracker::default()),
        }
    }

    pub fn observe_open(&self, is_open: bool, part: Option<SparePartId>) {
        let mut reset = false;
        self.tracker.update_value(|t| reset = t.observe(is_open, part));
        if reset {
            self.draft.set(StockAdjustmentDraft::default());
            self.notice.clear();
        }
    }

    pub fn new_level(&self, current: u32) -> Signal<u32> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.preview_level(current)))
    }

    /// Validate against `current` and forward to the caller. Closing and
    /// refreshing afterwards is up to the caller.
    pub fn submit_command(&self, current: u32, on_adjust: Callback<StockAdjustment>) {
        let draft = self.draft.get_untracked();
        match draft.validate(current) {
            Ok(adjustment) => {
                log::info!(
                    "Stock adjustment requested: {} {} ({})",
                    adjustment.kind.as_str(),
                    adjustment.quantity,
                    adjustment.reason
                );
                on_adjust.run(adjustment);
            }
            Err(e) => {
                log::debug!("Stock adjustment rejected: {}", e);
                self.notice.error(e.to_string());
            }
        }
    }
}

/// CSS modifier for a status badge
pub fn status_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Low => "badge badge--low",
        StockStatus::Normal => "badge badge--normal",
        StockStatus::High => "badge badge--high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_open_resets() {
        let part = Some(SparePartId::new_v4());
        let mut tracker = OpenTracker::default();
        assert!(tracker.observe(true, part));
        assert!(!tracker.observe(true, part));
    }

    #[test]
    fn test_reopen_for_other_part_resets() {
        let a = Some(SparePartId::new_v4());
        let b = Some(SparePartId::new_v4());
        let mut tracker = OpenTracker::default();
        assert!(tracker.observe(true, a));
        assert!(!tracker.observe(false, None));
        assert!(tracker.observe(true, b));
    }

    #[test]
    fn test_reopen_for_same_part_resets() {
        let a = Some(SparePartId::new_v4());
        let mut tracker = OpenTracker::default();
        tracker.observe(true, a);
        tracker.observe(false, a);
        assert!(tracker.observe(true, a));
    }

    #[test]
    fn test_part_switch_while_open_resets() {
        let a = Some(SparePartId::new_v4());
        let b = Some(SparePartId::new_v4());
        let mut tracker = OpenTracker::default();
        tracker.observe(true, a);
        assert!(tracker.observe(true, b));
    }

    #[test]
    fn test_closed_or_without_part_never_resets() {
        let mut tracker = OpenTracker::default();
        assert!(!tracker.observe(false, Some(SparePartId::new_v4())));
        assert!(!tracker.observe(true, None));
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(StockStatus::Low), "badge badge--low");
        assert_eq!(status_class(StockStatus::High), "badge badge--high");
    }
}
