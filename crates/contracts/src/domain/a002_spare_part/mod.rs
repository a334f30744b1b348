pub mod aggregate;
pub mod stock_adjustment;

pub use aggregate::{
    filter_spare_types, SparePart, SparePartCondition, SparePartId, SparePartInfoDto,
    SpareTypeOption, StockStatus, SupplierOption, DESCRIPTION_BRIEF_MAX,
    DESCRIPTION_EXPANDED_MAX,
};
pub use stock_adjustment::{
    movement_quantity, new_stock_level, parse_quantity, AdjustmentError, AdjustmentKind,
    ReasonOption, StockAdjustment, StockAdjustmentDraft, OTHER_REASON, REASON_OPTIONS,
};
