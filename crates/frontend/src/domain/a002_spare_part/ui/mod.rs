pub mod information_form;
pub mod list;
pub mod stock_adjust;
