pub mod api_key_list;
pub mod balance_display;
pub mod confirm_dialog;
pub mod copy_button;
pub mod failed_view;
pub mod filters;
pub mod format;
pub mod invoice_list;
pub mod list_view;
pub mod ln_address_list;
pub mod payment_list;
pub mod qr_code;
pub mod table;
pub mod toast;
pub mod use_remote;

// Re-export components
pub use api_key_list::{api_key_controller, ApiKeyList};
pub use balance_display::BalanceDisplay;
pub use copy_button::CopyButton;
pub use failed_view::FailedView;
pub use invoice_list::{invoice_controller, InvoiceList};
pub use list_view::{retry, ListView};
pub use ln_address_list::{ln_address_controller, LnAddressList};
pub use payment_list::{payment_controller, PaymentList};
pub use qr_code::QrCode;
pub use toast::{provide_toaster, use_toaster, ToastStack, Toaster};
pub use use_remote::{
    provide_cache_registry, use_cache_registry, use_remote_list, CacheRegistry, FetchState,
};
