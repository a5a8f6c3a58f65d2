// Server functions module is always available (contains #[server] macros)
pub mod backends;
pub mod functions;

// Server-only modules
#[cfg(feature = "ssr")]
pub mod client;

#[cfg(feature = "ssr")]
pub use client::WalletClient;
#[cfg(feature = "ssr")]
pub use functions::AppState;
