mod auth;

pub use auth::FileTokenStore;
pub use auth::MemoryTokenStore;
pub use auth::TokenStore;
