mod operations;
mod preferences;
mod session;
mod signal;
mod store;

pub use operations::OperationLog;
pub use preferences::Preferences;
pub use preferences::PreferencesManager;
pub use session::AuthState;
pub use session::Navigation;
pub use session::Session;
pub use session::guard;
pub use signal::Scope;
pub use signal::Signal;
pub use signal::Subscription;
pub use store::LibraryStore;
