pub mod breaks;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod mode;
pub mod nav;
pub mod session;
pub mod settings;

pub use error::SessionError;
pub use session::Session;
