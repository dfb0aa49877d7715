//! Domain types.

mod format;
mod login;

pub use format::Format;
pub use login::LoginRecord;
