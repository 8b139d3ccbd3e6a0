pub mod confirm;
pub mod helpers;

pub use confirm::ConfirmModal;
