pub mod bridge;
pub mod palette;
pub mod panel;
pub mod system;
pub mod translations;
