mod assume;
mod r#enum;

pub use assume::*;
pub use r#enum::*;
