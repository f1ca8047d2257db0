pub mod user;
pub mod contribution;

pub use user::*;
pub use contribution::*;
