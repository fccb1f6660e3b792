pub mod category;
pub mod task;
pub mod template;
pub mod user;

pub use category::*;
pub use task::*;
pub use template::*;
pub use user::*;
