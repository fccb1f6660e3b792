pub mod identity_service;
pub mod category_service;
pub mod task_service;
pub mod template_service;
pub mod user_service;

pub use category_service::*;
pub use task_service::*;
pub use template_service::*;
pub use user_service::*;
