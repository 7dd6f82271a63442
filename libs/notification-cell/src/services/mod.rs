pub mod dispatch;
pub mod gateway;
pub mod template;

pub use dispatch::NotificationService;
pub use gateway::{ConsoleGateway, MessageGateway};
pub use template::render;
