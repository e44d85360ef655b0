pub mod send_notification;

pub use send_notification::SendNotificationUseCase;
