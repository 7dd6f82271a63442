pub mod booking;
pub mod conflict;
pub mod lifecycle;
pub mod payment;

pub use booking::BookingService;
pub use conflict::ConflictService;
pub use lifecycle::AppointmentLifecycle;
pub use payment::PaymentService;
