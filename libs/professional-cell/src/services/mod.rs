pub mod availability;
pub mod professional;
pub mod scheduling;

pub use availability::AvailabilityService;
pub use professional::ProfessionalService;
pub use scheduling::SchedulingService;
