//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List operations return
//! empty `Vec`s when nothing matches; update-by-id returns `Option` so the
//! caller can map `None` to a not-found response.

pub mod area_repo;
pub mod criteria_repo;
pub mod event_repo;
pub mod office_head_repo;
pub mod office_repo;
pub mod requirement_repo;
pub mod setup_repo;

pub use area_repo::AreaRepo;
pub use criteria_repo::CriteriaRepo;
pub use event_repo::EventRepo;
pub use office_head_repo::OfficeHeadRepo;
pub use office_repo::OfficeRepo;
pub use requirement_repo::RequirementRepo;
pub use setup_repo::SetupRepo;
