pub mod account_repo;
pub mod log_repo;
pub mod routine_repo;

pub use account_repo::AccountRepository;
pub use log_repo::LogRepository;
pub use routine_repo::RoutineRepository;
