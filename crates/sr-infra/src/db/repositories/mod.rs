mod target_repo;

pub use target_repo::DieselTargetRepository;
