pub mod memory;
pub mod seed;
pub mod traits;

// Re-export
pub use memory::MemorySubjectRepository;
pub use seed::seed_subjects;
pub use traits::SubjectRepository;
