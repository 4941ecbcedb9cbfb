/// Application use cases
mod convert_lockfile;

pub use convert_lockfile::ConvertLockfileUseCase;
