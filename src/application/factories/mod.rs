/// Factories for application-layer object creation
mod emitter_factory;

pub use emitter_factory::EmitterFactory;
