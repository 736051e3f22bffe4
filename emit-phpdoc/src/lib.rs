mod aliases;
mod emitter;
mod native;
mod pretty;

pub use emitter::EmitError;
pub use emitter::EmitErrorKind;
pub use emitter::EmitOptions;
pub use emitter::EmitResult;
pub use emitter::TypePrinter;
pub use native::NativePrinter;
pub use pretty::PrettyPrinter;
