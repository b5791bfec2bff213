/// Quill SDK - Script codec.
///
/// Converts scripts among three forms: raw binary, hex text, and the
/// human-readable ASM text form. A script is an ordered sequence of
/// chunks, each an opcode with an optional payload. Binary decoding is
/// resilient by contract: truncated wire data degrades to partial or
/// empty chunk payloads instead of an error.

pub mod chunk;
pub mod opcodes;
pub mod script;

mod error;
pub use chunk::ScriptChunk;
pub use error::ScriptError;
pub use script::{LockingScript, Script, UnlockingScript};
