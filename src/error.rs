/// Lexing errors.
///
/// Raised while scanning source text into tokens, before any parsing
/// happens.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token stream. A parse error aborts the whole program; no partial tree is
/// produced.
pub mod parse_error;
/// Composed pipeline errors.
///
/// Wraps whichever stage failed first so a caller can report any failure
/// uniformly.
pub mod pipeline_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unbound names, arity mismatches and invalid operands.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
pub use runtime_error::RuntimeError;
