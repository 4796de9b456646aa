//! Descriptor files: the per-translation-unit text format.
//!
//! ```text
//! arch 8
//! base
//! name int
//! size 4
//! struct
//! name Point
//! size 8
//! field
//! name x
//! type int
//! offset 0
//! pdepth 0
//! arrsize 0
//! const false
//! isstruct false
//! ```

mod context;
pub mod lexer;
mod parser;


pub use context::Context;
pub use parser::parse;
