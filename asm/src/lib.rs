pub mod codegen;
pub mod collect;
pub mod error;
pub mod ident;
pub mod lexer;
pub mod record;
pub mod token;
pub mod util;

use error::Error;

/// Assemble source text into a flat object.
///
/// Lexing and classification complete before the first pass starts, and the
/// symbol table is frozen before the second pass, so labels may be used
/// before they are defined. The first error stops the run.
pub fn assemble(source: &str) -> Result<Vec<u8>, Error> {
    let lines = lexer::Lexer::new(source).parse()?;
    let records = record::classify_all(lines)?;
    let idents = collect::collect(&records)?;
    let chunks = codegen::generate(&records, &idents)?;
    Ok(codegen::link(&chunks))
}
