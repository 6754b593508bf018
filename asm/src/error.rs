use crate::token::TokenKind;
use color_print::cprintln;
use thiserror::Error;

/// Fatal assembly errors. Core variants carry the 1-based source line.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unexpected token: {1}")]
    UnexpectedToken(usize, TokenKind),

    #[error("Unrecognized character: `{1}`")]
    UnrecognizedChar(usize, char),

    #[error("Unrecognized number: `{1}`")]
    UnrecognizedNumber(usize, String),

    #[error("Invalid token order")]
    InvalidTokenOrder(usize),

    #[error("Multiply defined label: `{1}`")]
    MultiplyDefinedLabel(usize, String),

    #[error("Invalid operand: {1}")]
    InvalidOperand(usize, String),

    #[error("Unrecognized operation: `{1}`")]
    UnrecognizedOperation(usize, String),

    #[error("Location counter exceeds address space")]
    LocationOverflow(usize),

    #[error("Failed to open file: {0}")]
    LoadFailure(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to generate symbol map")]
    SymbolMap(#[from] serde_yaml::Error),
}

impl Error {
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnexpectedToken(line, _)
            | Error::UnrecognizedChar(line, _)
            | Error::UnrecognizedNumber(line, _)
            | Error::InvalidTokenOrder(line)
            | Error::MultiplyDefinedLabel(line, _)
            | Error::InvalidOperand(line, _)
            | Error::UnrecognizedOperation(line, _)
            | Error::LocationOverflow(line) => Some(*line),
            _ => None,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &str) {
        cprintln!("<red,bold>error</>: {}", self);

        let Some(line_no) = self.line() else {
            cprintln!("     <blue>--></> <underline>{}</>", file);
            return;
        };

        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_no);
        cprintln!("      <blue>|</>");
        let content = source.lines().nth(line_no - 1).unwrap_or("");
        cprintln!(" <blue>{:>4} |</> {}", line_no, content);
        cprintln!("      <blue>|</>");
    }
}
