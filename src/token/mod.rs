// Public exports.
pub use char_source::{CharSource, Position};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
pub use token_stream::TokenStream;

// Public mods.
pub mod char_source;
pub mod token;

// Private mods.
mod scanner;
mod token_stream;
