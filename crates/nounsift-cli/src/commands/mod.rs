//! Command implementations.
//!
//! Every command returns its rendered output so `main` decides where it goes.

pub mod counts;
pub mod keywords;
pub mod nouns;
pub mod parse;
pub mod similarity;

pub use self::counts::execute_counts;
pub use self::keywords::execute_keywords;
pub use self::nouns::execute_nouns;
pub use self::parse::execute_parse;
pub use self::similarity::execute_similarity;

use crate::error::Result;
use std::io::Read;

/// Use the argument when given, otherwise read all of stdin.
pub(crate) fn input_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
