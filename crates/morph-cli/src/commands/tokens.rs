//! Tokens command implementation

use crate::error::Result;

/// Run the tokens command
pub fn run_tokens(path: &str) -> Result<()> {
    for segment in morph_path::tokenize(path)? {
        println!("{segment}");
    }
    Ok(())
}
