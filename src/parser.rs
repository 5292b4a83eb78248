//! Entry point tying the tokenizer and a grammar together.

use tracing::{debug, instrument};

use crate::analyzer::{core::Parser, state::Element};
use crate::error::DescentResult;
use crate::tokenizer::token::Tokenizer;

/// Tokenizes `input` and runs `grammar` over it.
///
/// Returns the resulting forest on a match and `None` on an ordinary
/// failure. The grammar is not required to consume every token; end it with
/// `end_of_input()` for that.
#[instrument(level = "debug", skip_all)]
pub fn parse<P: Parser>(
    tokenizer: &mut Tokenizer,
    input: &str,
    grammar: &P,
) -> DescentResult<Option<Vec<Element>>> {
    let mut state = tokenizer.tokenize(input)?;
    if !grammar.parse(&mut state)? {
        debug!(cursor = state.cursor(), "grammar did not match");
        return Ok(None);
    }
    debug!(
        cursor = state.cursor(),
        roots = state.stack().len(),
        "grammar matched"
    );
    Ok(Some(state.into_forest()))
}
