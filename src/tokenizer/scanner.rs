//! # Compiled Scanner
//!
//! All pattern definitions are merged into one regex of the form
//! `(?P<descent_d0>...)|(?P<descent_d1>...)|...`. The regex crate resolves alternation
//! leftmost-first, so at any position the earliest definition wins. The
//! winning definition is found by looking up the first participating group.

use regex::{Captures, Match, Regex};
use tracing::{debug, error};

use super::{
    pattern::{PatternDef, UNKNOWN},
    token::{Token, TokenizerError, TokenizerResult},
};

const GROUP_PREFIX: &str = "descent_d";

#[derive(Debug, Clone)]
pub struct Scanner {
    regex: Regex,
    definitions: Vec<PatternDef>,
    /// Capture group index of each definition, in definition order.
    slots: Vec<usize>,
}

impl Scanner {
    pub fn compile(definitions: &[PatternDef]) -> TokenizerResult<Self> {
        let union = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| format!("(?P<{}{}>{})", GROUP_PREFIX, i, def.source()))
            .collect::<Vec<_>>()
            .join("|");

        let regex = Regex::new(&union).map_err(|e| {
            let err = TokenizerError::InvalidPattern {
                name: "*".to_string(),
                message: e.to_string(),
            };
            error!("{}", err);
            err
        })?;

        let slots = (0..definitions.len())
            .map(|i| {
                let group = format!("{}{}", GROUP_PREFIX, i);
                regex
                    .capture_names()
                    .position(|name| name == Some(group.as_str()))
                    .ok_or_else(|| TokenizerError::InvalidPattern {
                        name: definitions[i].name().to_string(),
                        message: "definition group missing from compiled scanner".to_string(),
                    })
            })
            .collect::<TokenizerResult<Vec<_>>>()?;

        debug!(
            definitions = definitions.len(),
            "compiled scanner over {} definitions",
            definitions.len()
        );

        Ok(Self {
            regex,
            definitions: definitions.to_vec(),
            slots,
        })
    }

    /// Scans `input` into tokens.
    ///
    /// Gaps between matches (and any unmatched tail) are passed to
    /// `on_unknown`, whose token is appended in place of the gap.
    pub fn scan<H>(
        &self,
        input: &str,
        keep_whitespace: bool,
        on_unknown: H,
    ) -> TokenizerResult<Vec<Token>>
    where
        H: Fn(&str, &str, usize) -> TokenizerResult<Token>,
    {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        for caps in self.regex.captures_iter(input) {
            let Some((index, m)) = self.winner(&caps) else {
                continue;
            };
            let def = &self.definitions[index];

            // An empty whitespace match does not end an unknown span.
            if m.is_empty() && def.is_whitespace() {
                continue;
            }

            if m.start() > last_end {
                tokens.push(on_unknown(UNKNOWN, &input[last_end..m.start()], last_end)?);
                last_end = m.start();
            }

            if m.is_empty() {
                let err = TokenizerError::EmptyMatch {
                    name: def.name().to_string(),
                    position: m.start(),
                };
                error!("{}", err);
                return Err(err);
            }

            last_end = m.end();
            if def.is_whitespace() && !keep_whitespace {
                continue;
            }
            tokens.push(Token::new(def.name(), m.as_str(), m.start()));
        }

        if last_end < input.len() {
            tokens.push(on_unknown(UNKNOWN, &input[last_end..], last_end)?);
        }

        Ok(tokens)
    }

    fn winner<'h>(&self, caps: &Captures<'h>) -> Option<(usize, Match<'h>)> {
        self.slots
            .iter()
            .enumerate()
            .find_map(|(i, &slot)| caps.get(slot).map(|m| (i, m)))
    }
}
