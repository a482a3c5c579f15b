// Job-fit matching: normalize candidate input, ask the oracle, turn its reply into a MatchResult.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod history;
pub mod normalize;
pub mod payload;
pub mod prompts;
pub mod result;

#[cfg(test)]
pub(crate) mod test_support;
