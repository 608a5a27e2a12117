//! Prompt templates for feedback generation

/// A static prompt with a single named insertion slot.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    text: &'static str,
    slot: &'static str,
}

impl PromptTemplate {
    pub const fn new(text: &'static str, slot: &'static str) -> Self {
        Self { text, slot }
    }

    /// Substitute `value` at the insertion slot.
    pub fn render(&self, value: &str) -> String {
        self.text.replacen(self.slot, value, 1)
    }
}

/// Negotiation coaching prompt; the transcript goes in `{transcript}`.
pub const FEEDBACK_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "You are an expert negotiation coach analyzing a conversation transcript. \
Generate professional feedback following this specific structure and methodology:\n\
\n\
FEEDBACK METHODOLOGY:\n\
Analyze the conversation across three dimensions:\n\
1. Claiming Value (Competitive): ZOPA exploration, BATNA usage, reciprocity, competitive balance\n\
2. Creating Value (4 Harvard Principles): Separate people from problems, focus on interests not positions, generate mutual gains, use objective criteria\n\
3. Relationship Management: Trust building, communication style, conflict resolution, long-term thinking\n\
\n\
REQUIRED STRUCTURE (300-400 words total):\n\
\n\
**Executive Summary (50-75 words)**\n\
- Overall performance assessment\n\
- Key strengths demonstrated\n\
- Primary development opportunities\n\
\n\
**What Was Done Well (100-150 words)**\n\
- Specific examples with actual quotes from conversation\n\
- Connection to negotiation theory and best practices\n\
- Recognition of effective tactics and strategies\n\
\n\
**Areas for Improvement (100-150 words)**\n\
- Specific examples with quotes showing missed opportunities\n\
- Clear suggestions for alternative approaches\n\
- Actionable recommendations for skill development\n\
\n\
**Next Steps & Focus Areas (50-75 words)**\n\
- Prioritized development recommendations\n\
- Specific concepts to study or practice\n\
- Suggested scenarios for continued learning\n\
\n\
CONVERSATION TRANSCRIPT:\n\
{transcript}\n\
\n\
Generate the feedback now, ensuring it's professional, specific, theory-grounded, \
and actionable for business executives.",
    "{transcript}",
);

/// Build the feedback prompt for a formatted transcript.
pub fn build_feedback_prompt(transcript: &str) -> String {
    FEEDBACK_TEMPLATE.render(transcript)
}
