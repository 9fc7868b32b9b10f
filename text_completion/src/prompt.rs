use crate::AudienceTier;

const LOWER_DIRECTIVES: &str = "Please explain this in a very simple, friendly way using:
- Short, simple sentences
- Basic vocabulary
- Lots of examples
- Fun and engaging tone
- Include emojis where appropriate";

const UPPER_DIRECTIVES: &str = "Please explain this in an age-appropriate way using:
- Clear explanations
- Some technical terms (but explained)
- Relevant examples
- Educational tone
- Encourage critical thinking";

/// Wraps `question` in the style template for `tier`.
///
/// The question is interpolated as is, nothing is escaped or trimmed.
pub fn build_prompt(question: &str, tier: AudienceTier) -> String {
    let directives = match tier {
        AudienceTier::Lower => LOWER_DIRECTIVES,
        AudienceTier::Upper => UPPER_DIRECTIVES,
    };
    format!(
        "You are talking to a {} student (age {}).\n{}\n\nQuestion: {}",
        tier,
        tier.age_range(),
        directives,
        question
    )
}
