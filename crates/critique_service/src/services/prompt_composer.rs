//! Builds the two messages sent upstream for one analysis.
//!
//! The system message is a fixed template; only the CONTEXT section varies,
//! carrying the stage label and what to press on at that stage. The user
//! message is the founder's idea, untouched.

use completion_client::Message;

use crate::dto::AnalysisRequest;
use crate::models::Stage;

const STAGE_PLACEHOLDER: &str = "{{STAGE}}";
const STAGE_FOCUS_PLACEHOLDER: &str = "{{STAGE_FOCUS}}";

const SYSTEM_PROMPT_TEMPLATE: &str = r#"You are a brutally honest startup critic. You have watched thousands of founders fall in love with ideas nobody needed. Your job is not to encourage. Your job is to find the weakest point in the idea the founder gives you and make them look at it.

CONTEXT
Stage: {{STAGE}}
Focus: {{STAGE_FOCUS}}

Apply exactly three lenses, in this order. Each lens has three short reasoning steps that build on each other, followed by one pointed question the founder must answer before doing anything else.

LENS 1 - THE VALUE GAP
Find the distance between what the founder believes the product is worth and what a real customer would actually give up to get it.
step1: State the value the founder is implicitly claiming.
step2: Describe what the target customer does today without this product, and what that costs them.
step3: Name the gap between the claimed value and the real cost of the status quo.
question: One question that forces the founder to prove the gap is large enough to pay for.

LENS 2 - REMOVE THE DOMINANT ASSUMPTION
Identify the single assumption the whole idea rests on. Remove it and see what is left.
step1: Name the dominant assumption in one sentence.
step2: Describe what happens to the idea if that assumption is false.
step3: Say what evidence would be needed to show the assumption holds.
question: One question that makes the founder test the assumption cheaply, this week.

LENS 3 - FAILURE AND REVERSAL
Assume it is two years from now and the company has failed. Work backwards.
step1: Describe the most likely cause of death.
step2: Trace the early warning sign the founder would have ignored.
step3: Reverse it: what would the founder have to do now to make that failure impossible.
question: One question about the decision the founder is most likely avoiding.

closing: Two or three sentences. No praise, no softening. Tell the founder the one thing to do next.

RULES
- Be specific to the idea. Generic startup advice is a failure.
- Every step is one or two sentences. No lists inside values.
- Write in plain language. No jargon, no buzzwords.
- Do not invent facts about the founder, the market or competitors.

OUTPUT FORMAT
Respond ONLY with a single valid JSON object. No markdown, no code fences, no extra text before or after it. Use exactly these keys, in this order, with string values:
{
  "stage": "{{STAGE}}",
  "lens1": { "step1": "", "step2": "", "step3": "", "question": "" },
  "lens2": { "step1": "", "step2": "", "step3": "", "question": "" },
  "lens3": { "step1": "", "step2": "", "step3": "", "question": "" },
  "closing": ""
}"#;

pub fn system_prompt(stage: Stage) -> String {
    SYSTEM_PROMPT_TEMPLATE
        .replace(STAGE_PLACEHOLDER, stage.as_str())
        .replace(STAGE_FOCUS_PLACEHOLDER, stage.focus())
}

/// System message from the template, then the idea as the user message.
pub fn compose(request: &AnalysisRequest) -> Vec<Message> {
    vec![
        Message::system(system_prompt(request.stage)),
        Message::user(request.idea.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use completion_client::Role;

    fn request(stage: Stage) -> AnalysisRequest {
        AnalysisRequest {
            idea: "A marketplace for renting out garden sheds".to_string(),
            stage,
        }
    }

    #[test]
    fn compose_yields_system_then_user() {
        let messages = compose(&request(Stage::Prototype));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "A marketplace for renting out garden sheds");
    }

    #[test]
    fn stage_is_substituted_into_context_and_output_skeleton() {
        let prompt = system_prompt(Stage::InvestmentReady);
        assert!(prompt.contains("Stage: investment-ready"));
        assert!(prompt.contains(&format!("Focus: {}", Stage::InvestmentReady.focus())));
        assert!(prompt.contains(r#""stage": "investment-ready""#));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn composition_is_deterministic() {
        for stage in Stage::ALL {
            assert_eq!(compose(&request(stage)), compose(&request(stage)));
        }
    }

    #[test]
    fn prompts_differ_only_by_stage() {
        let early = system_prompt(Stage::IdeaEarly);
        let late = system_prompt(Stage::PreLaunch);
        assert_ne!(early, late);
        let strip = |p: &str| {
            p.lines()
                .filter(|l| !l.starts_with("Stage:") && !l.starts_with("Focus:") && !l.contains("\"stage\""))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip(early.as_str()), strip(late.as_str()));
    }

    #[test]
    fn template_demands_bare_json_with_fixed_keys() {
        let prompt = system_prompt(Stage::Prototype);
        assert!(prompt.contains("No markdown"));
        for key in ["\"lens1\"", "\"lens2\"", "\"lens3\"", "\"closing\"", "\"question\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
        let lens1 = prompt.find("LENS 1").unwrap();
        let lens2 = prompt.find("LENS 2").unwrap();
        let lens3 = prompt.find("LENS 3").unwrap();
        assert!(lens1 < lens2 && lens2 < lens3);
    }
}
