use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The founder's current phase, as sent by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    IdeaEarly,
    Prototype,
    PreLaunch,
    InvestmentReady,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::IdeaEarly,
        Stage::Prototype,
        Stage::PreLaunch,
        Stage::InvestmentReady,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::IdeaEarly => "idea-early",
            Stage::Prototype => "prototype",
            Stage::PreLaunch => "pre-launch",
            Stage::InvestmentReady => "investment-ready",
        }
    }

    /// What the critique should press on hardest at this stage.
    pub fn focus(&self) -> &'static str {
        match self {
            Stage::IdeaEarly => {
                "Nothing is built yet. Press on whether the problem is real, frequent and painful \
                 enough that someone would pay to make it go away."
            }
            Stage::Prototype => {
                "A working prototype exists. Press on whether early usage proves value or only \
                 curiosity, and what the founder is mistaking for traction."
            }
            Stage::PreLaunch => {
                "Launch is close. Press on distribution, pricing and exactly where the first \
                 hundred paying customers come from."
            }
            Stage::InvestmentReady => {
                "The founder is preparing to raise. Press on defensibility, the honesty of the \
                 market size claims and why this team wins against better funded competitors."
            }
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStage(pub String);

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == trimmed)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}

/// One critique angle: three reasoning steps and the question they lead to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lens {
    pub step1: String,
    pub step2: String,
    pub step3: String,
    pub question: String,
}

/// The full analysis the model is instructed to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisResult {
    pub stage: String,
    pub lens1: Lens,
    pub lens2: Lens,
    pub lens3: Lens,
    pub closing: String,
}
