use serde::Serialize;

use crate::{PromptDeckError, Result};

/// One-click bundle of prompt text and sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub label: &'static str,
    pub prompt: &'static str,
    pub temperature: f64,
    pub max_tokens: i64,
    pub top_p: f64,
}

static PRESETS: [Preset; 5] = [
    Preset {
        label: "Creative",
        prompt: "You are a storyteller from another galaxy. Write a short tale (150-200 words) about a planet where time flows backward and the citizens age in reverse. Describe how they live, love, and remember.",
        temperature: 0.9,
        max_tokens: 120,
        top_p: 1.0,
    },
    Preset {
        label: "Informational",
        prompt: "Write a 2-paragraph summary of how renewable energy sources like wind and solar help reduce carbon emissions. Include a simple example of how solar panels work on a house.",
        temperature: 0.6,
        max_tokens: 180,
        top_p: 0.8,
    },
    Preset {
        label: "Translational ",
        prompt: "Translate the following English sentence into French, Spanish, and Japanese: 'The future of technology is shaped by curiosity, collaboration, and creativity.'",
        temperature: 0.5,
        max_tokens: 160,
        top_p: 0.9,
    },
    Preset {
        label: "Factual",
        prompt: "What year was the World Wide Web introduced to the public, and who is credited with inventing it?",
        temperature: 0.4,
        max_tokens: 140,
        top_p: 0.7,
    },
    Preset {
        label: "Technical",
        prompt: "You are a software engineer. Briefly explain how HTTP GET and POST methods differ, and give a real-world analogy comparing them to ordering food at a restaurant.",
        temperature: 0.6,
        max_tokens: 220,
        top_p: 0.9,
    },
];

/// All presets in display order.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Exact label match.
pub fn find(label: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.label == label)
}

/// Accepts a 1-based index (`2`) or a case-insensitive label (`factual`).
pub fn resolve(input: &str) -> Result<&'static Preset> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        if index == 0 || index > PRESETS.len() {
            return Err(PromptDeckError::UnknownPreset(format!(
                "index {} (use 1-{})",
                index,
                PRESETS.len()
            )));
        }
        return Ok(&PRESETS[index - 1]);
    }

    PRESETS
        .iter()
        .find(|p| p.label.trim().eq_ignore_ascii_case(input))
        .ok_or_else(|| PromptDeckError::UnknownPreset(input.to_string()))
}
