//! Prompt construction for screenplay requests.

use masterscript_core::Concept;
use serde::{Deserialize, Serialize};

/// A fixed cast member the model must write for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    /// Character name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Personality brief
    pub traits: String,
}

impl CastMember {
    fn new(name: &str, age: u32, traits: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            traits: traits.to_string(),
        }
    }
}

/// Knobs for the instruction sent alongside the concept.
///
/// # Example
///
/// ```toml
/// [prompt]
/// channel = "Paligram TV"
/// min_scenes = 8
/// max_scenes = 12
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Broadcast channels the drama is written for
    pub channel: String,
    /// Minimum page count
    pub min_pages: u32,
    /// Maximum page count
    pub max_pages: u32,
    /// Minimum scene count
    pub min_scenes: u32,
    /// Maximum scene count
    pub max_scenes: u32,
    /// Recurring cast
    pub cast: Vec<CastMember>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            channel: "'Paligram TV' বা 'Number One Gramin TV'".to_string(),
            min_pages: 3,
            max_pages: 4,
            min_scenes: 8,
            max_scenes: 12,
            cast: vec![
                CastMember::new("সালাম", 20, "চটপটে ও বুদ্ধিমান।"),
                CastMember::new("শাহাদাত", 20, "গম্ভীর ও পরিশ্রমী।"),
                CastMember::new("তুষি", 20, "সাহসী ও প্রতিবাদী।"),
                CastMember::new(
                    "তুষার",
                    10,
                    "ছোট বাচ্চা, তার সংলাপগুলো সব সময় খুব ছোট ছোট (যেমন: \"কেন বাবা?\", \"আমি যাবো না\", \"ভাত দাও\") হতে হবে।",
                ),
            ],
        }
    }
}

/// Render a number with Bengali digits.
///
/// ```
/// assert_eq!(masterscript_models::bengali_digits(12), "১২");
/// ```
pub fn bengali_digits(n: u32) -> String {
    const DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];
    n.to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| DIGITS[d as usize]))
        .collect()
}

/// Build the full instruction for one concept.
///
/// The concept is embedded verbatim; the output shape is enforced separately
/// through the response schema.
pub fn build_prompt(concept: &Concept, config: &PromptConfig) -> String {
    let pages = format!(
        "{}-{}",
        bengali_digits(config.min_pages),
        bengali_digits(config.max_pages)
    );
    let scenes = format!(
        "{}-{}",
        bengali_digits(config.min_scenes),
        bengali_digits(config.max_scenes)
    );

    let mut lines = vec![
        format!(
            "তুমি একজন মাস্টার লেভেলের চিত্রনাট্যকার। {} এর জন্য একটি {pages} পৃষ্ঠার ({scenes}টি দৃশ্য) প্রফেশনাল গ্রামীণ নাটক স্ক্রিপ্ট তৈরি করো।",
            config.channel
        ),
        String::new(),
        format!("কনসেপ্ট: \"{}\"", concept.as_str()),
        String::new(),
        "নির্দেশনা:".to_string(),
        "১. ভাষা: সম্পূর্ণ বাংলা। গ্রামীণ আঞ্চলিক শব্দ ব্যবহার করো যাতে নাটকটি জীবন্ত মনে হয়।".to_string(),
        format!(
            "২. দৈর্ঘ্য: {pages} পৃষ্ঠা। দৃশ্য সংখ্যা {scenes}টি হতে হবে। কাহিনী ছোট কিন্তু অত্যন্ত আকর্ষণীয় এবং প্রো-লেভেলের হতে হবে।"
        ),
    ];
    if !config.cast.is_empty() {
        lines.push("৩. চরিত্র:".to_string());
        lines.extend(config.cast.iter().map(|member| {
            format!(
                "   - {} ({}): {}",
                member.name,
                bengali_digits(member.age),
                member.traits
            )
        }));
    }
    lines.extend([
        "৪. ফরম্যাট: দৃশ্য নম্বর, লোকেশন, সময়, বিস্তারিত অ্যাকশন, চরিত্রের সংলাপ (আবেগসহ), এবং এডিটিং নোট।".to_string(),
        "৫. চরিত্রের গভীরতা: সংলাপগুলো যেন স্বাভাবিক মনে হয়, রোবটিক নয়।".to_string(),
        String::new(),
        "আউটপুটটি শুধুমাত্র নিচের JSON ফরম্যাটে দাও:".to_string(),
    ]);
    lines.join("\n")
}
