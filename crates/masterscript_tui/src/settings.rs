//! The `[tui]` configuration section.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Terminal and controller settings.
///
/// # Example
///
/// ```toml
/// [tui]
/// tick_rate_ms = 250
/// status_interval_ms = 3000
/// presets = ["গ্রামের প্রথম ফ্রিল্যান্সার যখন সালাম"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// How long the terminal reader waits for input before emitting a tick
    pub tick_rate_ms: u64,
    /// Period of the loading-message rotation while generating
    pub status_interval_ms: u64,
    /// Concepts picked by "surprise me"
    pub presets: Vec<String>,
    /// Messages rotated while a screenplay is being generated
    pub loading_messages: Vec<String>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            status_interval_ms: 3000,
            presets: [
                "সালামের আধুনিক কৃষি বিপ্লব ও তুষির সমর্থন",
                "তুষারের কৌতুক ও শাহাদাতের গম্ভীর সংগ্রাম",
                "গ্রামের প্রথম ফ্রিল্যান্সার যখন সালাম",
                "তুষি যখন গ্রামের প্রধান সমস্যা সমাধানে সাহসী",
                "শাহাদাত ও সালামের বন্ধুত্বে তুষারের কান্ড",
            ]
            .map(String::from)
            .to_vec(),
            loading_messages: [
                "মাস্টার লেভেল স্টোরি থিঙ্কিং চলছে...",
                "সংলাপগুলো গ্রামীন ধাঁচে প্রফেশনালি লেখা হচ্ছে...",
                "৩-৪ পৃষ্ঠার নিখুঁত চিত্রনাট্য তৈরি হচ্ছে...",
                "তুষারের সংলাপগুলো ছোট করা হচ্ছে...",
                "ন্যাচারাল স্ক্রিপ্ট রাইটিং মাস্টার মুড সক্রিয়...",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl TuiConfig {
    /// Pick one of the preset concepts; `None` when there are none.
    pub fn pick_preset<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.presets.choose(rng).map(String::as_str)
    }
}
