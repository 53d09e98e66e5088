//! Dhikr presets: the phrases and their traditional counts.

use crate::counter::TasbihCounter;

/// A devotional phrase with its traditional repetition target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhikrPreset {
    /// Transliterated phrase.
    pub phrase: &'static str,
    /// Arabic text.
    pub arabic: &'static str,
    /// English meaning.
    pub meaning: &'static str,
    /// Traditional count.
    pub target: u32,
}

/// The post-prayer tasbih sequence plus common additions.
pub const DHIKR_PRESETS: [DhikrPreset; 5] = [
    DhikrPreset {
        phrase: "SubhanAllah",
        arabic: "سبحان الله",
        meaning: "Glory be to Allah",
        target: 33,
    },
    DhikrPreset {
        phrase: "Alhamdulillah",
        arabic: "الحمد لله",
        meaning: "Praise be to Allah",
        target: 33,
    },
    DhikrPreset {
        phrase: "Allahu Akbar",
        arabic: "الله أكبر",
        meaning: "Allah is the greatest",
        target: 34,
    },
    DhikrPreset {
        phrase: "Astaghfirullah",
        arabic: "أستغفر الله",
        meaning: "I seek forgiveness from Allah",
        target: 100,
    },
    DhikrPreset {
        phrase: "La ilaha illallah",
        arabic: "لا إله إلا الله",
        meaning: "There is no god but Allah",
        target: 100,
    },
];

impl DhikrPreset {
    /// A counter sized for this preset.
    pub fn counter(&self) -> TasbihCounter {
        TasbihCounter::new(self.target)
    }
}
