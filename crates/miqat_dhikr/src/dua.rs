//! Supplication (dua) table and deterministic selection.
//!
//! Nothing here draws randomness: the caller supplies a seed (a day
//! number, a tap count), and the same seed always yields the same dua.
//! That keeps the "random supplication" display reproducible and the
//! library pure.

use serde::Serialize;

/// A supplication with translation and source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dua {
    pub arabic: &'static str,
    pub translation: &'static str,
    /// Where the supplication is reported.
    pub source: &'static str,
}

/// The built-in supplication table.
pub const DUAS: [Dua; 8] = [
    Dua {
        arabic: "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الْآخِرَةِ حَسَنَةً وَقِنَا عَذَابَ النَّارِ",
        translation: "Our Lord, give us good in this world and good in the \
                      Hereafter, and protect us from the punishment of the Fire.",
        source: "Quran 2:201",
    },
    Dua {
        arabic: "رَبِّ اشْرَحْ لِي صَدْرِي وَيَسِّرْ لِي أَمْرِي",
        translation: "My Lord, expand for me my chest and ease for me my task.",
        source: "Quran 20:25-26",
    },
    Dua {
        arabic: "رَبِّ زِدْنِي عِلْمًا",
        translation: "My Lord, increase me in knowledge.",
        source: "Quran 20:114",
    },
    Dua {
        arabic: "حَسْبُنَا اللَّهُ وَنِعْمَ الْوَكِيلُ",
        translation: "Sufficient for us is Allah, and He is the best disposer \
                      of affairs.",
        source: "Quran 3:173",
    },
    Dua {
        arabic: "رَبَّنَا لَا تُزِغْ قُلُوبَنَا بَعْدَ إِذْ هَدَيْتَنَا",
        translation: "Our Lord, let not our hearts deviate after You have \
                      guided us.",
        source: "Quran 3:8",
    },
    Dua {
        arabic: "اللَّهُمَّ أَعِنِّي عَلَى ذِكْرِكَ وَشُكْرِكَ وَحُسْنِ عِبَادَتِكَ",
        translation: "O Allah, help me to remember You, to thank You, and to \
                      worship You well.",
        source: "Abu Dawud 1522",
    },
    Dua {
        arabic: "اللَّهُمَّ إِنِّي أَسْأَلُكَ الْهُدَى وَالتُّقَى وَالْعَفَافَ وَالْغِنَى",
        translation: "O Allah, I ask You for guidance, piety, chastity, and \
                      contentment.",
        source: "Muslim 2721",
    },
    Dua {
        arabic: "رَبَّنَا هَبْ لَنَا مِنْ أَزْوَاجِنَا وَذُرِّيَّاتِنَا قُرَّةَ أَعْيُنٍ",
        translation: "Our Lord, grant us from among our spouses and offspring \
                      comfort to our eyes.",
        source: "Quran 25:74",
    },
];

/// Deterministic selection over the dua table.
#[derive(Debug, Clone, Copy)]
pub struct DuaDeck {
    duas: &'static [Dua],
}

impl DuaDeck {
    /// Deck over the built-in table.
    pub fn builtin() -> Self {
        Self { duas: &DUAS }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.duas.len()
    }

    /// Whether the deck is empty (the built-in deck never is).
    pub fn is_empty(&self) -> bool {
        self.duas.is_empty()
    }

    /// Pick by seed: the same seed always yields the same dua, and
    /// consecutive seeds walk the whole table before repeating.
    pub fn pick(&self, seed: u64) -> &'static Dua {
        &self.duas[(seed % self.duas.len() as u64) as usize]
    }
}
