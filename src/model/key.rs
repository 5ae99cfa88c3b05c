use serde::{Deserialize, Serialize};

/// The twelve pitch classes, sharp spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl PitchClass {
    /// Convert from numeric index (0 = C, 1 = C#, ..., 11 = B)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(PitchClass::C),
            1 => Some(PitchClass::Cs),
            2 => Some(PitchClass::D),
            3 => Some(PitchClass::Ds),
            4 => Some(PitchClass::E),
            5 => Some(PitchClass::F),
            6 => Some(PitchClass::Fs),
            7 => Some(PitchClass::G),
            8 => Some(PitchClass::Gs),
            9 => Some(PitchClass::A),
            10 => Some(PitchClass::As),
            11 => Some(PitchClass::B),
            _ => None,
        }
    }

    /// Convert to numeric index (0 = C, 1 = C#, ..., 11 = B)
    pub fn to_index(self) -> u8 {
        match self {
            PitchClass::C => 0,
            PitchClass::Cs => 1,
            PitchClass::D => 2,
            PitchClass::Ds => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::Fs => 6,
            PitchClass::G => 7,
            PitchClass::Gs => 8,
            PitchClass::A => 9,
            PitchClass::As => 10,
            PitchClass::B => 11,
        }
    }

    /// Standard notation (e.g., "C", "F#", "A#")
    pub fn notation(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }
}

/// Major or Minor scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Major,
    Minor,
}

/// Musical key: a pitch class combined with a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MusicalKey {
    pub pitch_class: PitchClass,
    pub mode: Mode,
}

impl MusicalKey {
    pub fn new(pitch_class: PitchClass, mode: Mode) -> Self {
        Self { pitch_class, mode }
    }

    /// Build from the numeric pitch/mode pair used by analysis tags
    /// (pitch 0-11, mode 0 = minor, 1 = major)
    ///
    /// Returns None when either value is outside the recognized range.
    pub fn from_indices(pitch: u8, mode_flag: u8) -> Option<Self> {
        let pitch_class = PitchClass::from_index(pitch)?;
        let mode = match mode_flag {
            0 => Mode::Minor,
            1 => Mode::Major,
            _ => return None,
        };
        Some(Self { pitch_class, mode })
    }

    /// Parse tag text like "F#m", "Ab" or "C"
    ///
    /// Sharps and flats are both accepted; a trailing "m" marks minor.
    /// Returns None for anything unrecognized.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (base, mode) = match text.strip_suffix('m') {
            Some(stripped) => (stripped, Mode::Minor),
            None => (text, Mode::Major),
        };

        let mut chars = base.chars();
        let semitone: i8 = match chars.next()?.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };

        let adjustment: i8 = match chars.as_str() {
            "" => 0,
            "#" => 1,
            "b" => -1,
            _ => return None,
        };

        let pitch_class = PitchClass::from_index((semitone + adjustment).rem_euclid(12) as u8)?;
        Some(Self { pitch_class, mode })
    }

    /// Compact notation as written in tags (e.g., "F#m")
    pub fn notation(&self) -> String {
        let suffix = match self.mode {
            Mode::Major => "",
            Mode::Minor => "m",
        };
        format!("{}{}", self.pitch_class.notation(), suffix)
    }

    /// Human-readable key name (e.g., "F# Minor")
    pub fn name(&self) -> String {
        let mode = match self.mode {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        };
        format!("{} {}", self.pitch_class.notation(), mode)
    }
}
