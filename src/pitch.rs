//! Pitch names and transposition for the note row under the diagram.

use std::fmt;

use crate::error::{FretboardError, Result};

const SHARP_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
const FLAT_NAMES: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// A pitch class with a preferred spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pitch {
    /// Semitones above C, 0..12.
    pub pitch_class: u8,
    /// Spell accidentals as flats instead of sharps.
    pub prefer_flats: bool,
}

impl Pitch {
    /// Parse a name like `E`, `f#`, `Bb`, or `E2`. The octave number, if
    /// any, is ignored.
    pub fn parse(name: &str) -> Result<Pitch> {
        let unknown = || FretboardError::UnknownPitch(name.to_string());
        let trimmed = name.trim();
        let mut chars = trimmed.chars();

        let step = chars.next().ok_or_else(unknown)?;
        let base: i32 = match step.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(unknown()),
        };

        let rest = chars.as_str();
        let accidentals_end = rest.find(|c| c != '#' && c != 'b').unwrap_or(rest.len());
        let (accidentals, octave) = rest.split_at(accidentals_end);
        if !octave.is_empty() && octave.trim_start_matches('-').parse::<u32>().is_err() {
            return Err(unknown());
        }

        let alter: i32 = accidentals
            .chars()
            .map(|c| if c == '#' { 1 } else { -1 })
            .sum();

        Ok(Pitch {
            pitch_class: (base + alter).rem_euclid(12) as u8,
            prefer_flats: accidentals.contains('b'),
        })
    }

    /// The pitch `semitones` above (or below, if negative) this one.
    pub fn transpose(&self, semitones: i32) -> Pitch {
        Pitch {
            pitch_class: (self.pitch_class as i32 + semitones).rem_euclid(12) as u8,
            prefer_flats: self.prefer_flats,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = if self.prefer_flats { &FLAT_NAMES } else { &SHARP_NAMES };
        f.write_str(names[self.pitch_class as usize % 12])
    }
}

/// Names the note sounding on a string stopped at a given fret.
pub trait NoteSpeller {
    fn transpose(&self, open: &str, semitones: u32) -> Result<String>;
}

/// Default speller backed by `Pitch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PitchSpeller;

impl NoteSpeller for PitchSpeller {
    fn transpose(&self, open: &str, semitones: u32) -> Result<String> {
        Ok(Pitch::parse(open)?.transpose((semitones % 12) as i32).to_string())
    }
}
