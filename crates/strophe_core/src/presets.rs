//! Preset reveal configurations for the bundled poem
//!
//! One ready-made segment tree per reveal granularity, from an all-at-once
//! reveal down to character-by-character pacing on the opening word. These
//! double as worked examples of the config tree's expressive range.

use crate::entry::Entry;
use crate::segment::{LeafSegment, Segment};
use crate::style::{EnterTransition, StyleMap};

const STANZA_ONE: &str =
    "here i sit, aside the once murky, now alight once scared, now curious.";
const STANZA_TWO: &str =
    "but a stream cannot widen forever. as it winds on, can i take refuge here? here i am.";

/// Ready-made segment trees for the bundled poem
pub struct RevealPreset;

impl RevealPreset {
    // ========================================================================
    // Poem and stanza granularity
    // ========================================================================

    /// The full poem as a single value, revealed at once after a short hold
    pub fn whole_poem() -> Segment {
        LeafSegment::new([format!("{STANZA_ONE} {STANZA_TWO}")])
            .with_before_all_delay(400)
            .into()
    }

    /// Stanza granularity with the same pacing for every stanza
    pub fn stanzas() -> Segment {
        LeafSegment::new([
            Entry::text(STANZA_ONE),
            Entry::stanza_break(),
            Entry::text(STANZA_TWO),
        ])
        .with_before_all_delay(300)
        .into()
    }

    /// Stanza granularity where each stanza carries its own pacing
    pub fn stanzas_individually_paced() -> Segment {
        Segment::parent(vec![
            LeafSegment::new([Entry::text(STANZA_ONE), Entry::stanza_break()])
                .with_before_all_delay(10_000)
                .into(),
            LeafSegment::new([STANZA_TWO]).into(),
        ])
    }

    // ========================================================================
    // Line granularity
    // ========================================================================

    /// Line granularity where each line carries its own pacing; the opening
    /// line is restyled
    pub fn lines_individually_paced() -> Segment {
        Segment::parent(vec![
            LeafSegment::new([
                Entry::text("here i sit, aside the once murky, now alight"),
                Entry::line_break(),
            ])
            .with_before_all_delay(10_000)
            .with_style(StyleMap::new().with("font-family", "Roboto"))
            .into(),
            LeafSegment::new([Entry::text("once scared, now curious."), Entry::line_break()])
                .into(),
            LeafSegment::new([
                Entry::text("but a stream cannot widen forever."),
                Entry::line_break(),
            ])
            .with_before_all_delay(10_000)
            .into(),
            LeafSegment::new([
                Entry::text("as it winds on, can i take refuge here? here i am."),
                Entry::line_break(),
            ])
            .into(),
        ])
    }

    // ========================================================================
    // Word granularity
    // ========================================================================

    /// Word granularity across the first stanza, then the rest at once
    pub fn first_stanza_words() -> Segment {
        Segment::parent(vec![
            LeafSegment::new([
                Entry::text("here"),
                Entry::text("i"),
                Entry::text("sit,"),
                Entry::text("aside"),
                Entry::text("the"),
                Entry::text("once"),
                Entry::text("murky,"),
                Entry::text("now"),
                Entry::text("alight"),
                Entry::line_break(),
                Entry::text("once"),
                Entry::text("scared,"),
                Entry::text("now"),
                Entry::text("curious."),
                Entry::line_break(),
            ])
            .with_before_each_delay(30)
            .into(),
            LeafSegment::new([STANZA_TWO]).into(),
        ])
    }

    /// Word granularity across the first stanza in two pacing groups, then
    /// the rest at once
    pub fn first_stanza_word_groups() -> Segment {
        Segment::parent(vec![
            LeafSegment::new(["here", "i", "sit,", "aside", "the", "once", "murky,"])
                .with_before_each_delay(30)
                .into(),
            LeafSegment::new(["now", "alight", "once", "scared,", "now", "curious."])
                .with_before_each_delay(300)
                .into(),
            LeafSegment::new([STANZA_TWO]).into(),
        ])
    }

    // ========================================================================
    // Character granularity
    // ========================================================================

    /// Character granularity on the opening word, word pacing for the rest
    /// of the first stanza, then the second stanza at once
    pub fn opening_characters() -> Segment {
        Segment::parent(vec![
            LeafSegment::new(["h", "e", "r", "e"])
                .with_before_each_delay(20)
                .into(),
            LeafSegment::new([
                "i", "sit,", "aside", "the", "once", "murky,", "now", "alight", "once",
                "scared,", "now", "curious.",
            ])
            .with_before_each_delay(300)
            .into(),
            LeafSegment::new([STANZA_TWO]).into(),
        ])
    }

    // ========================================================================
    // Nested phrase segments
    // ========================================================================

    /// The opening line split into phrase segments, each with its own pacing
    /// and entrance transition, nested stanza > line > segment
    pub fn opening_line_segments() -> Segment {
        Segment::parent(vec![Segment::parent(vec![
            LeafSegment::new(["here", "i", "sit"])
                .with_before_each_delay(800)
                .with_enter_transition(EnterTransition::Fade)
                .into(),
            LeafSegment::new([", ", "aside the once murky"])
                .with_before_all_delay(400)
                .with_before_each_delay(200)
                .with_enter_transition(EnterTransition::BottomSlide)
                .into(),
            LeafSegment::new([", now ", "alight"])
                .with_before_each_delay(300)
                .into(),
        ])])
    }
}
