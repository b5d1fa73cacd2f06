//! Cycling typewriter headline.
//!
//! Types each word out character by character, holds it, deletes it faster,
//! pauses briefly, then moves to the next word — forever.

use std::time::{Duration, Instant};

const TYPE_SPEED: Duration = Duration::from_millis(100);
const DELETE_SPEED: Duration = Duration::from_millis(50);
const HOLD_AT_FULL_WORD: Duration = Duration::from_millis(2000);
const PAUSE_BETWEEN_WORDS: Duration = Duration::from_millis(500);

pub struct Typewriter {
    words: Vec<String>,
    word_index: usize,
    char_index: usize,
    deleting: bool,
    next_step_at: Instant,
}

impl Typewriter {
    pub fn new(words: Vec<String>, start: Instant) -> Self {
        Self {
            words,
            word_index: 0,
            char_index: 0,
            deleting: false,
            next_step_at: start,
        }
    }

    /// Text currently on screen.
    pub fn text(&self) -> &str {
        match self.words.get(self.word_index) {
            Some(word) => {
                let end = word
                    .char_indices()
                    .nth(self.char_index)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                &word[..end]
            }
            None => "",
        }
    }

    /// Advance as many steps as are due by `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.words.is_empty() {
            return;
        }
        while now >= self.next_step_at {
            let word_len = self.words[self.word_index].chars().count();

            if self.deleting {
                if self.char_index > 0 {
                    self.char_index -= 1;
                }
                if self.char_index == 0 {
                    self.deleting = false;
                    self.word_index = (self.word_index + 1) % self.words.len();
                    self.next_step_at += PAUSE_BETWEEN_WORDS;
                } else {
                    self.next_step_at += DELETE_SPEED;
                }
            } else {
                if self.char_index < word_len {
                    self.char_index += 1;
                }
                if self.char_index == word_len {
                    self.deleting = true;
                    self.next_step_at += HOLD_AT_FULL_WORD;
                } else {
                    self.next_step_at += TYPE_SPEED;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn writer(start: Instant) -> Typewriter {
        Typewriter::new(vec!["Hi".to_string(), "Go".to_string()], start)
    }

    #[test]
    fn test_types_one_char_per_step() {
        let start = Instant::now();
        let mut tw = writer(start);
        assert_eq!(tw.text(), "");

        tw.tick(start);
        assert_eq!(tw.text(), "H");
        tw.tick(start + Duration::from_millis(100));
        assert_eq!(tw.text(), "Hi");
    }

    #[test]
    fn test_holds_then_deletes_faster() {
        let start = Instant::now();
        let mut tw = writer(start);
        // Type "Hi" fully: steps at 0ms and 100ms.
        tw.tick(start + Duration::from_millis(100));
        assert_eq!(tw.text(), "Hi");

        // Still holding 1s in.
        tw.tick(start + Duration::from_millis(1100));
        assert_eq!(tw.text(), "Hi");

        // Hold ends 2s after the full word; deletion runs at 50ms.
        tw.tick(start + Duration::from_millis(2100));
        assert_eq!(tw.text(), "H");
    }

    #[test]
    fn test_cycles_to_next_word() {
        let start = Instant::now();
        let mut tw = writer(start);
        // 0,100: type. 2100: delete 'i'. 2150: delete 'H' -> word flips.
        tw.tick(start + Duration::from_millis(2150));
        assert_eq!(tw.text(), "");

        // 500ms pause, then the second word starts typing.
        tw.tick(start + Duration::from_millis(2650));
        assert_eq!(tw.text(), "G");
    }

    #[test]
    fn test_empty_word_list_is_inert() {
        let start = Instant::now();
        let mut tw = Typewriter::new(Vec::new(), start);
        tw.tick(start + Duration::from_secs(60));
        assert_eq!(tw.text(), "");
    }
}
