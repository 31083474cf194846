// crates/batarong_game/src/dialog.rs
//! Line-based dialog overlay. One line shows at a time; advancing past the
//! last line closes the dialog.

use crate::config::CharacterBook;

pub const DIALOG_MAX_LINES: usize = 16;
pub const DIALOG_LINE_MAX: usize = 160;

/// Everything a caller decides when opening a dialog.
pub struct DialogRequest<'a> {
    pub lines: &'a [&'a str],
    pub speaker: Option<&'a str>,
    /// Character name looked up in the config for a portrait image path.
    pub portrait_key: Option<&'a str>,
    pub freeze_movement: bool,
    pub portrait_visible: bool,
    pub speaker_visible: bool,
}

#[derive(Default)]
pub struct DialogState {
    lines: Vec<String>,
    current: usize,
    active: bool,
    pub freeze_movement: bool,
    pub portrait_visible: bool,
    pub speaker_visible: bool,
    pub speaker: String,
    pub portrait_path: Option<String>,
}

impl DialogState {
    pub fn start(&mut self, request: DialogRequest<'_>, characters: &CharacterBook) {
        if request.lines.is_empty() {
            return;
        }

        self.lines = request
            .lines
            .iter()
            .take(DIALOG_MAX_LINES)
            .map(|line| line.chars().take(DIALOG_LINE_MAX).collect())
            .collect();
        self.current = 0;
        self.active = true;
        self.freeze_movement = request.freeze_movement;
        self.portrait_visible = request.portrait_visible;

        let speaker = request.speaker.unwrap_or("");
        self.speaker_visible = request.speaker_visible && !speaker.is_empty();
        self.speaker = speaker.to_string();

        self.portrait_path = if request.portrait_visible {
            request
                .portrait_key
                .filter(|key| !key.is_empty())
                .map(|key| characters.image_path(key, "images/batarong.bmp").to_string())
        } else {
            None
        };
    }

    pub fn next(&mut self) {
        if !self.active {
            return;
        }
        self.current += 1;
        if self.current >= self.lines.len() {
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.active = false;
        self.portrait_path = None;
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn blocks_movement(&self) -> bool {
        self.active && self.freeze_movement
    }

    pub fn current_line(&self) -> Option<&str> {
        if self.active {
            self.lines.get(self.current).map(String::as_str)
        } else {
            None
        }
    }

    /// 1-based progress for the "i/n" counter.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(lines: &[&str]) -> DialogState {
        let mut dialog = DialogState::default();
        dialog.start(
            DialogRequest {
                lines,
                speaker: None,
                portrait_key: None,
                freeze_movement: false,
                portrait_visible: false,
                speaker_visible: false,
            },
            &CharacterBook::default(),
        );
        dialog
    }

    #[test]
    fn advancing_past_the_last_line_closes() {
        let mut dialog = simple(&["one", "two"]);
        assert_eq!(dialog.current_line(), Some("one"));
        assert_eq!(dialog.progress(), (1, 2));

        dialog.next();
        assert_eq!(dialog.current_line(), Some("two"));

        dialog.next();
        assert!(!dialog.active());
        assert_eq!(dialog.current_line(), None);
    }

    #[test]
    fn empty_request_does_not_open() {
        let dialog = simple(&[]);
        assert!(!dialog.active());
    }

    #[test]
    fn line_count_and_length_are_capped() {
        let lines: Vec<String> = (0..20).map(|i| "x".repeat(200 + i)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let dialog = simple(&refs);

        assert_eq!(dialog.progress().1, DIALOG_MAX_LINES);
        assert_eq!(dialog.current_line().unwrap().len(), DIALOG_LINE_MAX);
    }

    #[test]
    fn long_lines_are_cut_per_character_not_per_byte() {
        // 200 three-byte chars; a byte-based cut would split mid-character.
        let long = "€".repeat(200);
        let dialog = simple(&[long.as_str()]);

        let line = dialog.current_line().unwrap();
        assert_eq!(line.chars().count(), DIALOG_LINE_MAX);
        assert!(line.chars().all(|c| c == '€'));
    }

    #[test]
    fn speaker_needs_both_the_flag_and_a_name() {
        let mut dialog = DialogState::default();
        dialog.start(
            DialogRequest {
                lines: &["hi"],
                speaker: Some(""),
                portrait_key: None,
                freeze_movement: true,
                portrait_visible: false,
                speaker_visible: true,
            },
            &CharacterBook::default(),
        );

        assert!(!dialog.speaker_visible);
        assert!(dialog.blocks_movement());
    }

    #[test]
    fn portrait_path_falls_back_when_unconfigured() {
        let mut dialog = DialogState::default();
        dialog.start(
            DialogRequest {
                lines: &["hi"],
                speaker: Some("Ray"),
                portrait_key: Some("Ray"),
                freeze_movement: false,
                portrait_visible: true,
                speaker_visible: true,
            },
            &CharacterBook::default(),
        );

        assert_eq!(dialog.portrait_path.as_deref(), Some("images/batarong.bmp"));
        assert!(dialog.speaker_visible);
    }

    #[test]
    fn closing_clears_the_portrait() {
        let mut dialog = DialogState::default();
        dialog.start(
            DialogRequest {
                lines: &["hi"],
                speaker: None,
                portrait_key: Some("Ray"),
                freeze_movement: false,
                portrait_visible: true,
                speaker_visible: false,
            },
            &CharacterBook::default(),
        );
        dialog.close();
        assert!(dialog.portrait_path.is_none());
    }
}
