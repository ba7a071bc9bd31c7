/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Side-panel note buffer.
//!
//! Content lives in memory and is only persisted on an explicit
//! [`NoteBuffer::save`]. The mode is a label: it changes the placeholder and
//! the download file name, never the content.

use crate::error::UnknownNoteMode;
use crate::storage::{KeyValueStore, NOTEPAD_CONTENT_KEY, NOTEPAD_MODE_KEY};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text the notepad starts with when nothing was saved.
pub const DEFAULT_NOTE_CONTENT: &str = "// Welcome to your notepad!\n\
// You can write code or take notes here\n\
\n\
function helloWorld() {\n  console.log(\"Hello from your video call!\");\n}\n\
\n\
// Meeting Notes:\n\
// - \n\
// - \n\
// - ";

/// MIME type of exported notes.
pub const DOWNLOAD_MIME_TYPE: &str = "text/plain";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteMode {
    #[default]
    Code,
    Notes,
}

impl NoteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteMode::Code => "code",
            NoteMode::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoteMode::Code => "Code",
            NoteMode::Notes => "Notes",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            NoteMode::Code => "Write your code here...",
            NoteMode::Notes => "Take your notes here...",
        }
    }
}

impl fmt::Display for NoteMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteMode {
    type Err = UnknownNoteMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(NoteMode::Code),
            "notes" => Ok(NoteMode::Notes),
            other => Err(UnknownNoteMode(other.to_string())),
        }
    }
}

/// A file ready to be handed to the browser's download mechanism.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// `{mode}-{YYYY-MM-DD}.txt`
pub fn download_file_name(mode: NoteMode, date: NaiveDate) -> String {
    format!("{}-{}.txt", mode.as_str(), date.format("%Y-%m-%d"))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteBuffer {
    content: String,
    mode: NoteMode,
}

impl Default for NoteBuffer {
    fn default() -> Self {
        Self {
            content: DEFAULT_NOTE_CONTENT.to_string(),
            mode: NoteMode::default(),
        }
    }
}

impl NoteBuffer {
    pub fn new(content: impl Into<String>, mode: NoteMode) -> Self {
        Self {
            content: content.into(),
            mode,
        }
    }

    /// Builds the buffer from whatever a previous [`NoteBuffer::save`] left in
    /// `storage`. Missing, unreadable or unknown values fall back to the
    /// defaults independently.
    pub fn restore<S: KeyValueStore + ?Sized>(storage: &S) -> Self {
        let mut buffer = Self::default();
        match storage.get(NOTEPAD_CONTENT_KEY) {
            Ok(Some(content)) => buffer.content = content,
            Ok(None) => {}
            Err(e) => log::warn!("Could not restore note content: {e}"),
        }
        match storage.get(NOTEPAD_MODE_KEY) {
            Ok(Some(mode)) => match mode.parse() {
                Ok(mode) => buffer.mode = mode,
                Err(e) => log::warn!("Ignoring saved note mode: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not restore note mode: {e}"),
        }
        buffer
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> NoteMode {
        self.mode
    }

    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    pub fn set_mode(&mut self, mode: NoteMode) {
        self.mode = mode;
    }

    /// Number of newline-delimited segments; an empty buffer has one line.
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Length in UTF-16 code units, the unit the browser reports for text
    /// fields.
    pub fn char_count(&self) -> usize {
        self.content.encode_utf16().count()
    }

    /// Empties the in-memory content. Storage is left alone.
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Writes content and mode under the fixed notepad keys.
    pub fn save<S: KeyValueStore + ?Sized>(&self, storage: &S) {
        if let Err(e) = storage.set(NOTEPAD_CONTENT_KEY, &self.content) {
            log::warn!("Could not save note content: {e}");
            return;
        }
        if let Err(e) = storage.set(NOTEPAD_MODE_KEY, self.mode.as_str()) {
            log::warn!("Could not save note mode: {e}");
            return;
        }
        log::debug!(
            "Saved {} characters of {} to storage",
            self.char_count(),
            self.mode
        );
    }

    pub fn download_artifact(&self, date: NaiveDate) -> DownloadArtifact {
        DownloadArtifact {
            file_name: download_file_name(self.mode, date),
            mime_type: DOWNLOAD_MIME_TYPE,
            contents: self.content.clone(),
        }
    }
}
