//! ## Format Names
//!
//! Collection of the positions, lengths, and byte sequences that define each disk layout.
//! None of the layouts has a version field, so these were worked out from real disks.
//!
//! Positions that the layouts share through a search (as opposed to a fixed offset) are
//! signatures here; the scanners decide where to search.

/// Fixed constants of one disk layout.
pub struct FormatLayout {
    /// name printed in reports
    pub name: &'static str,
    /// length of the disk title field
    pub title_len: usize,
    /// distance between table of contents entries
    pub toc_skip: usize,
    /// offset of the title within a table of contents entry
    pub toc_title_offset: usize,
    /// length of the title within a table of contents entry
    pub toc_title_len: usize,
    pub track_start: &'static [u8],
    pub track_end: &'static [u8],
    /// the first start marker is inside the table of contents and is not a track
    pub skip_first_start: bool,
    /// extension of extracted tracks, including the dot
    pub extension: &'static str
}

/// Presence anywhere means Smart PianoSoft
pub const SMART_PIANOSOFT_SIGNATURE: &[u8] = b"PDISK";
/// Directory signature, its position distinguishes PianoSoft Plus from DOM-30
pub const DIRECTORY_SIGNATURE: &[u8] = b"PIANODIR";
/// Smart PianoSoft title is a fixed distance past this
pub const PLAYER_SIGNATURE: &[u8] = b"P.PLAYER";
/// DOM-30 disk number field starts here
pub const DISK_NUMBER_SIGNATURE: &[u8] = b"PPC";
/// Smart PianoSoft table of contents starts here
pub const SMART_PIANOSOFT_TOC_SIGNATURE: &[u8] = b"\x0d\x0a\x30";

/// Directory position on PianoSoft Plus disks (bit 57400)
pub const PIANOSOFT_PLUS_DIRECTORY_POS: usize = 57400/8;
/// First directory position on DOM-30 disks (bit 30720)
pub const DOM30_DIRECTORY_POS: usize = 30720/8;

pub const SMART_PIANOSOFT_TITLE_OFFSET: usize = 30;
pub const PIANOSOFT_PLUS_TITLE_POS: usize = 0x2ed0;
pub const PIANOSOFT_PLUS_TOC_POS: usize = 0x1c40;
pub const DOM30_DISK_NUMBER_LEN: usize = 15;
/// table of contents starts this far past the second directory signature
pub const DOM30_TOC_OFFSET: usize = 57;

pub const SMART_PIANOSOFT: FormatLayout = FormatLayout {
    name: "Smart PianoSoft",
    title_len: 60,
    toc_skip: 176,
    toc_title_offset: 18,
    toc_title_len: 32,
    track_start: b"MThd",
    track_end: &[0xff,0x2f,0x00],
    skip_first_start: false,
    extension: ".mid"
};

pub const PIANOSOFT_PLUS: FormatLayout = FormatLayout {
    name: "PianoSoft Plus",
    title_len: 64,
    toc_skip: 80,
    toc_title_offset: 0,
    toc_title_len: 32,
    track_start: &[0xfe,0x00,0x00],
    track_end: &[0xf2,0x00,0x00],
    skip_first_start: true,
    extension: ".fil"
};

pub const DOM30: FormatLayout = FormatLayout {
    name: "PianoSoft DOM-30",
    title_len: 53,
    toc_skip: 80,
    toc_title_offset: 0,
    toc_title_len: 32,
    track_start: &[0xfe,0x00,0x00],
    track_end: &[0x00,0x0c,0xf2],
    skip_first_start: false,
    extension: ".fil"
};
