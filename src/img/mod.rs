//! # Disk Image Module
//!
//! A Disklavier image is an undifferentiated dump of a floppy disk.  There is no header that tells
//! us the layout, so everything here works by searching the bytes for signatures.
//!
//! ## Byte Sources
//!
//! The `ByteSource` trait is the read-only view that all of the scanners borrow.  It is implemented
//! for the owned `DiskImage` and also for plain byte slices, which is convenient for testing.
//! All offsets are byte offsets.  Searches only go forward and only find exact byte sequences.
//!
//! ## Disk Formats
//!
//! The `DiskFormat` enumeration is the result of detection and is passed to every later stage.
//! The fixed constants of each layout are kept in the `names` submodule as `FormatLayout` values,
//! so the scanners select behavior by looking up data rather than comparing tags.
//! The DOM-30 variant also carries two positions that can only be found by searching.
//!
//! ## Scanners
//!
//! * `detect` decides the format
//! * `title` reads the disk title and disk number
//! * `toc` reads the track titles from the table of contents
//! * `tracks` locates the track payloads

pub mod names;
pub mod detect;
pub mod title;
pub mod toc;
pub mod tracks;

use std::fmt;
use log::trace;
use names::FormatLayout;

/// Enumerates disk image errors.  The `Display` trait will print equivalent long message.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("unknown disk format")]
    UnknownFormat,
    #[error("signature `{0}` was not found")]
    SignatureNotFound(String),
    #[error("track {track} start and stop points do not appear to be sequential (start {start}, stop {stop})")]
    NonSequentialBoundaries {
        track: usize,
        start: usize,
        stop: usize
    },
    #[error("track {track} ends at {stop} but the nearest end after its start {start} is at {nearest}")]
    MisalignedBoundary {
        track: usize,
        start: usize,
        stop: usize,
        nearest: usize
    }
}

/// Read-only view of the image bytes.
/// Only `as_bytes` needs to be provided, the rest are built on it.
pub trait ByteSource {
    fn as_bytes(&self) -> &[u8];
    fn len(&self) -> usize {
        self.as_bytes().len()
    }
    /// Get up to `length` bytes starting at `start`.
    /// The result is clamped at the end of the buffer, so it may be short or even empty.
    fn read_bytes(&self,start: usize,length: usize) -> &[u8] {
        let buf = self.as_bytes();
        let beg = usize::min(start,buf.len());
        let end = usize::min(start.saturating_add(length),buf.len());
        &buf[beg..end]
    }
    /// Find the first exact match of `patt` at or after byte offset `from`.
    fn find(&self,patt: &[u8],from: usize) -> Option<usize> {
        let buf = self.as_bytes();
        if patt.len()==0 || from >= buf.len() {
            return None;
        }
        trace!("search for {} from {}",hex::encode(patt),from);
        buf[from..].windows(patt.len()).position(|w| w==patt).map(|p| p + from)
    }
    /// Find every byte aligned match of `patt`, in ascending order.
    /// Overlapping matches are all reported.
    fn find_all(&self,patt: &[u8]) -> Vec<usize> {
        let mut ans: Vec<usize> = Vec::new();
        let mut curs = 0;
        while let Some(pos) = self.find(patt,curs) {
            ans.push(pos);
            curs = pos + 1;
        }
        trace!("found {} of {}",ans.len(),hex::encode(patt));
        ans
    }
}

impl ByteSource for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteSource for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Wrapper for the raw image data.  Once loaded it is never changed.
pub struct DiskImage {
    data: Vec<u8>
}

impl DiskImage {
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            data
        }
    }
}

impl ByteSource for DiskImage {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// The supported disk layouts.  This is the result of detection.
/// Only DOM-30 has positions that have to be found by searching.
#[derive(PartialEq,Eq,Clone,Copy,Debug)]
pub enum DiskFormat {
    SmartPianoSoft,
    PianoSoftPlus,
    Dom30 {
        /// offset of the second directory signature, the real table of contents follows it
        toc_start: usize,
        /// offset of the disk number field, the disk title follows it
        disk_number_pos: usize
    }
}

impl DiskFormat {
    /// Fixed constants for this layout.
    pub fn layout(&self) -> &'static FormatLayout {
        match self {
            Self::SmartPianoSoft => &names::SMART_PIANOSOFT,
            Self::PianoSoftPlus => &names::PIANOSOFT_PLUS,
            Self::Dom30 { .. } => &names::DOM30
        }
    }
    /// Extension of extracted track files, including the dot.
    pub fn extension(&self) -> &'static str {
        self.layout().extension
    }
}

impl fmt::Display for DiskFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"{}",self.layout().name)
    }
}
