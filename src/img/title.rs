//! ## Disk title
//!
//! Each layout keeps the title in a different place.  DOM-30 disks also carry a disk number
//! just ahead of the title.

use log::{debug,warn};
use super::{ByteSource,DiskFormat};
use super::names::*;

/// Value reported for a field that could not be located
pub const NULL_FIELD: &str = "NULL";

/// Human readable information about the disk as a whole
#[derive(Clone,Debug,PartialEq)]
pub struct DiskInfo {
    pub format: DiskFormat,
    pub title: String,
    /// only DOM-30 disks have this
    pub disk_number: Option<String>
}

fn field<S: ByteSource + ?Sized>(src: &S,start: usize,length: usize) -> String {
    crate::latin1_from_bytes(src.read_bytes(start,length)).trim_start().to_string()
}

/// Read the title, and disk number if applicable.
/// Leading whitespace is trimmed, everything else is left as found.
pub fn read_title<S: ByteSource + ?Sized>(src: &S,fmt: &DiskFormat) -> DiskInfo {
    let layout = fmt.layout();
    let (title,disk_number) = match fmt {
        DiskFormat::SmartPianoSoft => match src.find(PLAYER_SIGNATURE,0) {
            Some(pos) => {
                debug!("player signature at {}",pos);
                (field(src,pos + SMART_PIANOSOFT_TITLE_OFFSET,layout.title_len),None)
            },
            None => {
                warn!("player signature not found, cannot read title");
                (NULL_FIELD.to_string(),None)
            }
        },
        DiskFormat::PianoSoftPlus => (field(src,PIANOSOFT_PLUS_TITLE_POS,layout.title_len),None),
        DiskFormat::Dom30 { disk_number_pos, .. } => (
            field(src,disk_number_pos + DOM30_DISK_NUMBER_LEN,layout.title_len),
            Some(field(src,*disk_number_pos,DOM30_DISK_NUMBER_LEN))
        )
    };
    DiskInfo {
        format: *fmt,
        title,
        disk_number
    }
}
