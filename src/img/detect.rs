//! ## Format detection
//!
//! There is no version field on these disks, so detection is a heuristic.
//! Rules are tried in a fixed order and the first match wins.  The rarest
//! signature is checked first so that it cannot be shadowed by the generic directory.

use log::{info,debug,error};
use super::{ByteSource,DiskFormat,Error};
use super::names::*;

/// Decide the format of the image.  For DOM-30 the table of contents and disk number
/// positions are also found, since every later step needs them.
pub fn detect<S: ByteSource + ?Sized>(src: &S) -> Result<DiskFormat,Error> {
    if let Some(pos) = src.find(SMART_PIANOSOFT_SIGNATURE,0) {
        info!("identified Smart PianoSoft signature at {}",pos);
        return Ok(DiskFormat::SmartPianoSoft);
    }
    let dir_pos = match src.find(DIRECTORY_SIGNATURE,0) {
        Some(pos) => pos,
        None => {
            error!("no format signature was found");
            return Err(Error::UnknownFormat);
        }
    };
    debug!("directory signature at {}",dir_pos);
    match dir_pos {
        PIANOSOFT_PLUS_DIRECTORY_POS => {
            info!("identified PianoSoft Plus");
            Ok(DiskFormat::PianoSoftPlus)
        },
        DOM30_DIRECTORY_POS => {
            info!("identified PianoSoft DOM-30");
            locate_dom30_toc(src,dir_pos)
        },
        _ => {
            error!("directory signature at unexpected position {}",dir_pos);
            Err(Error::UnknownFormat)
        }
    }
}

/// The first directory on a DOM-30 disk is not the one we want, the real one is found
/// by searching past it, and the disk number is found by searching past that.
fn locate_dom30_toc<S: ByteSource + ?Sized>(src: &S,first_dir: usize) -> Result<DiskFormat,Error> {
    let toc_start = match src.find(DIRECTORY_SIGNATURE,first_dir + 1) {
        Some(pos) => pos,
        None => {
            error!("DOM-30 second directory is missing");
            return Err(Error::SignatureNotFound(String::from_utf8_lossy(DIRECTORY_SIGNATURE).to_string()));
        }
    };
    let disk_number_pos = match src.find(DISK_NUMBER_SIGNATURE,toc_start + 1) {
        Some(pos) => pos,
        None => {
            error!("DOM-30 disk number is missing");
            return Err(Error::SignatureNotFound(String::from_utf8_lossy(DISK_NUMBER_SIGNATURE).to_string()));
        }
    };
    debug!("DOM-30 directory at {}, disk number at {}",toc_start,disk_number_pos);
    Ok(DiskFormat::Dom30 { toc_start, disk_number_pos })
}
