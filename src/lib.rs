//! # `disklav` main library
//!
//! This library finds and extracts the performance tracks stored on Yamaha Disklavier floppy disk images.
//! The images are raw dumps, so nothing about the layout can be read from a header.  Instead the
//! library searches the bytes for signatures that only appear in one of the supported layouts.
//!
//! ## Architecture
//!
//! Everything is built around the `img::ByteSource` trait, a read-only view of the image bytes with
//! forward pattern search.  The engine is a chain of scanners that borrow the source:
//! * `img::detect` identifies the `img::DiskFormat`, including positions that must be searched for
//! * `img::title` reads the disk title and, for DOM-30, the disk number
//! * `img::toc` enumerates the track titles in the table of contents
//! * `img::tracks` pairs track start and end markers into validated `img::tracks::TrackBoundary` records
//!
//! The `commands` module is the glue that prints reports and writes the extracted tracks.
//!
//! ## Disk Formats
//!
//! As of this writing `disklav` supports
//! * Smart PianoSoft (tracks are Standard MIDI Files)
//! * PianoSoft Plus (tracks are E-Seq files)
//! * PianoSoft DOM-30 (tracks are E-Seq files)

pub mod img;
pub mod commands;

use img::DiskImage;
use log::info;

pub type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Read the whole image file into memory.
pub fn load_img(img_path: &str) -> Result<DiskImage,DYNERR> {
    match std::fs::read(img_path) {
        Ok(disk_img_data) => {
            info!("read {} bytes from {}",disk_img_data.len(),img_path);
            Ok(DiskImage::from_bytes(disk_img_data))
        },
        Err(e) => Err(Box::new(e))
    }
}

/// Decode bytes as latin-1, which is how the disk titles are treated.
pub fn latin1_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| *b as char).collect()
}

/// Name used to build the track filenames: the file name of the image without its extension.
pub fn image_base_name(img_path: &str) -> String {
    let path = std::path::Path::new(img_path);
    match path.file_stem() {
        Some(stem) => stem.to_string_lossy().to_string(),
        None => "image".to_string()
    }
}

#[test]
fn test_base_name() {
    assert_eq!(image_base_name("/path/to/chopin.img"),"chopin");
    assert_eq!(image_base_name("disk.tar.img"),"disk.tar");
    assert_eq!(image_base_name("noext"),"noext");
}

#[test]
fn test_latin1() {
    assert_eq!(latin1_from_bytes(b"Caf\xe9"),"Caf\u{e9}");
    assert_eq!(latin1_from_bytes(&[0,65]),"\u{0}A");
}
