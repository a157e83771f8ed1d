// Builders for small synthetic images of each format.
// Background is spaces so that table of contents titles are padded the way real disks are,
// and every table ends with a NUL-led entry.
#![allow(dead_code)]

use std::path::{Path,PathBuf};

pub const MTHD: &[u8] = b"MThd\x00\x00\x00\x06\x00\x00\x00\x01\x00\x60MTrk";
pub const SMF_END: [u8;3] = [0xff,0x2f,0x00];
pub const ESEQ_START: [u8;3] = [0xfe,0x00,0x00];
pub const PSP_END: [u8;3] = [0xf2,0x00,0x00];
pub const DOM_END: [u8;3] = [0x00,0x0c,0xf2];

pub fn put(buf: &mut Vec<u8>,pos: usize,dat: &[u8]) {
    buf[pos..pos+dat.len()].copy_from_slice(dat);
}

/// Smart PianoSoft: tracks at 1000..1203 and 1500..1703
pub fn sps_image() -> Vec<u8> {
    let mut buf = vec![0x20u8;4096];
    put(&mut buf,16,b"PDISK");
    put(&mut buf,100,b"P.PLAYER");
    put(&mut buf,130,b"  Chopin Nocturnes");
    put(&mut buf,400,b"\r\n0");
    put(&mut buf,400 + 18,b"Nocturne Op. 9 No. 2...");
    put(&mut buf,400 + 176 + 18,b"Nocturne   Op. 27");
    put(&mut buf,400 + 352 + 18,b"\0");
    put(&mut buf,1000,MTHD);
    put(&mut buf,1200,&SMF_END);
    put(&mut buf,1500,MTHD);
    put(&mut buf,1700,&SMF_END);
    buf
}

/// Smart PianoSoft with the second track moved up against the first: tracks at 1000..1203 and 1203..1703
pub fn sps_back_to_back_image() -> Vec<u8> {
    let mut buf = sps_image();
    put(&mut buf,1500,&[0x20u8;18]);
    put(&mut buf,1203,MTHD);
    buf
}

/// PianoSoft Plus: the first start marker is inside the table of contents,
/// tracks at 13000..13203 and 14000..14503
pub fn psp_image() -> Vec<u8> {
    let mut buf = vec![0x20u8;16384];
    put(&mut buf,7175,b"PIANODIR");
    put(&mut buf,0x1c40,b"The Entertainer");
    put(&mut buf,0x1c40 + 40,&ESEQ_START);
    put(&mut buf,0x1c40 + 80,b"Maple Leaf Rag");
    put(&mut buf,0x1c40 + 160,b"\0");
    put(&mut buf,0x2ed0,b"   Joplin Rags");
    put(&mut buf,13000,&ESEQ_START);
    put(&mut buf,13200,&PSP_END);
    put(&mut buf,14000,&ESEQ_START);
    put(&mut buf,14500,&PSP_END);
    buf
}

/// DOM-30: real directory at 20000, disk number at 21000, tracks at 5000..6003
pub fn dom_image() -> Vec<u8> {
    let mut buf = vec![0x20u8;24576];
    put(&mut buf,3840,b"PIANODIR");
    put(&mut buf,20000,b"PIANODIR");
    put(&mut buf,20000 + 57,b"Clair de Lune");
    put(&mut buf,20000 + 57 + 80,b"\0");
    put(&mut buf,21000,b"PPC-104");
    put(&mut buf,21015,b"Debussy Favorites");
    put(&mut buf,5000,&ESEQ_START);
    put(&mut buf,6000,&DOM_END);
    buf
}

/// Write the image to a file in `dir` and return its path.
pub fn write_img(dir: &Path,name: &str,dat: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path,dat).expect("could not write test image");
    path
}
