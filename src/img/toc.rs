//! ## Table of contents
//!
//! The table of contents is a run of equally spaced fixed size entries.  We only use the
//! title field.  There is no entry count, an entry that starts with NUL ends the table.

use log::{debug,error};
use super::{ByteSource,DiskFormat,Error};
use super::names::*;

/// One row of the table of contents
#[derive(Clone,Debug,PartialEq)]
pub struct TrackTitle {
    /// 1-based
    pub number: usize,
    pub title: String
}

/// Find where the first entry begins.
pub fn toc_start<S: ByteSource + ?Sized>(src: &S,fmt: &DiskFormat) -> Result<usize,Error> {
    match fmt {
        DiskFormat::SmartPianoSoft => match src.find(SMART_PIANOSOFT_TOC_SIGNATURE,0) {
            Some(pos) => Ok(pos),
            None => {
                error!("Smart PianoSoft table of contents not found");
                Err(Error::SignatureNotFound(hex::encode(SMART_PIANOSOFT_TOC_SIGNATURE)))
            }
        },
        DiskFormat::PianoSoftPlus => Ok(PIANOSOFT_PLUS_TOC_POS),
        DiskFormat::Dom30 { toc_start, .. } => Ok(toc_start + DOM30_TOC_OFFSET)
    }
}

/// Blank characters between words.  This is the Unicode white space set plus the
/// ASCII separators 0x1c through 0x1f.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Clean up a raw title field: whitespace runs become one space, ends are trimmed,
/// and trailing dots are removed.  Returns None if the field starts with NUL,
/// which marks the end of the table.
pub fn normalize_title(raw: &[u8]) -> Option<String> {
    let text = crate::latin1_from_bytes(raw);
    let collapsed = text.split(is_blank).filter(|w| !w.is_empty()).collect::<Vec<&str>>().join(" ");
    if collapsed.starts_with('\0') {
        return None;
    }
    Some(collapsed.trim_end_matches('.').trim_end_matches(is_blank).to_string())
}

/// Read up to `max_tracks` titles, stopping early at the end of the table.
pub fn scan_toc<S: ByteSource + ?Sized>(src: &S,fmt: &DiskFormat,max_tracks: usize) -> Result<Vec<TrackTitle>,Error> {
    let layout = fmt.layout();
    let start = toc_start(src,fmt)?;
    debug!("table of contents at {}",start);
    let mut ans: Vec<TrackTitle> = Vec::new();
    for i in 0..max_tracks {
        let pos = start + layout.toc_skip*i + layout.toc_title_offset;
        let raw = src.read_bytes(pos,layout.toc_title_len);
        if raw.len()==0 {
            debug!("table of contents runs off the end of the image");
            break;
        }
        match normalize_title(raw) {
            Some(title) => ans.push(TrackTitle { number: i+1, title }),
            None => {
                debug!("end of table at entry {}",i+1);
                break;
            }
        }
    }
    Ok(ans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(buf: &mut Vec<u8>,pos: usize,dat: &[u8]) {
        buf[pos..pos+dat.len()].copy_from_slice(dat);
    }

    #[test]
    fn title_cleanup() {
        assert_eq!(normalize_title(b"  My  Song...   ").unwrap(),"My Song");
        assert_eq!(normalize_title(b"Op. 9\tNo. 2").unwrap(),"Op. 9 No. 2");
        assert_eq!(normalize_title(b"        ").unwrap(),"");
        assert_eq!(normalize_title(b"\0\0\0Track"),None);
        assert_eq!(normalize_title(b"  \0Track"),None);
    }

    #[test]
    fn separators_are_blank() {
        assert_eq!(normalize_title(b"Rhapsody\x1cin\x1f Blue\x1d").unwrap(),"Rhapsody in Blue");
        assert_eq!(normalize_title(b"\x1e\x1e\0"),None);
    }

    #[test]
    fn stops_at_nul() {
        let mut buf = vec![0x20u8;0x2000];
        let entries: [&[u8];4] = [b"Track A",b"Track B",b"\0\0\0\0",b"Track D"];
        for (i,e) in entries.iter().enumerate() {
            put(&mut buf,PIANOSOFT_PLUS_TOC_POS + 80*i,e);
        }
        let titles = scan_toc(&buf,&DiskFormat::PianoSoftPlus,10).unwrap();
        assert_eq!(titles,vec![
            TrackTitle { number: 1, title: "Track A".to_string() },
            TrackTitle { number: 2, title: "Track B".to_string() }
        ]);
    }

    #[test]
    fn bounded_by_count() {
        let mut buf = vec![0x20u8;0x2000];
        for i in 0..5 {
            put(&mut buf,PIANOSOFT_PLUS_TOC_POS + 80*i,b"Etude");
        }
        let titles = scan_toc(&buf,&DiskFormat::PianoSoftPlus,3).unwrap();
        assert_eq!(titles.len(),3);
        assert_eq!(titles[2].number,3);
    }

    #[test]
    fn smart_pianosoft_entries() {
        let mut buf = vec![0u8;2000];
        put(&mut buf,300,b"\r\n0");
        put(&mut buf,300 + 18,format!("{:<32}","Clair de Lune...").as_bytes());
        put(&mut buf,300 + 176 + 18,b"Reverie");
        let titles = scan_toc(&buf,&DiskFormat::SmartPianoSoft,5).unwrap();
        assert_eq!(titles.len(),2);
        assert_eq!(titles[0].title,"Clair de Lune");
        assert_eq!(titles[1].number,2);
    }

    #[test]
    fn smart_pianosoft_missing_toc() {
        let buf = vec![0u8;2000];
        assert!(matches!(scan_toc(&buf,&DiskFormat::SmartPianoSoft,5),Err(Error::SignatureNotFound(_))));
    }

    #[test]
    fn dom30_offset() {
        let mut buf = vec![0x20u8;1000];
        put(&mut buf,200 + 57,b"Maple Leaf Rag");
        put(&mut buf,200 + 57 + 80,b"\0");
        let fmt = DiskFormat::Dom30 { toc_start: 200, disk_number_pos: 900 };
        let titles = scan_toc(&buf,&fmt,8).unwrap();
        assert_eq!(titles.len(),1);
        assert_eq!(titles[0].title,"Maple Leaf Rag");
    }
}
