//! ## Disk information
//!
//! Prints the format and title, the table of contents, and the track locations.

use std::io::Write;
use log::info;
use crate::img::{ByteSource,DiskFormat,DiskImage,Error};
use crate::img::{detect,title,toc,tracks};
use crate::img::title::DiskInfo;
use crate::{STDRESULT,DYNERR};

pub const SEPARATOR: &str = "--------------------------------------------------------------------";

/// Load the image and identify it, printing progress along the way.
/// If the format is unknown that is printed before the error is returned.
pub fn load_and_identify(img_path: &str,quiet: bool) -> Result<(DiskImage,DiskFormat),DYNERR> {
    if !quiet {
        print!("Loading file...");
        std::io::stdout().flush()?;
    }
    let img = crate::load_img(img_path)?;
    if !quiet {
        println!("{}",super::status("OK",true));
    }
    match detect::detect(&img) {
        Ok(fmt) => Ok((img,fmt)),
        Err(Error::UnknownFormat) => {
            if !quiet {
                println!("Format: Unknown");
            }
            Err(Box::new(Error::UnknownFormat))
        },
        Err(e) => Err(Box::new(e))
    }
}

/// Print the format, disk number if there is one, and title.
pub fn header<S: ByteSource + ?Sized>(src: &S,fmt: &DiskFormat) -> DiskInfo {
    let info = title::read_title(src,fmt);
    println!("Format: {}",info.format);
    if let Some(num) = &info.disk_number {
        println!("Disk: {}",num);
    }
    println!("Title: {}",info.title);
    info
}

/// Print the table of contents, bounded by the number of tracks actually found.
pub fn list_tracks<S: ByteSource + ?Sized>(src: &S,fmt: &DiskFormat) -> STDRESULT {
    let count = tracks::locate(src,fmt).count();
    info!("located {} tracks",count);
    for trk in toc::scan_toc(src,fmt,count)? {
        println!("Track {:02} - {}",trk.number,trk.title);
    }
    Ok(())
}

/// Print the position and length of every track.
pub fn print_locations<S: ByteSource + ?Sized>(src: &S,fmt: &DiskFormat) -> STDRESULT {
    let boundaries = tracks::locate(src,fmt).boundaries()?;
    for (i,b) in boundaries.iter().enumerate() {
        println!("Track {:02} - Pos: {}, Len: {}",i+1,b.start,b.len());
    }
    Ok(())
}

/// Trailing padding of a fixed field, blanks or NUL
fn trim_padding(field: &str) -> String {
    field.trim_end_matches(|c: char| c.is_whitespace() || c=='\0').to_string()
}

/// Everything the text report shows, as a JSON string.
/// Track locations are only included (and validated) if `locations` is true.
pub fn to_json<S: ByteSource + ?Sized>(src: &S,fmt: &DiskFormat,locations: bool,indent: Option<u16>) -> Result<String,DYNERR> {
    let disk = title::read_title(src,fmt);
    let markers = tracks::locate(src,fmt);
    let mut root = json::JsonValue::new_object();
    root["format"] = json::JsonValue::String(fmt.to_string());
    root["disk_number"] = match disk.disk_number {
        Some(num) => json::JsonValue::String(trim_padding(&num)),
        None => json::JsonValue::Null
    };
    root["title"] = json::JsonValue::String(trim_padding(&disk.title));
    let mut toc_ary = json::JsonValue::new_array();
    for trk in toc::scan_toc(src,fmt,markers.count())? {
        let mut trk_obj = json::JsonValue::new_object();
        trk_obj["number"] = json::JsonValue::Number(trk.number.into());
        trk_obj["title"] = json::JsonValue::String(trk.title);
        toc_ary.push(trk_obj)?;
    }
    root["toc"] = toc_ary;
    if locations {
        let mut loc_ary = json::JsonValue::new_array();
        for (i,b) in markers.boundaries()?.iter().enumerate() {
            let mut loc_obj = json::JsonValue::new_object();
            loc_obj["number"] = json::JsonValue::Number((i+1).into());
            loc_obj["pos"] = json::JsonValue::Number(b.start.into());
            loc_obj["len"] = json::JsonValue::Number(b.len().into());
            loc_ary.push(loc_obj)?;
        }
        root["tracks"] = loc_ary;
    }
    if let Some(spaces) = indent {
        Ok(json::stringify_pretty(root,spaces))
    } else {
        Ok(json::stringify(root))
    }
}
