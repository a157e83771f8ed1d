//! ## Track extraction
//!
//! Writes every located track to its own file.  All slices are worked out before the
//! first file is written, so a failure leaves nothing behind.  Each file goes to a temporary
//! name in the destination directory and is renamed when complete.

use std::io::Write;
use std::path::Path;
use log::{info,debug,error};
use crate::img::{ByteSource,DiskFormat,Error};
use crate::img::tracks;
use super::CommandError;
use crate::STDRESULT;

/// Filename of an extracted track, e.g., `mydisk-track03.fil`.
pub fn track_filename(base: &str,track: usize,ext: &str) -> String {
    format!("{}-track{:02}{}",base,track,ext)
}

/// Size shown after each file.  This is only the first two digits of the byte count,
/// it is not a conversion to kilobytes.
pub fn size_label(len: usize) -> String {
    len.to_string().chars().take(2).collect()
}

/// Write the data under a temporary name and then rename it to `name`.
pub fn write_atomic(dir: &Path,name: &str,dat: &[u8]) -> STDRESULT {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(dat)?;
    tmp.flush()?;
    tmp.persist(dir.join(name))?;
    debug!("wrote {} bytes to {}",dat.len(),name);
    Ok(())
}

fn report_failure(name: &str) {
    println!("Extracting {}...{}",name,super::status("ERROR!",false));
    println!();
    println!("Automatic track extraction seems to have failed.");
    println!("Use the -l option to view detected file locations.");
}

/// Extract every track to `out_dir`, naming the files after the image.
pub fn extract<S: ByteSource + ?Sized>(src: &S,fmt: &DiskFormat,img_path: &str,out_dir: &Path) -> STDRESULT {
    let base = crate::image_base_name(img_path);
    let boundaries = match tracks::locate(src,fmt).boundaries() {
        Ok(b) => b,
        Err(e) => {
            let track = match &e {
                Error::NonSequentialBoundaries { track, .. } => *track,
                Error::MisalignedBoundary { track, .. } => *track,
                _ => 1
            };
            report_failure(&track_filename(&base,track,fmt.extension()));
            return Err(Box::new(e));
        }
    };
    let mut plan: Vec<(String,&[u8])> = Vec::new();
    for (i,b) in boundaries.iter().enumerate() {
        let name = track_filename(&base,i+1,fmt.extension());
        let dat = b.slice(src);
        if dat.len()==0 {
            error!("track {} at {} is empty",i+1,b.start);
            report_failure(&name);
            return Err(Box::new(CommandError::EmptyExtraction(i+1)));
        }
        plan.push((name,dat));
    }
    info!("extracting {} tracks to {}",plan.len(),out_dir.display());
    for (name,dat) in plan {
        print!("Extracting {}...",name);
        std::io::stdout().flush()?;
        match write_atomic(out_dir,&name,dat) {
            Ok(()) => println!("{}KB",size_label(dat.len())),
            Err(e) => {
                println!("{}",super::status("ERROR!",false));
                return Err(e);
            }
        }
    }
    Ok(())
}
