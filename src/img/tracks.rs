//! ## Track location
//!
//! Tracks are found by searching the whole image for the start and end markers of the format.
//! Both lists come out of the search in ascending order and are paired by index.
//! Before any boundary is handed out the whole list is checked, so that a misidentified
//! or corrupt image fails before anything is written.
//!
//! Track count follows the number of start markers, unless there are fewer end markers,
//! which happens when the disk holds fragments of files.

use log::{debug,error};
use super::{ByteSource,DiskFormat,Error};

/// Byte range of one track.  The end is exclusive and includes the end marker.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct TrackBoundary {
    pub start: usize,
    pub end: usize
}

impl TrackBoundary {
    pub fn len(&self) -> usize {
        self.end - self.start
    }
    /// Borrow the track bytes.  Clamped at the end of the image, so this can be empty.
    pub fn slice<'a,S: ByteSource + ?Sized>(&self,src: &'a S) -> &'a [u8] {
        src.read_bytes(self.start,self.len())
    }
}

/// Raw search results for the start and end markers of one image
#[derive(Clone,Debug)]
pub struct TrackMarkers {
    starts: Vec<usize>,
    stops: Vec<usize>,
    /// width of the end marker, added to its position to get the end of the track
    end_width: usize
}

impl TrackMarkers {
    /// Build from known marker positions, both lists must be ascending.
    pub fn new(starts: Vec<usize>,stops: Vec<usize>,end_width: usize) -> Self {
        Self {
            starts,
            stops,
            end_width
        }
    }
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }
    /// Number of tracks, this is what the table of contents listing uses as its bound.
    pub fn count(&self) -> usize {
        usize::min(self.starts.len(),self.stops.len())
    }
    /// Pair up the markers into boundaries, checking every pair first.
    /// A stop that comes before its start means the lists are not sequential.
    /// An earlier stop that ends inside the track means the pairing slipped.
    pub fn boundaries(&self) -> Result<Vec<TrackBoundary>,Error> {
        let mut ans: Vec<TrackBoundary> = Vec::new();
        for i in 0..self.count() {
            let start = self.starts[i];
            let stop = self.stops[i];
            let end = stop + self.end_width;
            if end < start {
                error!("track {} stop {} precedes start {}",i+1,stop,start);
                return Err(Error::NonSequentialBoundaries { track: i+1, start, stop });
            }
            // an earlier end may touch this start (tracks back to back) but not overlap it
            if i > 0 && self.stops[i-1] + self.end_width > start {
                let nearest = self.stops[i-1];
                error!("track {} paired with stop {}, nearest is {}",i+1,stop,nearest);
                return Err(Error::MisalignedBoundary { track: i+1, start, stop, nearest });
            }
            ans.push(TrackBoundary { start, end });
        }
        Ok(ans)
    }
}

/// Search the image for track markers.
pub fn locate<S: ByteSource + ?Sized>(src: &S,fmt: &DiskFormat) -> TrackMarkers {
    let layout = fmt.layout();
    let mut starts = src.find_all(layout.track_start);
    let stops = src.find_all(layout.track_end);
    if layout.skip_first_start && starts.len() > 0 {
        debug!("discarding start marker at {}, it is in the table of contents",starts[0]);
        starts.remove(0);
    }
    debug!("found {} start and {} end markers",starts.len(),stops.len());
    TrackMarkers::new(starts,stops,layout.track_end.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(buf: &mut Vec<u8>,pos: usize,dat: &[u8]) {
        buf[pos..pos+dat.len()].copy_from_slice(dat);
    }

    #[test]
    fn more_starts_than_stops() {
        let markers = TrackMarkers::new(vec![100,300,500],vec![200,400],3);
        assert_eq!(markers.count(),2);
        assert_eq!(markers.boundaries().unwrap(),vec![
            TrackBoundary { start: 100, end: 203 },
            TrackBoundary { start: 300, end: 403 }
        ]);
    }

    #[test]
    fn more_stops_than_starts() {
        let markers = TrackMarkers::new(vec![100],vec![200,400],3);
        assert_eq!(markers.count(),1);
        assert_eq!(markers.boundaries().unwrap()[0].len(),103);
    }

    #[test]
    fn stop_before_start() {
        let markers = TrackMarkers::new(vec![500],vec![100],3);
        match markers.boundaries() {
            Err(Error::NonSequentialBoundaries { track, start, stop }) => {
                assert_eq!((track,start,stop),(1,500,100));
            },
            _ => panic!("expected non-sequential error")
        }
    }

    #[test]
    fn fragment_is_misaligned() {
        // first track has no end, so the second pair would borrow the first stop
        let markers = TrackMarkers::new(vec![0,100,200],vec![150,250],3);
        match markers.boundaries() {
            Err(Error::MisalignedBoundary { track, stop, nearest, .. }) => {
                assert_eq!((track,stop,nearest),(2,250,150));
            },
            _ => panic!("expected misaligned error")
        }
    }

    #[test]
    fn back_to_back_tracks() {
        let markers = TrackMarkers::new(vec![0,103],vec![100,200],3);
        assert_eq!(markers.boundaries().unwrap(),vec![
            TrackBoundary { start: 0, end: 103 },
            TrackBoundary { start: 103, end: 203 }
        ]);
        let mut buf = vec![0u8;4096];
        put(&mut buf,1000,b"MThd");
        put(&mut buf,1200,&[0xff,0x2f,0x00]);
        put(&mut buf,1203,b"MThd");
        put(&mut buf,1400,&[0xff,0x2f,0x00]);
        let b = locate(&buf,&DiskFormat::SmartPianoSoft).boundaries().unwrap();
        assert_eq!(b[1],TrackBoundary { start: 1203, end: 1403 });
    }

    #[test]
    fn zero_length_is_sequential() {
        let markers = TrackMarkers::new(vec![103],vec![100],3);
        let b = markers.boundaries().unwrap();
        assert_eq!(b[0].len(),0);
    }

    #[test]
    fn pianosoft_plus_drops_first_start() {
        let mut buf = vec![0u8;16384];
        put(&mut buf,0x1c40 + 40,&[0xfe,0,0]);
        put(&mut buf,13000,&[0xfe,0,0]);
        put(&mut buf,13200,&[0xf2,0,0]);
        put(&mut buf,14000,&[0xfe,0,0]);
        put(&mut buf,14500,&[0xf2,0,0]);
        let markers = locate(&buf,&DiskFormat::PianoSoftPlus);
        assert_eq!(markers.starts(),&[13000,14000]);
        assert_eq!(markers.count(),2);
        let b = markers.boundaries().unwrap();
        assert_eq!(b[1],TrackBoundary { start: 14000, end: 14503 });
    }

    #[test]
    fn dom30_keeps_first_start() {
        let mut buf = vec![0u8;4096];
        put(&mut buf,1000,&[0xfe,0,0]);
        put(&mut buf,1500,&[0,0x0c,0xf2]);
        let fmt = DiskFormat::Dom30 { toc_start: 0, disk_number_pos: 0 };
        let markers = locate(&buf,&fmt);
        assert_eq!(markers.starts(),&[1000]);
        assert_eq!(markers.stops(),&[1500]);
    }

    #[test]
    fn slice_matches_image() {
        let mut buf = vec![0u8;4096];
        put(&mut buf,1000,b"MThd\x00\x00\x00\x06");
        put(&mut buf,1200,&[0xff,0x2f,0x00]);
        let markers = locate(&buf,&DiskFormat::SmartPianoSoft);
        let b = markers.boundaries().unwrap();
        let trk = b[0].slice(&buf);
        assert_eq!(trk.len(),203);
        assert_eq!(&trk[0..4],b"MThd");
        assert_eq!(&trk[200..],&[0xff,0x2f,0x00]);
    }
}
