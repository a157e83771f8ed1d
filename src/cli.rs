use clap::{value_parser, crate_version, Arg, ArgAction, Command, ValueHint};

const LONG_HELP: &str = "disklav identifies the layout of a Yamaha Disklavier disk image and finds the
performance tracks stored on it.  With no options only the format and title are shown.
If more than one of the track options is given only the first of tracks, locate, extract is run.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Supported formats: Smart PianoSoft (.mid tracks), PianoSoft Plus and PianoSoft DOM-30 (.fil tracks)

Exit codes:
  0 success, 1 other failure, 2 bad arguments, 3 unknown format,
  4 non-sequential track markers, 5 misaligned track markers,
  6 empty track during extraction, 7 required signature missing

Examples:
---------
show format and title:  `disklav mydisk.img`
list track titles:      `disklav -t mydisk.img`
check track positions:  `disklav -l mydisk.img`
extract to a directory: `disklav -e -o tracks mydisk.img`";

fn indent_arg() -> Arg {
    Arg::new("indent").long("indent").help("JSON indentation, omit to minify")
        .value_name("SPACES")
        .value_parser(value_parser!(u16).range(0..16))
        .requires("json")
        .required(false)
}

pub fn build_cli() -> Command {
    Command::new("disklav")
        .about("List and extract MIDI/E-Seq tracks from Yamaha Disklavier images")
        .after_long_help(LONG_HELP)
        .version(crate_version!())
        .arg(Arg::new("filename").value_name("FILENAME").help("path to the disk image")
            .value_hint(ValueHint::FilePath)
            .required(true))
        .arg(Arg::new("tracks").short('t').long("tracks").help("List tracks found in image file")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("locate").short('l').long("locate").help("Find the start and stop positions of files in image")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("extract").short('e').long("extract").help("Automatically extract tracks to individual files")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("outdir").short('o').long("outdir").help("directory for extracted tracks")
            .value_name("DIR")
            .value_hint(ValueHint::DirPath)
            .default_value(".")
            .required(false))
        .arg(Arg::new("json").short('j').long("json").help("print a JSON report instead of text")
            .action(ArgAction::SetTrue)
            .conflicts_with("extract"))
        .arg(indent_arg())
}
