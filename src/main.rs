//! # Command Line Interface
//!
//! Options are defined in `cli.rs`, the modes themselves are in the `commands` module.
//! Errors from every mode come back here, where they are reported and mapped to an exit code.

mod cli;

use env_logger;
use std::path::Path;
#[cfg(windows)]
use colored;
use log::error;
use disklav::commands;
use disklav::commands::{CommandError,exit_code};
use disklav::STDRESULT;

const RCH: &str = "unreachable was reached";

fn run(matches: &clap::ArgMatches) -> STDRESULT {
    let img_path = matches.get_one::<String>("filename").expect(RCH);
    let out_dir = Path::new(matches.get_one::<String>("outdir").expect(RCH));
    if !Path::new(img_path).is_file() {
        error!("{} is not a file",img_path);
        return Err(Box::new(CommandError::FileNotFound));
    }

    if matches.get_flag("json") {
        let (img,fmt) = commands::info::load_and_identify(img_path,true)?;
        let locations = matches.get_flag("locate");
        println!("{}",commands::info::to_json(&img,&fmt,locations,matches.get_one::<u16>("indent").copied())?);
        return Ok(());
    }

    // Always show the format and title
    let (img,fmt) = commands::info::load_and_identify(img_path,false)?;
    commands::info::header(&img,&fmt);

    let tracks = matches.get_flag("tracks");
    let locate = matches.get_flag("locate");
    let extract = matches.get_flag("extract");
    if tracks || locate || extract {
        println!("{}",commands::info::SEPARATOR);
    }

    if tracks {
        return commands::info::list_tracks(&img,&fmt);
    }
    if locate {
        return commands::info::print_locations(&img,&fmt);
    }
    if extract {
        if !out_dir.is_dir() {
            error!("{} is not a directory",out_dir.display());
            return Err(Box::new(CommandError::InvalidCommand));
        }
        return commands::extract::extract(&img,&fmt,img_path,out_dir);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);

    let matches = cli::build_cli().get_matches();
    match run(&matches) {
        Ok(()) => std::process::exit(exit_code::SUCCESS),
        Err(e) => {
            eprintln!("{}",e);
            std::process::exit(commands::exit_code_for(e.as_ref()));
        }
    }
}
