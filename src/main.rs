extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use cf_archiver::{
    client::Session,
    sync::{self, SyncConfig},
};
use clap::{crate_description, crate_name, App, Arg};
use pretty_env_logger::init_timed;
use std::{io::Write, path::PathBuf, process::exit};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = App::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("handle")
                .about("Codeforces handle whose solutions to archive")
                .required(true),
        )
        .arg(
            Arg::new("count")
                .short('c')
                .long("count")
                .about("Number of recent submissions to scan")
                .takes_value(true)
                .default_value("15"),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .about("Directory for archived solution files")
                .takes_value(true)
                .default_value("submissions"),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .about("Path to the archive history file")
                .takes_value(true)
                .default_value("submission_history.json"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .about("Append one line per archived problem to this file")
                .takes_value(true),
        )
        .get_matches();

    let count = match app.value_of("count").unwrap().parse::<u64>() {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "Invalid --count: {}", e);
            stdout.reset();
            exit(2);
        }
    };
    let config = SyncConfig {
        handle: app.value_of("handle").unwrap().to_string(),
        count,
        out_dir: PathBuf::from(app.value_of("out-dir").unwrap()),
        history_path: PathBuf::from(app.value_of("history").unwrap()),
        log_path: app.value_of("log").map(PathBuf::from),
    };

    let session = match Session::new() {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "Failed to build client: {}", e);
            stdout.reset();
            exit(1);
        }
    };

    write_info!(
        &mut stdout,
        "Info",
        "Scanning last {} submissions of {}",
        config.count,
        config.handle
    );
    stdout.reset();
    match sync::run(&session, &config).await {
        Ok(report) => {
            for id in &report.skipped {
                write_warn!(&mut stdout, "Skip", "No code archived for {}", id);
            }
            for id in &report.archived {
                write_ok!(&mut stdout, "Done", "Archived solution for {}", id);
            }
            if report.archived.is_empty() {
                write_info!(&mut stdout, "Info", "No new accepted solutions found");
            } else {
                write_ok!(
                    &mut stdout,
                    "Finish",
                    "Archived {} new solutions",
                    report.archived.len()
                );
            }
            stdout.reset();
        }
        Err(e) => {
            write_error!(&mut stdout, "Error", "{}", e);
            stdout.reset();
            exit(1);
        }
    }
}
