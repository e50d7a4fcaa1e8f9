//! mash command-line tool for splicing code or yaml into a yaml document.
//!
//! Usage: mash [code|yaml] <file> [into|over] <yaml_file> at <path.separated.by.dots>
//!
//! Arguments:
//!   [code|yaml]    whether <file> is inserted as code (with a | for
//!                  multiline) or as yaml
//!   <file>         the code or yaml to insert into another file
//!   [into|over]    into streams the merged document to stdout, over
//!                  rewrites <yaml_file> in place
//!   <yaml_file>    the yaml file to insert into
//!   at             the word at
//!   <path>         the sequence of keys in <yaml_file> naming the
//!                  insertion location

use libmash::{splice, ContentKind};
use std::fs;
use std::process;

/// Where the merged document goes.
enum WriteMode {
    /// Stream to stdout; the caller redirects into a new file.
    Create,
    /// Rewrite the destination yaml file in place.
    Overwrite,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.len() == 1 {
        match args[0].as_str() {
            "-h" | "--help" => {
                print_help(&args);
                return;
            }
            "-V" | "--version" => {
                println!("mash {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            _ => {}
        }
    }

    if args.len() != 6 || args[4] != "at" {
        print_help(&args);
        process::exit(1);
    }

    let kind = parse_content_kind(&args[0]);
    let content_path = &args[1];
    let mode = parse_write_mode(&args[2]);
    let document_path = &args[3];
    let dotted_path = &args[5];

    let document = match fs::read_to_string(document_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {}", document_path, e);
            process::exit(1);
        }
    };

    let content = match fs::read_to_string(content_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {}", content_path, e);
            process::exit(1);
        }
    };

    let merged = match splice(&document, &content, dotted_path, kind) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match mode {
        WriteMode::Create => {
            print!("{}", merged);
        }
        WriteMode::Overwrite => {
            if let Err(e) = fs::write(document_path, &merged) {
                eprintln!("Error writing {}: {}", document_path, e);
                process::exit(1);
            }
        }
    }
}

/// "code" inserts behind a block-scalar marker, "yaml" nests structurally.
fn parse_content_kind(filetype: &str) -> ContentKind {
    match filetype {
        "code" => ContentKind::Code,
        "yaml" => ContentKind::Structured,
        _ => {
            eprintln!(
                "Filetype must be one of 'code' or 'yaml': '{}' is invalid",
                filetype
            );
            process::exit(1);
        }
    }
}

fn parse_write_mode(mode: &str) -> WriteMode {
    match mode {
        "into" => WriteMode::Create,
        "over" => WriteMode::Overwrite,
        _ => {
            eprintln!(
                "Mode must be one of 'into' or 'over': '{}' is invalid",
                mode
            );
            process::exit(1);
        }
    }
}

fn print_help(args: &[String]) {
    eprintln!(
        r"     __  ______   _____ __  __
    /  |/  /   | / ___// / / /
   / /|_/ / /| | \__ \/ /_/ /
  / /  / / ___ |___/ / __  /  -- combine code and yaml
 /_/  /_/_/  |_/____/_/ /_/"
    );
    eprintln!(" Version {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
    eprintln!(
        "Usage: mash [code|yaml] <file> [into|over] <yaml_file> at <path.separated.by.dots>"
    );
    eprintln!();
    eprintln!("\t[code|yaml]        whether <file> should be inserted as code (with a | for multiline) or as yaml");
    eprintln!("\t<file>             the name of the code or yaml to insert into another file");
    eprintln!("\t[into|over]        into will stream the merged document to stdout, over will overwrite <yaml_file>");
    eprintln!("\t<yaml_file>        the yaml file to insert into. JSON-looking yaml files are not supported");
    eprintln!("\tat                 The word at. The design is very human");
    eprintln!("\t<path>             The sequence of keys in <yaml_file> representing the location to insert");
    eprintln!();
    if !args.is_empty() {
        eprintln!("Got {} args: {:?}", args.len(), args);
    }
}
