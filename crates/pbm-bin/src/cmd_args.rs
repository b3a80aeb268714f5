/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pbm-tools")
        .about("Reads image.pbm, prints its size and pixel (1, 1), then writes an inverted copy to inverted_image.pbm")
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoded image"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn logging_flags_parse() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pbm-tools", "--info"])
            .unwrap();

        assert!(matches.get_flag("info"));
        assert!(!matches.get_flag("debug"));
    }

    #[test]
    fn paths_are_not_accepted() {
        let result = create_cmd_args().try_get_matches_from(["pbm-tools", "other.pbm"]);

        assert!(result.is_err());
    }
}
