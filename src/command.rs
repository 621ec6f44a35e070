use std::path::PathBuf;

/// The command language, one line at a time: a case-insensitive head token
/// and at most one argument taken verbatim (spaces and all). A closed enum
/// so the interpreter matches exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    RenameTab { name: String },
    JumpTab { name: String },
    LoadDir { path: PathBuf },
    AppendTo { path: PathBuf },
    Write { path: PathBuf, force: bool },
    OverwriteWithBackup { path: PathBuf },
    MakeDir { path: PathBuf },
    Remove { path: PathBuf },
    SaveAs { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Command(Command),
    /// Recognized command shape with a usage problem; reported to the user.
    Invalid { message: String },
    /// Not a command at all. Ignored without a message on purpose: free
    /// text typed into the command line should not produce error noise.
    Unrecognized,
}

pub fn parse(line: &str) -> Parsed {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Parsed::Unrecognized;
    }

    let (raw, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim_start())),
        None => (trimmed, None),
    };
    let head = raw.to_lowercase();
    let arg = arg.filter(|arg| !arg.is_empty());

    match (head.as_str(), arg) {
        (":help", _) => Parsed::Command(Command::Help),
        (":rename", Some(name)) => Parsed::Command(Command::RenameTab {
            name: name.to_string(),
        }),
        (":rename", None) => Parsed::Invalid {
            message: ":rename requires a new tab name".to_string(),
        },
        // Any other ':' token jumps to the tab with that exact name.
        _ if raw.starts_with(':') => {
            let name = &raw[1..];
            if name.is_empty() {
                Parsed::Unrecognized
            } else {
                Parsed::Command(Command::JumpTab {
                    name: name.to_string(),
                })
            }
        }
        ("u", Some(path)) => Parsed::Command(Command::LoadDir { path: path.into() }),
        ("a", Some(path)) => Parsed::Command(Command::AppendTo { path: path.into() }),
        ("w", Some(path)) => Parsed::Command(Command::Write {
            path: path.into(),
            force: false,
        }),
        ("w!", Some(path)) => Parsed::Command(Command::Write {
            path: path.into(),
            force: true,
        }),
        ("ow", Some(path)) => Parsed::Command(Command::OverwriteWithBackup { path: path.into() }),
        ("mkdir", Some(path)) => Parsed::Command(Command::MakeDir { path: path.into() }),
        ("rm", Some(path)) => Parsed::Command(Command::Remove { path: path.into() }),
        ("saveas", Some(path)) => Parsed::Command(Command::SaveAs { path: path.into() }),
        _ => Parsed::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Parsed, parse};
    use std::path::PathBuf;

    #[test]
    fn parse_should_match_head_token_case_insensitively() {
        assert_eq!(
            parse("W! out.txt"),
            Parsed::Command(Command::Write {
                path: PathBuf::from("out.txt"),
                force: true,
            })
        );
        assert_eq!(parse(":HELP"), Parsed::Command(Command::Help));
    }

    #[test]
    fn parse_should_pass_argument_verbatim_including_spaces() {
        assert_eq!(
            parse("w my notes file.txt"),
            Parsed::Command(Command::Write {
                path: PathBuf::from("my notes file.txt"),
                force: false,
            })
        );
        assert_eq!(
            parse(":rename draft of chapter one"),
            Parsed::Command(Command::RenameTab {
                name: "draft of chapter one".to_string(),
            })
        );
    }

    #[test]
    fn parse_should_ignore_unrecognized_input() {
        assert_eq!(parse(""), Parsed::Unrecognized);
        assert_eq!(parse("   "), Parsed::Unrecognized);
        assert_eq!(parse("hello world"), Parsed::Unrecognized);
        assert_eq!(parse("w"), Parsed::Unrecognized);
        assert_eq!(parse("rm"), Parsed::Unrecognized);
        assert_eq!(parse(":"), Parsed::Unrecognized);
    }

    #[test]
    fn parse_should_report_rename_without_argument() {
        assert!(matches!(parse(":rename"), Parsed::Invalid { .. }));
        assert!(matches!(parse(":rename   "), Parsed::Invalid { .. }));
    }

    #[test]
    fn parse_should_treat_unknown_colon_token_as_tab_jump() {
        assert_eq!(
            parse(":draft"),
            Parsed::Command(Command::JumpTab {
                name: "draft".to_string(),
            })
        );
    }

    #[test]
    fn parse_should_keep_tab_jump_names_case_sensitive() {
        assert_eq!(
            parse(":Draft"),
            Parsed::Command(Command::JumpTab {
                name: "Draft".to_string(),
            })
        );
    }
}
