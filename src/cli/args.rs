//! CLI argument parsing

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tally(TallyArgs),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyArgs {
    pub path: Option<String>,
    pub strategy: String,
    pub basis: String,
    pub find_program: Option<String>,
    pub json: bool,
}

impl Default for TallyArgs {
    fn default() -> Self {
        Self {
            path: None,
            strategy: "walk".to_string(),
            basis: "logical".to_string(),
            find_program: None,
            json: false,
        }
    }
}

/// Parse command line arguments (including the program name at index 0)
///
/// A missing PATH is not rejected here; path validation belongs to
/// [`crate::PathConfig`].
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut tally_args = TallyArgs::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--strategy" | "--method" => {
                i += 1;
                if i >= args.len() {
                    return Err(format!("{} requires a value", args[i - 1]));
                }
                tally_args.strategy.clone_from(&args[i]);
            }
            "--basis" => {
                i += 1;
                if i >= args.len() {
                    return Err("--basis requires a value".to_string());
                }
                tally_args.basis.clone_from(&args[i]);
            }
            "--find" => {
                i += 1;
                if i >= args.len() {
                    return Err("--find requires a program path".to_string());
                }
                tally_args.find_program = Some(args[i].clone());
            }
            "--json" => {
                tally_args.json = true;
            }
            arg if !arg.starts_with("--") => {
                if tally_args.path.is_none() {
                    tally_args.path = Some(arg.to_string());
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(Command::Tally(tally_args))
}
