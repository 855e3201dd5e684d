use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--name" => flags.name = Some(value(args, &mut i)?.to_owned()),
            "--pet" => flags.pet = Some(value(args, &mut i)?.to_owned()),
            "--id" => flags.identity = Some(value(args, &mut i)?.to_owned()),
            "-l" | "--length" => flags.length = Some(positive(arg, value(args, &mut i)?)?),
            "-n" | "--number" => flags.number = Some(positive(arg, value(args, &mut i)?)?),
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Value following the flag at `args[*i]`; advances `i` past it.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn positive(flag: &str, raw: &str) -> Result<usize, ParseError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidNumber {
            flag: flag.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("seedpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_inputs_and_options() {
        let flags = parse(&args(&[
            "--name", "Ana María", "--pet", "Rex", "--id", "12345678A", "-n", "5", "-l", "12",
            "-b", "-q",
        ]))
        .expect("valid args");
        assert_eq!(flags.inputs(), ("Ana María", "Rex", "12345678A"));
        assert_eq!(flags.number, Some(5));
        assert_eq!(flags.length, Some(12));
        assert!(flags.clipboard && flags.quiet);
        assert!(!flags.help && !flags.version);
    }

    #[test]
    fn missing_inputs_default_to_empty() {
        let flags = parse(&args(&["--pet", "Rex"])).expect("valid args");
        assert_eq!(flags.inputs(), ("", "Rex", ""));
    }

    #[rstest]
    #[case(&["--name"], ParseError::MissingValue("--name".into()))]
    #[case(&["-n"], ParseError::MissingValue("-n".into()))]
    #[case(&["-n", "zero"], ParseError::InvalidNumber { flag: "-n".into(), value: "zero".into() })]
    #[case(&["--length", "0"], ParseError::InvalidNumber { flag: "--length".into(), value: "0".into() })]
    #[case(&["--hex"], ParseError::UnknownArg("--hex".into()))]
    fn rejects_bad_arguments(#[case] list: &[&str], #[case] expected: ParseError) {
        assert_eq!(parse(&args(list)).unwrap_err(), expected);
    }
}
