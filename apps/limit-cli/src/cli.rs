use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "furusato-limit",
    version,
    about = "Compute the fully deductible hometown-tax donation limit"
)]
pub struct Args {
    #[arg(long, short, help = "Read the JSON request from FILE instead of stdin")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Include every intermediate value in the output")]
    pub breakdown: bool,

    #[arg(long, help = "Pretty-print JSON (also FURUSATO_PRETTY_JSON)")]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args =
            Args::try_parse_from(["furusato-limit", "--breakdown", "-i", "req.json"]).unwrap();
        assert!(args.breakdown);
        assert!(!args.pretty);
        assert_eq!(args.input, Some(PathBuf::from("req.json")));
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["furusato-limit"]).unwrap();
        assert!(args.input.is_none());
        assert!(!args.breakdown);
    }
}
