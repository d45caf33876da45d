use anyhow::{Context as _, Result};
use clap::ArgMatches;
use coinsum::palette::parse_denominations;

const DEFAULT_DENOMINATIONS: &str = "1,2,5,10,20,50,100";
const DEFAULT_TARGET: &str = "100";

#[derive(Clone, Debug)]
pub(crate) struct Options {
    denominations: Vec<i64>,
    target: i64,
    limit: Option<usize>,
    count_only: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    #[cfg(test)]
    pub fn from_iter<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_arg_matches(&clap_app().get_matches_from_safe(args)?)
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let denominations = matches.value_of("denominations").unwrap();
        let denominations = parse_denominations(denominations)
            .with_context(|| format!("invalid denominations: \"{}\"", denominations))?;
        let target = matches.value_of("target").unwrap();
        let target = target
            .trim()
            .parse::<i64>()
            .with_context(|| format!("invalid target: \"{}\"", target))?;
        let limit = matches
            .value_of("limit")
            .map(|s| {
                s.parse::<usize>()
                    .with_context(|| format!("invalid limit: \"{}\"", s))
            })
            .transpose()?;
        Ok(Self {
            denominations,
            target,
            limit,
            count_only: matches.is_present("count_only"),
        })
    }

    pub fn denominations(&self) -> &[i64] {
        &self.denominations
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn count_only(&self) -> bool {
        self.count_only
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("coinsum")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("List every combination of denominations that adds up to a target amount")
        .arg(
            Arg::with_name("denominations")
                .short("d")
                .long("denominations")
                .takes_value(true)
                .value_name("LIST")
                .allow_hyphen_values(true)
                .default_value(DEFAULT_DENOMINATIONS)
                .help("comma separated positive denominations, in the order they are used"),
        )
        .arg(
            Arg::with_name("target")
                .short("t")
                .long("target")
                .takes_value(true)
                .value_name("AMOUNT")
                .allow_hyphen_values(true)
                .default_value(DEFAULT_TARGET)
                .help("the amount every combination adds up to"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .takes_value(true)
                .value_name("N")
                .conflicts_with("count_only")
                .help("stop after printing N combinations"),
        )
        .arg(
            Arg::with_name("count_only")
                .short("c")
                .long("count-only")
                .help("only print the number of combinations"),
        )
}

#[cfg(test)]
mod test {
    use super::Options;

    #[test]
    fn defaults() {
        let options = Options::from_iter(vec!["coinsum"]).unwrap();
        assert_eq!(&[1, 2, 5, 10, 20, 50, 100], options.denominations());
        assert_eq!(100, options.target());
        assert_eq!(None, options.limit());
        assert!(!options.count_only());
    }

    #[test]
    fn explicit() {
        let options =
            Options::from_iter(vec!["coinsum", "-d", "1, 2,5", "--target", "5", "-l", "2"])
                .unwrap();
        assert_eq!(&[1, 2, 5], options.denominations());
        assert_eq!(5, options.target());
        assert_eq!(Some(2), options.limit());
    }

    #[test]
    fn negative_values_reach_validation() {
        let options = Options::from_iter(vec!["coinsum", "-d", "-1,2", "-t", "-1"]).unwrap();
        assert_eq!(&[-1, 2], options.denominations());
        assert_eq!(-1, options.target());
    }

    #[test]
    fn garbage() {
        assert!(Options::from_iter(vec!["coinsum", "-t", "ten"]).is_err());
        assert!(Options::from_iter(vec!["coinsum", "-d", "1,two"]).is_err());
        assert!(Options::from_iter(vec!["coinsum", "-l", "-3"]).is_err());
    }

    #[test]
    fn count_only_conflicts_with_limit() {
        assert!(Options::from_iter(vec!["coinsum", "-c", "-l", "3"]).is_err());
    }
}
