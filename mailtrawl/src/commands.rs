use crate::CLAP_STYLING;
use clap::arg;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("mailtrawl")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("mailtrawl")
        .styles(CLAP_STYLING)
        .about(
            "Crawls a single host breadth-first and prints the email addresses \
            found on its pages as a JSON array.",
        )
        .arg(
            arg!(<URL> "The seed URL to start crawling from")
                .value_parser(clap::value_parser!(Url)),
        )
        .arg(
            arg!(-m --"max-pages" <COUNT>)
                .help("Maximum number of pages to visit before stopping")
                .required(false)
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
}
