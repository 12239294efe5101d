use crate::*;

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Extension, // default
    Url,       // -u
    Category,  // -m
    Content,   // -s, '-' is stdin
    List,      // -a
}

#[derive(Debug)]
pub struct Config {
    pub verbose: bool, // -v
    pub mode: Mode,
    pub inputs: Vec<String>,
}

lazy_static! {

    // Command line configuration
    pub static ref CONFIG: Config = Config::cmdline();
}

// Lightweight getopt-style parsing, no external argument crate
impl Default for Config {
    fn default() -> Config {
        Config {
            verbose: false,
            mode: Mode::default(),
            inputs: Vec::new(),
        }
    }
}

impl Config {
    pub fn usage() {
        eprintln!("Usage: mimetypes [-v] [-u | -m | -s | -a] inputs");
        eprintln!("       -v            verbose\n");
        eprintln!("       (default)     resolve file names, paths or extensions: report.pdf, .gz, PNG");
        eprintln!("       -u            resolve URL paths: /files/my%20report.pdf?download=1");
        eprintln!("       -m            classify MIME types: application/ld+json");
        eprintln!("       -s            sniff file contents (first 4 bytes); '-' or no inputs reads stdin");
        eprintln!("       -a            list every extension in the table");
        eprintln!("Log filtering honours RUST_LOG (default: {}, {} with -v)", DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER);

        process::exit(1);
    }

    pub fn cmdline() -> Config {
        Self::parse(env::args().skip(1))
    }

    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Config {
        let mut config = Config::default();

        let mut args = args.into_iter();
        while let Some(a) = args.next() {
            match a.as_str() {
                "-v" => {
                    config.verbose = true;
                    continue;
                },
                "-u" => {
                    config.mode = Mode::Url;
                    continue;
                },
                "-m" => {
                    config.mode = Mode::Category;
                    continue;
                },
                "-s" => {
                    config.mode = Mode::Content;
                    continue;
                },
                "-a" => {
                    config.mode = Mode::List;
                    continue;
                },
                "-h" | "-?" => {
                    Self::usage();
                    break;
                },
                "--" => {
                    config.inputs.extend(args.by_ref());
                    break;
                },
                _ => config.inputs.push(a),
            };
        }

        config
    }

    // RUST_LOG wins over -v
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if self.verbose {
                VERBOSE_LOG_FILTER
            } else {
                DEFAULT_LOG_FILTER
            })
        })
    }
}
