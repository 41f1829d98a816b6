//! boardrev - extract two revisions of an svn-tracked board file
//!
//! Binary entry point.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use boardrev::config::Config;
use boardrev::history::RevisionHistoryReader;
use boardrev::logging::{self, LogConfig, LogLevel};
use boardrev::project::locate_project_root;
use boardrev::resolver::ArtifactResolver;
use boardrev::svn::SvnExecutor;

#[derive(Debug, Parser)]
#[command(name = "boardrev", version, about)]
struct Cli {
    /// Root directory for extracted artifacts [env: BOARDREV_OUTPUT_DIR]
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// svn binary to run [env: BOARDREV_SVN]
    #[arg(long, global = true)]
    svn: Option<String>,

    /// More logging (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the working-copy root and the project's path inside it
    Root {
        /// Project directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// List the revisions of a board file, working copy first
    History {
        /// Board file name inside the project directory
        file: String,
        /// Project directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Extract two revisions of a board file
    Compare {
        /// First label (`r12`, a history line, or the file name for the working copy)
        label1: String,
        /// Second label
        label2: String,
        /// Board file name inside the project directory
        file: String,
        /// Project directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    logging::init(LogConfig {
        level: LogLevel::from_verbosity(cli.verbose, cli.quiet),
        include_location: cli.verbose > 2,
    });

    let mut config = Config::from_env();
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(svn) = cli.svn {
        config.svn_command = svn;
    }

    run(cli.command, config)
}

fn run(command: Command, config: Config) -> color_eyre::Result<()> {
    let executor = SvnExecutor::new().with_program(config.svn_command.clone());

    match command {
        Command::Root { dir } => {
            let location = locate_project_root(&executor, &dir)?;
            println!("{}", location.root.display());
            println!("{}", location.subpath.display());
        }
        Command::History { file, dir } => {
            let location = locate_project_root(&executor, &dir)?;
            let tracked = location.tracked_file(file);
            let reader = RevisionHistoryReader::new(&executor);
            for artifact in
                reader.list_artifacts(&tracked.working_dir, &tracked.repo_path(), &tracked.name)?
            {
                println!("{}", artifact);
            }
        }
        Command::Compare {
            label1,
            label2,
            file,
            dir,
        } => {
            let location = locate_project_root(&executor, &dir)?;
            let tracked = location.tracked_file(file);
            let resolver = ArtifactResolver::new(&executor, config);
            let result = resolver.resolve_two_revisions(&label1, &label2, &tracked)?;

            if let Some(advisory) = &result.advisory {
                eprintln!("{}", advisory);
            }
            println!("{}\t{}", result.artifact1(), result.first.output_file.display());
            println!("{}\t{}", result.artifact2(), result.second.output_file.display());
            println!("{}", result.timestamps());
        }
    }

    Ok(())
}
