use anyhow::Result;
use clap::{CommandFactory, Parser, error::ErrorKind};
use glrelease::{
    commands::{self, OutputFormat, ReleaseChanges, parse_link},
    config::{ClientConfig, DEFAULT_API_URL, TokenKind},
    http::{ApiError, RequestOption, with_sudo},
    project::ProjectRef,
    releases::{CreateReleaseOptions, ListReleasesOptions, ReleaseAssetLink, ReleaseAssets},
};

/// glrelease - GitLab release manager
///
/// List, show, create, update and delete the releases of a GitLab project.
///
/// If the GITLAB_TOKEN environment variable is set, it will be used for authentication.
///
/// Examples:
///   glrelease -p group/project list
///   glrelease -p 42 create --tag v1.0.0 --name "Version 1.0.0"
#[derive(Parser, Debug)]
#[command(author, version = env!("GLRELEASE_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project id or full path ("namespace/project")
    #[arg(short = 'p', long, env = "GITLAB_PROJECT", value_name = "PROJECT", global = true)]
    project: Option<String>,

    /// GitLab instance URL
    #[arg(
        long = "api-url",
        env = "GITLAB_API_URL",
        value_name = "URL",
        default_value = DEFAULT_API_URL,
        global = true
    )]
    api_url: String,

    /// Access token (also via GITLAB_TOKEN)
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Send the token as an OAuth2 bearer token
    #[arg(long, global = true)]
    oauth: bool,

    /// Perform the call as another user (administrators only)
    #[arg(long, value_name = "USER", global = true)]
    sudo: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the releases of the project
    List(ListArgs),

    /// Show a release
    Show(ShowArgs),

    /// Create a release
    Create(CreateArgs),

    /// Update the name and description of a release
    Update(UpdateArgs),

    /// Delete a release
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Page number to fetch
    #[arg(long)]
    pub page: Option<u32>,

    /// Number of releases per page
    #[arg(long)]
    pub per_page: Option<u32>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Tag name of the release
    #[arg(value_name = "TAG")]
    pub tag: String,
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Tag name of the release
    #[arg(long, value_name = "TAG")]
    pub tag: String,

    /// Release title
    #[arg(long)]
    pub name: String,

    /// Release notes
    #[arg(long, default_value = "")]
    pub description: String,

    /// Branch or commit to create the tag from
    #[arg(long = "ref", value_name = "REF")]
    pub git_ref: Option<String>,

    /// Asset link, repeatable
    #[arg(long = "link", value_name = "NAME=URL", value_parser = parse_link)]
    pub links: Vec<ReleaseAssetLink>,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Tag name of the release
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// New release title
    #[arg(long)]
    pub name: String,

    /// New release notes (the current notes are kept when omitted)
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Tag name of the release
    #[arg(value_name = "TAG")]
    pub tag: String,
}

impl Cli {
    /// The `--project` value, checked the way clap checks required arguments.
    /// Global arguments cannot be marked required, so this happens after parsing.
    fn project_ref(&self) -> Result<ProjectRef, clap::Error> {
        let Some(project) = self.project.as_deref() else {
            return Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "the following required argument was not provided:\n  --project <PROJECT>",
            ));
        };
        project
            .parse()
            .map_err(|e: ApiError| Cli::command().error(ErrorKind::InvalidValue, e))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let project = cli.project_ref().unwrap_or_else(|e| e.exit());
    let config = ClientConfig {
        api_url: cli.api_url,
        token: cli.token.filter(|t| !t.is_empty()),
        token_kind: if cli.oauth {
            TokenKind::OAuth
        } else {
            TokenKind::Private
        },
        ..Default::default()
    };
    let api = config.releases()?;
    let options: Vec<RequestOption> = cli.sudo.map(with_sudo).into_iter().collect();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut out = std::io::stdout();

    match cli.command {
        Commands::List(args) => {
            let opt = ListReleasesOptions {
                page: args.page,
                per_page: args.per_page,
            };
            commands::list(&api, &project, &opt, &options, format, &mut out).await?
        }
        Commands::Show(args) => {
            commands::show(&api, &project, &args.tag, &options, format, &mut out).await?
        }
        Commands::Create(args) => {
            let opt = CreateReleaseOptions {
                name: args.name,
                tag_name: args.tag,
                description: args.description,
                git_ref: args.git_ref,
                assets: (!args.links.is_empty()).then(|| ReleaseAssets { links: args.links }),
            };
            commands::create(&api, &project, &opt, &options, format, &mut out).await?
        }
        Commands::Update(args) => {
            let changes = ReleaseChanges {
                name: args.name,
                description: args.description,
            };
            commands::update(&api, &project, &args.tag, &changes, &options, format, &mut out)
                .await?
        }
        Commands::Delete(args) => {
            commands::delete(&api, &project, &args.tag, &options, format, &mut out).await?
        }
    }
    Ok(())
}
