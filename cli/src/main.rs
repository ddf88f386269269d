use std::time::Duration;

use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use records::query::DEFAULT_LIMIT;
use records::resource::{self, Resource};
use records::{
    Api, ApiError, ApiRequest, Assignment, ExtensionRequest, ListQuery, Method, Registration, ReviewDecision, Student,
    Submission, Supervisor, Transport, User, Viva, VivaOutcome, VivaSchedule, VivaTeam, parse_body,
};
use serde_json::Value;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("health check failed with HTTP {0}")]
    Unhealthy(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pgr", about = "PGR portal admin console")]
struct Cli {
    #[arg(long, env = "PGR_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "PGR_TOKEN")]
    token: Option<String>,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the portal host is up.
    Ping,
    /// Exchange credentials for an access token.
    Login { username: String, password: String },
    /// Show the account behind the current token.
    Whoami,
    /// Headline dashboard counts.
    Stats,
    User(UserCommand),
    Student(CrudCommand),
    Supervisor(CrudCommand),
    Assignment(CrudCommand),
    Registration(RegistrationCommand),
    VivaTeam(VivaTeamCommand),
    Viva(CrudCommand),
    Submission(SubmissionCommand),
}

#[derive(Args, Debug)]
struct CrudCommand {
    #[command(subcommand)]
    command: CrudSubcommand,
}

#[derive(Subcommand, Debug)]
enum CrudSubcommand {
    List(ListArgs),
    Get {
        key: String,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        key: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        key: String,
    },
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[arg(long)]
    search: Option<String>,

    /// Extra query filter, repeatable.
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    filters: Vec<(String, String)>,

    #[arg(long, default_value_t = 0)]
    skip: u32,

    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,
}

impl ListArgs {
    fn to_query(&self) -> ListQuery {
        let mut query = ListQuery::new().with_page(self.skip, self.limit);
        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        for (key, value) in &self.filters {
            query = query.with_filter(key.clone(), value.clone());
        }
        query
    }
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    #[command(flatten)]
    Crud(CrudSubcommand),
    Activate {
        id: i64,
    },
    Deactivate {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct RegistrationCommand {
    #[command(subcommand)]
    command: RegistrationSubcommand,
}

#[derive(Subcommand, Debug)]
enum RegistrationSubcommand {
    #[command(flatten)]
    Crud(CrudSubcommand),
    RequestExtension {
        id: i64,
        #[arg(long)]
        days: i32,
        #[arg(long)]
        reason: String,
    },
    ApproveExtension {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct VivaTeamCommand {
    #[command(subcommand)]
    command: VivaTeamSubcommand,
}

#[derive(Subcommand, Debug)]
enum VivaTeamSubcommand {
    #[command(flatten)]
    Crud(CrudSubcommand),
    Approve {
        id: i64,
    },
    Reject {
        id: i64,
    },
    Schedule {
        id: i64,
        #[arg(long)]
        date: String,
        #[arg(long)]
        location: Option<String>,
    },
    Outcome {
        id: i64,
        #[arg(long)]
        outcome: String,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Args, Debug)]
struct SubmissionCommand {
    #[command(subcommand)]
    command: SubmissionSubcommand,
}

#[derive(Subcommand, Debug)]
enum SubmissionSubcommand {
    #[command(flatten)]
    Crud(CrudSubcommand),
    Approve {
        id: i64,
        #[arg(long)]
        comments: Option<String>,
    },
    Reject {
        id: i64,
        #[arg(long)]
        comments: Option<String>,
    },
    RequestRevision {
        id: i64,
        #[arg(long)]
        comments: Option<String>,
    },
}

/// `reqwest` implementation of the shared transport.
#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ReqwestTransport {
    fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self, CliError> {
        let base_url = validate_base_url(base_url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let token = token.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty());
        Ok(Self { client, base_url, token })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = request.url(&self.base_url);
        let mut builder = self.client.request(http_method(request.method), &url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let value = parse_body(&text);

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &value));
        }
        Ok(value)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    if matches!(cli.command, Command::Ping) {
        return run_ping(&cli.base_url).await;
    }

    let transport = ReqwestTransport::new(&cli.base_url, cli.token, Duration::from_secs(cli.timeout_secs))?;
    let api = Api::new(transport);
    let output = execute(&api, cli.command).await?;
    print_json(&output)
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", validate_base_url(base_url)?);
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

/// Run one API command and return what to print.
async fn execute<T: Transport>(api: &Api<T>, command: Command) -> Result<Value, CliError> {
    match command {
        Command::Ping => Ok(Value::String("ok".to_owned())),
        Command::Login { username, password } => to_json(&api.login(&username, &password).await?),
        Command::Whoami => to_json(&api.current_user().await?),
        Command::Stats => to_json(&api.dashboard_stats().await?),
        Command::User(user) => run_user(api, user.command).await,
        Command::Student(crud) => run_crud::<Student, T>(api, crud.command).await,
        Command::Supervisor(crud) => run_crud::<Supervisor, T>(api, crud.command).await,
        Command::Assignment(crud) => run_crud::<Assignment, T>(api, crud.command).await,
        Command::Registration(registration) => run_registration(api, registration.command).await,
        Command::VivaTeam(team) => run_viva_team(api, team.command).await,
        Command::Viva(crud) => run_crud::<Viva, T>(api, crud.command).await,
        Command::Submission(submission) => run_submission(api, submission.command).await,
    }
}

async fn run_crud<R: Resource, T: Transport>(api: &Api<T>, command: CrudSubcommand) -> Result<Value, CliError> {
    let request = match command {
        CrudSubcommand::List(args) => resource::list_request::<R>(args.to_query()),
        CrudSubcommand::Get { key } => resource::get_request::<R>(&key),
        CrudSubcommand::Create { data } => resource::create_request::<R>(parse_data(&data)?),
        CrudSubcommand::Update { key, data } => resource::update_request::<R>(&key, parse_data(&data)?),
        CrudSubcommand::Delete { key } => resource::delete_request::<R>(&key),
    };
    Ok(api.send(request).await?)
}

async fn run_user<T: Transport>(api: &Api<T>, command: UserSubcommand) -> Result<Value, CliError> {
    match command {
        UserSubcommand::Crud(crud) => run_crud::<User, T>(api, crud).await,
        UserSubcommand::Activate { id } => to_json(&api.users().set_active(id, true).await?),
        UserSubcommand::Deactivate { id } => to_json(&api.users().set_active(id, false).await?),
    }
}

async fn run_registration<T: Transport>(api: &Api<T>, command: RegistrationSubcommand) -> Result<Value, CliError> {
    let registrations = api.registrations();
    match command {
        RegistrationSubcommand::Crud(crud) => run_crud::<Registration, T>(api, crud).await,
        RegistrationSubcommand::RequestExtension { id, days, reason } => {
            let request = ExtensionRequest { extension_length_days: days, extension_reason: reason };
            to_json(&registrations.request_extension(id, &request).await?)
        }
        RegistrationSubcommand::ApproveExtension { id } => to_json(&registrations.approve_extension(id).await?),
    }
}

async fn run_viva_team<T: Transport>(api: &Api<T>, command: VivaTeamSubcommand) -> Result<Value, CliError> {
    let teams = api.viva_teams();
    match command {
        VivaTeamSubcommand::Crud(crud) => run_crud::<VivaTeam, T>(api, crud).await,
        VivaTeamSubcommand::Approve { id } => to_json(&teams.approve(id).await?),
        VivaTeamSubcommand::Reject { id } => to_json(&teams.reject(id).await?),
        VivaTeamSubcommand::Schedule { id, date, location } => {
            let schedule = VivaSchedule { scheduled_date: date, location };
            to_json(&teams.schedule(id, &schedule).await?)
        }
        VivaTeamSubcommand::Outcome { id, outcome, notes } => {
            let outcome = VivaOutcome { outcome, outcome_notes: notes };
            to_json(&teams.submit_outcome(id, &outcome).await?)
        }
    }
}

async fn run_submission<T: Transport>(api: &Api<T>, command: SubmissionSubcommand) -> Result<Value, CliError> {
    let submissions = api.submissions();
    match command {
        SubmissionSubcommand::Crud(crud) => run_crud::<Submission, T>(api, crud).await,
        SubmissionSubcommand::Approve { id, comments } => {
            to_json(&submissions.approve(id, &ReviewDecision { review_comments: comments }).await?)
        }
        SubmissionSubcommand::Reject { id, comments } => {
            to_json(&submissions.reject(id, &ReviewDecision { review_comments: comments }).await?)
        }
        SubmissionSubcommand::RequestRevision { id, comments } => {
            to_json(&submissions.request_revision(id, &ReviewDecision { review_comments: comments }).await?)
        }
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn validate_base_url(base_url: &str) -> Result<String, CliError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(trimmed.to_owned());
    }
    Err(CliError::InvalidBaseUrl(base_url.to_owned()))
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty filter key in `{raw}`"));
    }
    Ok((key.to_owned(), value.trim().to_owned()))
}

fn parse_data(data: &str) -> Result<Value, CliError> {
    Ok(serde_json::from_str::<Value>(data)?)
}

fn to_json<S: serde::Serialize>(value: &S) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
