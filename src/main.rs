use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use gitgazer::view::{ProfileView, RenderTarget};
use gitgazer::{Config, ControllerState, GitHubClient, ProfileFetcher, RequestController};

#[derive(Parser, Debug)]
#[command(name = "gitgazer")]
#[command(version = "0.1.0")]
#[command(about = "GitHub profile statistics: languages, stars, and top repositories")]
struct Args {
    /// GitHub username to look up; reads usernames from stdin when omitted
    username: Option<String>,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitgazer=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let github = GitHubClient::with_base_url(config.github_token.as_deref(), &config.api_base)?;
    let fetcher = ProfileFetcher::new(github, config.chart_host.clone())
        .with_limits(config.language_limit, config.top_repo_limit);

    let renderer = TermRenderer::new(args.format.clone(), args.output.clone());
    let mut controller = RequestController::new(fetcher, renderer);

    match args.username {
        Some(ref username) => {
            controller.submit(username).await;
            if controller.state() == ControllerState::Errored {
                std::process::exit(1);
            }
        }
        None => {
            // Interactive session: one request per line until EOF. The
            // controller lives across submissions, so a failed lookup can be
            // retried with the next line.
            eprintln!("Enter a GitHub username per line (Ctrl-D to quit):");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                controller.submit(&line).await;
            }
        }
    }

    Ok(())
}

/// Terminal implementation of the render capability: text, markdown, or
/// JSON output, plus a spinner while a request is in flight.
struct TermRenderer {
    format: String,
    output: Option<String>,
    spinner: Option<ProgressBar>,
}

impl TermRenderer {
    fn new(format: String, output: Option<String>) -> Self {
        Self {
            format,
            output,
            spinner: None,
        }
    }

    fn emit(&self, content: &str) {
        if let Some(ref path) = self.output {
            match std::fs::write(path, content) {
                Ok(()) => tracing::info!("Output written to: {}", path),
                Err(e) => tracing::error!("Failed to write {}: {}", path, e),
            }
        } else {
            println!("{}", content);
        }
    }
}

impl RenderTarget for TermRenderer {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Fetching profile...");
            pb.enable_steady_tick(Duration::from_millis(80));
            self.spinner = Some(pb);
        } else if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn show_profile(&mut self, view: &ProfileView) {
        let content = match self.format.as_str() {
            "json" => match serde_json::to_string_pretty(view) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to encode view as JSON: {}", e);
                    return;
                }
            },
            "markdown" => format_markdown(view),
            _ => format_text(view),
        };
        self.emit(&content);
    }

    fn show_error(&mut self) {
        eprintln!("Could not load that profile. Check the username and try again.");
    }

    fn prompt_blank_username(&mut self) {
        eprintln!("Please enter a GitHub username");
    }
}

fn format_text(view: &ProfileView) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== {} (@{}) ===\n\n",
        view.display_name, view.login
    ));
    output.push_str(&format!("{}\n", view.bio));
    output.push_str(&format!("Avatar: {}\n\n", view.avatar_url));

    output.push_str(&format!(
        "Repos: {}  Followers: {}  Following: {}  Total stars: {}\n",
        view.public_repos, view.followers, view.following, view.total_stars
    ));

    if !view.languages.is_empty() {
        output.push_str("\nLanguages:\n");
        let max = view.chart.values.iter().copied().max().unwrap_or(1).max(1);
        for row in &view.languages {
            let width = (row.count * 24 / max).max(1) as usize;
            output.push_str(&format!(
                "  {} {} ({} repos)\n",
                colorize(&"#".repeat(width), row.color),
                row.name,
                row.count
            ));
        }
    }

    if !view.top_repositories.is_empty() {
        output.push_str("\nTop repositories:\n");
        for repo in &view.top_repositories {
            let language = if repo.language.is_empty() {
                String::new()
            } else {
                format!(" [{}]", repo.language)
            };
            output.push_str(&format!(
                "  - {} (Stars: {}){}\n      {}\n      {}\n",
                repo.name, repo.stars, language, repo.description, repo.url
            ));
        }
    }

    output.push_str(&format!(
        "\nContribution graph: {}\n",
        view.contribution_chart
    ));

    output
}

fn format_markdown(view: &ProfileView) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {} (@{})\n\n", view.display_name, view.login));
    output.push_str(&format!("![avatar]({})\n\n", view.avatar_url));
    output.push_str(&format!("> {}\n\n", view.bio));

    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Public repos | {} |\n", view.public_repos));
    output.push_str(&format!("| Followers | {} |\n", view.followers));
    output.push_str(&format!("| Following | {} |\n", view.following));
    output.push_str(&format!("| Total stars | {} |\n", view.total_stars));

    if !view.languages.is_empty() {
        output.push_str("\n## Languages\n\n");
        output.push_str("| Language | Repositories |\n|----------|--------------|\n");
        for row in &view.languages {
            output.push_str(&format!("| {} | {} |\n", row.name, row.count));
        }
    }

    if !view.top_repositories.is_empty() {
        output.push_str("\n## Top repositories\n\n");
        output.push_str("| Repository | Stars | Language | Description |\n");
        output.push_str("|------------|-------|----------|-------------|\n");
        for repo in &view.top_repositories {
            output.push_str(&format!(
                "| [{}]({}) | {} | {} | {} |\n",
                repo.name, repo.url, repo.stars, repo.language, repo.description
            ));
        }
    }

    output.push_str(&format!(
        "\n![Contributions]({})\n",
        view.contribution_chart
    ));

    output
}

/// Wrap `text` in a truecolor escape for a `#rrggbb` color. Colors that do
/// not parse render unstyled.
fn colorize(text: &str, hex: &str) -> String {
    match hex_rgb(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
        None => text.to_string(),
    }
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
