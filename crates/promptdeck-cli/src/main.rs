mod generate;
mod repl;

use anyhow::Result;
use clap::{Parser, Subcommand};
use promptdeck_client::{CompletionClient, PromptController, SubmitOutcome};
use generate::Overrides;
use promptdeck_core::{preset, ClientConfig, FormState};
use uuid::Uuid;
use repl::ReplCommand;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "promptdeck")]
#[command(about = "PromptDeck - prompt presets for a text completion endpoint", long_about = None)]
struct Cli {
    /// Completion service URL (overrides PROMPTDECK_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in presets
    Presets,

    /// Submit one completion request
    Generate {
        /// Preset to start from (index or label)
        #[arg(short, long)]
        preset: Option<String>,

        /// Prompt text (replaces the preset's prompt)
        #[arg(long)]
        prompt: Option<String>,

        /// Sampling temperature
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: Option<f64>,

        /// Max new tokens to generate
        #[arg(short, long, allow_negative_numbers = true)]
        max_tokens: Option<i64>,

        /// Nucleus sampling probability
        #[arg(long, allow_negative_numbers = true)]
        top_p: Option<f64>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    tracing::debug!(url = %config.url(), "Using completion endpoint");

    match cli.command {
        Some(Commands::Presets) => cmd_presets(),
        Some(Commands::Generate {
            preset,
            prompt,
            temperature,
            max_tokens,
            top_p,
            output,
        }) => {
            let overrides = Overrides {
                prompt,
                temperature,
                max_tokens,
                top_p,
            };
            cmd_generate(&config, preset.as_deref(), overrides, &output).await?
        }
        None => run_interactive(&config).await?,
    }

    Ok(())
}

async fn cmd_generate(
    config: &ClientConfig,
    preset_name: Option<&str>,
    overrides: Overrides,
    output_format: &str,
) -> Result<()> {
    let form = generate::prepare_form(preset_name, overrides)?;
    let controller = PromptController::with_form(CompletionClient::new(config)?, form);

    let outcome = controller.submit().await;
    if let SubmitOutcome::Blocked(reason) = &outcome {
        anyhow::bail!("Nothing to submit: {}", reason);
    }

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&controller.snapshot())?),
        _ => {
            if let Some(text) = outcome.response() {
                println!("{}", text);
            }
        }
    }

    Ok(())
}

fn cmd_presets() {
    println!();
    println!("Presets:");
    println!("{:-<60}", "");
    println!("  {:<4} {:<16} {:>6} {:>8} {:>6}", "#", "Label", "Temp", "Tokens", "Top P");
    println!("{:-<60}", "");
    for (i, p) in preset::presets().iter().enumerate() {
        println!(
            "  {:<4} {:<16} {:>6.1} {:>8} {:>6.1}",
            i + 1,
            p.label,
            p.temperature,
            p.max_tokens,
            p.top_p
        );
    }
    println!();
    println!("  Use: use <#> or <label> (e.g., `use 1` or `use factual`)");
    println!();
}

async fn run_interactive(config: &ClientConfig) -> Result<()> {
    let controller = PromptController::new(CompletionClient::new(config)?);
    display_welcome(config, controller.session_id());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let command = match repl::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        match command {
            ReplCommand::Help => display_help(),
            ReplCommand::Presets => cmd_presets(),
            ReplCommand::Use(name) => match preset::resolve(&name) {
                Ok(p) => {
                    controller.select_preset(p);
                    display_form(&controller.snapshot());
                }
                Err(e) => println!("Error: {}", e),
            },
            ReplCommand::Preview(name) => match preset::resolve(&name) {
                Ok(p) => {
                    controller.hover_preset(Some(p.prompt));
                    if let Some(text) = controller.snapshot().hovered_preset {
                        println!();
                        println!("  {}", text);
                        println!();
                    }
                    controller.hover_preset(None);
                }
                Err(e) => println!("Error: {}", e),
            },
            ReplCommand::Prompt(text) => controller.set_prompt(text),
            ReplCommand::Temperature(t) => controller.set_temperature(t),
            ReplCommand::MaxTokens(n) => controller.set_max_tokens(n),
            ReplCommand::TopP(p) => controller.set_top_p(p),
            ReplCommand::Show => display_form(&controller.snapshot()),
            ReplCommand::Generate => {
                if let Err(reason) = controller.snapshot().check_submit() {
                    println!("Cannot generate: {}", reason);
                    continue;
                }
                println!("Generating...");
                match controller.submit().await {
                    SubmitOutcome::Blocked(reason) => println!("Cannot generate: {}", reason),
                    SubmitOutcome::Discarded => break,
                    outcome => {
                        println!();
                        println!("Response:");
                        println!("{:-<60}", "");
                        println!("{}", outcome.response().unwrap_or_default());
                        println!();
                    }
                }
            }
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[1;1H");
                stdout.flush()?;
            }
            ReplCommand::Quit => break,
        }
    }

    controller.close();
    println!("  Goodbye!");
    Ok(())
}

fn display_welcome(config: &ClientConfig, session_id: Uuid) {
    println!();
    println!("  PromptDeck");
    println!("  Completion endpoint: {}", config.url());
    println!("  Session: {}", session_id);
    println!();
    println!("  Pick a preset with `use <#|label>` or type `prompt <text>`, then `generate`.");
    println!("  Type `help` for all commands.");
    println!();
}

fn display_help() {
    println!();
    println!("Available Commands:");
    println!("  presets, p              List presets (with index numbers)");
    println!("  use, u <#|label>        Load a preset into the form");
    println!("  preview, v <#|label>    Show a preset's prompt without loading it");
    println!("  prompt <text>           Replace the prompt text");
    println!("  temperature, t <f>      Sampling temperature (hint: 0-1)");
    println!("  max-tokens, m <n>       Max new tokens (hint: >= 1)");
    println!("  top-p <f>               Nucleus sampling probability (hint: 0-1)");
    println!("  show, s                 Show the current form");
    println!("  generate, g             Submit the form");
    println!("  clear, cls              Clear screen");
    println!("  help, h                 Show this help message");
    println!("  exit, quit, q           Leave PromptDeck");
    println!();
}

fn display_form(form: &FormState) {
    let label = if form.label.is_empty() { "-" } else { form.label.as_str() };
    println!();
    println!("Form:");
    println!("{:-<60}", "");
    println!("  Preset:        {}", label);
    println!("  Temperature:   {}", form.temperature);
    println!("  Max Tokens:    {}", form.max_tokens);
    println!("  Top P:         {}", form.top_p);
    println!("  Prompt:        {}", form.prompt);
    println!(
        "  Submit:        {}",
        match form.check_submit() {
            Ok(()) => "ready".to_string(),
            Err(reason) => reason.to_string(),
        }
    );
    println!();
}
