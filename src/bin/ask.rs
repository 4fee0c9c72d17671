use clap::Parser;
use digital_me::core::playground::EntryKind;
use digital_me::utils::{logger, validation::Validate};
use digital_me::{
    IntentResponder, Playground, PlaygroundReply, ProfileStore, TomlConfig, Transcript,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "ask")]
#[command(about = "Terminal playground: ask the digital me about the profile")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Profile file, overrides profile.path from the config
    #[arg(short, long)]
    profile: Option<String>,

    /// Override playground.stage_delay_ms
    #[arg(long)]
    stage_delay_ms: Option<u64>,

    /// Answer a single query and exit
    #[arg(short, long)]
    query: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut config = match &args.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    if let Some(delay) = args.stage_delay_ms {
        config.playground.stage_delay_ms = delay;
    }
    if let Some(profile) = args.profile {
        config.profile.path = Some(profile);
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let profile = ProfileStore::load(config.profile.path.as_deref())?;
    let model_name = profile.first_name().to_lowercase();
    let playground = Playground::new(IntentResponder::new(profile), config.stage_delay());

    if let Some(query) = args.query {
        let reply = playground.ask(&query, print_stage).await;
        let mut transcript = Transcript::new();
        if transcript.record(&reply) {
            print_entries(&transcript, 0);
        }
        return Ok(());
    }

    let mut transcript = Transcript::new();
    transcript.push(
        EntryKind::System,
        format!("{}_INFERENCE_ENGINE V2.0 initialized...", model_name.to_uppercase()),
    );
    transcript.push(
        EntryKind::System,
        format!("Model loaded {}-fancy-embeddings-v2 | Ready for inference", model_name),
    );
    transcript.push(
        EntryKind::Bot,
        "Hello! Ask me anything. Try \"whoami\", \"projects\", \"skills\" or \"clear\".",
    );
    transcript.push(
        EntryKind::System,
        "Ctrl-C abandons a running query. Ctrl-C at the prompt or \"exit\" quits.",
    );
    print_entries(&transcript, 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("{}@inference:~$ ", model_name);
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };
        let query = line.trim();
        if query == "exit" || query == "quit" {
            break;
        }
        if query.is_empty() {
            continue;
        }

        transcript.push(EntryKind::User, query);
        let before = transcript.entries().len();
        let reply = playground
            .ask_until(query, print_stage, tokio::signal::ctrl_c())
            .await;
        if reply == PlaygroundReply::Cancelled {
            println!("{} Query cancelled.", EntryKind::System.prefix());
        }
        if transcript.record(&reply) {
            // clear 會重設整個紀錄
            let start = if transcript.entries().len() < before { 0 } else { before };
            print_entries(&transcript, start);
        }
    }

    Ok(())
}

fn print_stage(stage: &str) {
    println!("{} {}", EntryKind::System.prefix(), stage);
}

fn print_entries(transcript: &Transcript, start: usize) {
    for entry in &transcript.entries()[start..] {
        println!("{}", entry);
    }
}
