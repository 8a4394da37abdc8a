mod broadcaster;
mod config;
mod input;
mod render;
mod theme;

use clap::Parser;
use common::config::Validate;
use common::games::tictactoe::{SessionCommand, TicTacToeSession};
use common::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use broadcaster::TerminalBroadcaster;
use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
use input::parse_input;
use render::HELP_LINE;
use theme::Theme;

const COMMAND_BUFFER_SIZE: usize = 32;

#[derive(Parser)]
#[command(name = "tic_tac_toe_client")]
struct Args {
    /// YAML config file; created by --save-config
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long, conflicts_with = "two_players")]
    vs_computer: bool,

    /// Play two humans on one board even if the config says otherwise
    #[arg(long)]
    two_players: bool,

    /// Seed for the computer's corner and side choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum)]
    theme: Option<Theme>,

    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    no_color: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply(&self, config: Config) -> Config {
        Config {
            vs_computer: !self.two_players && (config.vs_computer || self.vs_computer),
            computer_move_delay_ms: self.delay_ms.unwrap_or(config.computer_move_delay_ms),
            theme: self.theme.unwrap_or(config.theme),
            seed: self.seed.or(config.seed),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let config = args.apply(config_manager.get_config()?);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", args.config);
    }

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER_SIZE);
    let broadcaster = TerminalBroadcaster::new(config.theme, !args.no_color);
    let session = tokio::spawn(TicTacToeSession::run(
        config.session_settings(),
        command_rx,
        broadcaster,
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Some(SessionCommand::Shutdown) => break,
            Some(command) => {
                if command_tx.send(command).await.is_err() {
                    break;
                }
            }
            None => println!("{}", HELP_LINE),
        }
    }

    let _ = command_tx.send(SessionCommand::Shutdown).await;
    let scoreboard = session.await?;
    println!(
        "Final score: X {} / O {} / draws {}",
        scoreboard.x_wins, scoreboard.o_wins, scoreboard.draws
    );

    Ok(())
}
