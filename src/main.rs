//! # curlform Main Entry Point

use anyhow::Result;
use curlform::cmd_args::CommandLineArgs;
use curlform::config::{self, ClipboardMode};
use curlform::form::io::{TerminalEventStream, TerminalRenderStream};
use curlform::form::services::CopyService;
use curlform::print_mode::print_command;
use curlform::AppController;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();
    let clipboard_mode = if cmd_args.no_clipboard() {
        ClipboardMode::Memory
    } else {
        config::get_clipboard_mode()
    };
    let clipboard_hold = config::get_clipboard_hold();
    tracing::debug!(
        "Arguments: {:?}, clipboard: {:?}, hold: {:?}",
        cmd_args,
        clipboard_mode,
        clipboard_hold
    );

    let draft = cmd_args.to_draft();

    if cmd_args.print() {
        let mut copy_service = cmd_args
            .copy()
            .then(|| CopyService::new(clipboard_mode, clipboard_hold));
        return print_command(&draft, copy_service.as_mut(), &mut std::io::stdout());
    }

    let mut app = AppController::with_io_streams(
        draft,
        CopyService::new(clipboard_mode, clipboard_hold),
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run()
}

fn init_tracing_subscriber() {
    let filter = config::get_log_filter();
    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid {}='{}': {}", config::LOG_LEVEL_ENV_VAR, filter, e);
        EnvFilter::new(config::DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
