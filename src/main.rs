use timetrak::commands::Cli;
use timetrak::libs::{logging, messages::macros::is_debug_mode, messages::Message, terminal};

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_tracing() {
        eprintln!("{}", e);
    }
    let _ = terminal::set_title(&Message::AppTitle.to_string());

    if let Err(e) = Cli::menu().await {
        if is_debug_mode() {
            tracing::error!("{:#}", e);
        } else {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
