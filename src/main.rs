use artcup::app::App;
use artcup::args::AppArgs;
use artcup::store::log_path;
use artcup::tui::Tui;
use artcup::types::AppResult;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

fn init_logger(store_prefix: &str) -> AppResult<()> {
    let logfile = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new("{d} {l} - {m}\n")))
        .build(log_path(store_prefix)?)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;
    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> AppResult<()> {
    let args = AppArgs::parse();
    init_logger(args.store_prefix())?;

    // Configuration and catalog errors are reported before touching the terminal.
    let mut app = App::new(&args)?;
    let tui = Tui::new()?;
    app.run(tui).await
}
