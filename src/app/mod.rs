pub mod args;
mod config;
mod headless;
mod setup;

pub use args::AppArgs;
pub use config::Settings;

use anyhow::Result;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp {
        args,
        settings,
        log_filter,
    } = setup::prepare(args)?;

    match args.command {
        Some(command) => headless::run(command.action(), &settings).await,
        None => crate::ui::run_tui(settings, &log_filter).await,
    }
}
