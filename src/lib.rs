//! ScrollReveal admin CLI
//!
//! 滚动动画目标管理命令行

pub mod cli;

use anyhow::Context;
use sr_app::usecases::targets::ListParams;
use sr_host::bootstrap::config::load_config_or_default;
use sr_host::bootstrap::tracing::init_tracing_subscriber;
use sr_host::commands::{page, settings, targets, widget, CommandError, CommandResult};
use sr_host::{AppPaths, AppRuntime};

use cli::{Cli, Command, SettingsCommand, TargetArgs, WidgetCommand};

impl From<TargetArgs> for targets::TargetInput {
    fn from(args: TargetArgs) -> Self {
        Self {
            selector: args.selector,
            label: args.label,
            comment: args.comment,
            enabled: args.enabled,
            options: args.options,
            return_to_list: args.return_to_list,
        }
    }
}

/// Loads config, initialises tracing and wires the runtime.
pub fn bootstrap(cli: &Cli) -> anyhow::Result<AppRuntime> {
    let config = load_config_or_default(cli.config.as_deref())?;
    let paths = AppPaths::resolve(&config);

    let log_dir = config.logging.file_enabled.then_some(paths.logs_dir.as_path());
    init_tracing_subscriber(log_dir).context("Failed to initialize tracing")?;

    AppRuntime::from_paths(paths)
}

pub async fn dispatch(runtime: &AppRuntime, command: Command) -> CommandResult {
    match command {
        Command::List {
            search,
            status,
            sort,
            page,
        } => {
            let params = ListParams {
                search,
                status,
                sort,
                page,
            };
            targets::list(runtime, params).await
        }
        Command::Show { id } => targets::show(runtime, id).await,
        Command::Add(fields) => targets::add(runtime, fields.into()).await,
        Command::Edit { id, fields } => targets::edit(runtime, id, fields.into()).await,
        Command::Delete { id, yes } => targets::delete(runtime, id, yes).await,
        Command::Duplicate { id, selector } => targets::duplicate(runtime, id, &selector).await,
        Command::Settings(SettingsCommand::Get { path }) => {
            settings::get(runtime, path.as_deref()).await
        }
        Command::Settings(SettingsCommand::Set { path, value }) => {
            settings::set(runtime, &path, &value).await
        }
        Command::Settings(SettingsCommand::Import { file }) => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))
                .map_err(CommandError::Other)?;
            settings::import(runtime, &json).await
        }
        Command::Settings(SettingsCommand::Library) => settings::library_status(runtime).await,
        Command::Widget(WidgetCommand::Render) => widget::render(runtime).await,
        Command::Widget(WidgetCommand::SetKey { name }) => {
            widget::set_key(runtime, Some(name)).await
        }
        Command::Widget(WidgetCommand::ClearKey) => widget::set_key(runtime, None).await,
        Command::Widget(WidgetCommand::DeepLink { phone, message }) => {
            widget::deep_link(&phone, &message)
        }
        Command::Page { path } => page::attachments(runtime, &path).await,
        Command::Preview {
            source,
            options,
            configs,
        } => {
            page::preview(
                runtime,
                source.into(),
                options.as_deref(),
                configs.as_deref(),
            )
            .await
        }
    }
}
