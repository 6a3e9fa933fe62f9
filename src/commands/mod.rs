use twilight_interactions::command::CreateCommand;
use twilight_model::application::command::Command;

pub mod help;
pub mod ping;
pub mod start;

pub fn all() -> [Command; 3] {
    [
        start::StartCommand::create_command().into(),
        help::HelpCommand::create_command().into(),
        ping::PingCommand::create_command().into(),
    ]
}
