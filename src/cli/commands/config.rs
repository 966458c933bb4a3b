use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        println!("📄 Current configuration ({}):\n", path.display());
        ConfigLogic::print(cfg)?;
    }

    if *edit_config {
        ConfigLogic::edit(&path.to_string_lossy(), editor.as_deref())?;
    }

    if !*print_config && !*edit_config {
        println!("📄 Config file: {}", path.display());
        println!("Use --print to show it or --edit to open it.");
    }

    Ok(())
}
