use log::{error, info};
use scriptdoc::{OrganizerConfig, run, version};
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("scriptdoc v{}", version());

    let config = match OrganizerConfig::from_tool_location() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            println!("✗ {}", e);
            return;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&config, &mut stdin.lock(), &mut stdout.lock()) {
        error!("Run aborted: {}", e);
        println!("✗ {}", e);
    }
}
